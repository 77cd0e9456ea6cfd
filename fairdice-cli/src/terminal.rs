use crate::commands::probability_table;
use dialoguer::Input;
use fairdice_core::{Counterpart, DiceError, GameEvent, Party, Prompt, Result, Verdict};
use std::io::{BufRead, IsTerminal, Write};

/// Plays the human's side over stdin/stdout.
///
/// Uses dialoguer prompts on a terminal and plain line reads when stdin is
/// piped.
pub struct TerminalCounterpart {
    interactive: bool,
}

impl TerminalCounterpart {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
        }
    }

    fn read_line(&self, prompt: &str) -> Result<String> {
        if self.interactive {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| DiceError::interaction(e.to_string()));
        }

        print!("{}: ", prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(DiceError::interaction("input closed"));
        }
        Ok(line.trim_end().to_string())
    }
}

impl Counterpart for TerminalCounterpart {
    fn notify(&mut self, event: &GameEvent) -> Result<()> {
        if let GameEvent::Probabilities { dice, matrix } = event {
            println!();
            println!("Probability of the win for the row die against the column die:");
            println!("{}", probability_table(dice, matrix));
            return Ok(());
        }
        if let Some(line) = render_event(event) {
            println!("{}", line);
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        let (menu, question) = render_prompt(prompt);
        for line in menu {
            println!("{}", line);
        }
        self.read_line(&question)
    }
}

pub fn render_event(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::FirstMoveDraw => "Let's determine who makes the first move.".to_string(),
        GameEvent::Committed { digest, max } => format!(
            "I selected a random value in the range 0..{} (HMAC={}).",
            max, digest
        ),
        GameEvent::InvalidContribution { input } => {
            format!("Invalid input '{}'. Please enter an integer.", input)
        }
        GameEvent::Revealed { value, key } => format!("My number is {} (KEY={}).", value, key),
        GameEvent::RoundResult {
            user_value,
            revealed_value,
            result,
            modulus,
        } => format!(
            "The result is {} + {} = {} (mod {}).",
            user_value, revealed_value, result, modulus
        ),
        GameEvent::FirstMover(Party::Human) => "You make the first move.".to_string(),
        GameEvent::FirstMover(Party::Computer) => "I make the first move.".to_string(),
        GameEvent::DieChosen {
            party: Party::Computer,
            die,
            ..
        } => format!("I choose the [{}] dice.", die),
        GameEvent::DieChosen {
            party: Party::Human,
            die,
            ..
        } => format!("You choose the [{}] dice.", die),
        GameEvent::InvalidSelection { .. } => "Invalid input. Try again.".to_string(),
        GameEvent::Probabilities { .. } => return None,
        GameEvent::ThrowStarted(Party::Computer) => "It's time for my throw.".to_string(),
        GameEvent::ThrowStarted(Party::Human) => "It's time for your throw.".to_string(),
        GameEvent::Thrown {
            party: Party::Computer,
            face,
        } => format!("My throw is {}.", face),
        GameEvent::Thrown {
            party: Party::Human,
            face,
        } => format!("Your throw is {}.", face),
        GameEvent::Finished(Verdict::HumanWins) => "You win!".to_string(),
        GameEvent::Finished(Verdict::ComputerWins) => "I win!".to_string(),
        GameEvent::Finished(Verdict::Tie) => "It's a tie!".to_string(),
    };
    Some(line)
}

/// Menu lines to print, then the question to ask
pub fn render_prompt(prompt: &Prompt) -> (Vec<String>, String) {
    match prompt {
        Prompt::Contribution { modulus } => {
            (Vec::new(), format!("Add your number modulo {}", modulus))
        }
        Prompt::DieSelection { available } => {
            let mut menu = vec!["Choose your dice:".to_string()];
            menu.extend(
                available
                    .iter()
                    .map(|(index, die)| format!("{} - {}", index, die)),
            );
            menu.push("X - exit".to_string());
            menu.push("? - help".to_string());
            (menu, "Your selection".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairdice_core::{CommitmentKey, CommitmentScheme, Die, HmacSha3};

    #[test]
    fn test_render_fairness_lines() {
        let key = CommitmentKey::from_bytes([7; 32]);
        let digest = HmacSha3::commit(&key, 5).unwrap();

        let committed = render_event(&GameEvent::Committed { digest, max: 5 }).unwrap();
        assert_eq!(
            committed,
            "I selected a random value in the range 0..5 \
             (HMAC=0b74a6e747a3b698d5e3d0375e7bc93b3cbdfc39ed74be22e6cf2183dd1bb128)."
        );

        let revealed = render_event(&GameEvent::Revealed { value: 5, key }).unwrap();
        assert!(revealed.starts_with("My number is 5 (KEY=0707"));

        let result = render_event(&GameEvent::RoundResult {
            user_value: 4,
            revealed_value: 5,
            result: 3,
            modulus: 6,
        })
        .unwrap();
        assert_eq!(result, "The result is 4 + 5 = 3 (mod 6).");
    }

    #[test]
    fn test_render_game_lines() {
        let die: Die = "1,1,6,6,8,8".parse().unwrap();
        assert_eq!(
            render_event(&GameEvent::DieChosen {
                party: Party::Computer,
                index: 1,
                die,
            })
            .unwrap(),
            "I choose the [1,1,6,6,8,8] dice."
        );
        assert_eq!(
            render_event(&GameEvent::Finished(Verdict::Tie)).unwrap(),
            "It's a tie!"
        );
    }

    #[test]
    fn test_render_selection_menu() {
        let die: Die = "3,3,5,5,7,7".parse().unwrap();
        let (menu, question) = render_prompt(&Prompt::DieSelection {
            available: vec![(2, die)],
        });

        assert_eq!(
            menu,
            vec!["Choose your dice:", "2 - 3,3,5,5,7,7", "X - exit", "? - help"]
        );
        assert_eq!(question, "Your selection");

        let (menu, question) = render_prompt(&Prompt::Contribution { modulus: 2 });
        assert!(menu.is_empty());
        assert_eq!(question, "Add your number modulo 2");
    }
}
