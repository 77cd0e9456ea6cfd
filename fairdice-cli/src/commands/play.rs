use crate::config::CliConfig;
use crate::terminal::TerminalCounterpart;
use fairdice_core::{DiceGame, DiceSet, GameOutcome, SecureRandom};

pub fn play(specs: &[String], config: &CliConfig) -> anyhow::Result<()> {
    let dice = DiceSet::parse(specs)?;
    let mut game = DiceGame::new(dice, config.game.clone(), SecureRandom::new())?;
    let mut counterpart = TerminalCounterpart::new();

    match game.play(&mut counterpart)? {
        GameOutcome::Completed(report) => {
            tracing::debug!("Game {} report: {:?}", game.id(), report);
        }
        GameOutcome::Exited => {
            tracing::debug!("Game {} left before the throws", game.id());
        }
    }

    Ok(())
}
