use crate::config::GameConfig;
use crate::dice::DiceSet;
use crate::interaction::{Counterpart, GameEvent, MenuChoice, Prompt};
use crate::player::{ComputerStrategy, LowestIndexStrategy, Party, SelectionState};
use crate::probability::ProbabilityMatrix;
use crate::protocol::FairRandomProtocol;
use crate::random::RandomnessProvider;
use crate::{DiceError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Phases of one game, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    DetermineFirstMove,
    SelectDice,
    Throw,
    Compare,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    HumanWins,
    ComputerWins,
    Tie,
}

impl Verdict {
    /// Strictly greater face wins
    pub fn compare(human_face: i64, computer_face: i64) -> Self {
        match human_face.cmp(&computer_face) {
            Ordering::Greater => Verdict::HumanWins,
            Ordering::Less => Verdict::ComputerWins,
            Ordering::Equal => Verdict::Tie,
        }
    }

    pub fn winner(&self) -> Option<Party> {
        match self {
            Verdict::HumanWins => Some(Party::Human),
            Verdict::ComputerWins => Some(Party::Computer),
            Verdict::Tie => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub first_mover: Party,
    pub human_die: usize,
    pub computer_die: usize,
    pub human_face: i64,
    pub computer_face: i64,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Completed(GameReport),
    /// The human left at the selection menu
    Exited,
}

/// One game of non-transitive dice against the computer
pub struct DiceGame<R, S = LowestIndexStrategy> {
    id: Uuid,
    dice: DiceSet,
    config: GameConfig,
    protocol: FairRandomProtocol<R>,
    strategy: S,
    phase: GamePhase,
}

impl<R: RandomnessProvider> DiceGame<R, LowestIndexStrategy> {
    pub fn new(dice: DiceSet, config: GameConfig, rng: R) -> Result<Self> {
        Self::with_strategy(dice, config, rng, LowestIndexStrategy)
    }
}

impl<R: RandomnessProvider, S: ComputerStrategy> DiceGame<R, S> {
    pub fn with_strategy(dice: DiceSet, config: GameConfig, rng: R, strategy: S) -> Result<Self> {
        config.check_dice(&dice)?;

        let id = Uuid::new_v4();
        tracing::info!("Game {} created with {} dice", id, dice.len());

        Ok(Self {
            id,
            dice,
            config,
            protocol: FairRandomProtocol::new(rng),
            strategy,
            phase: GamePhase::DetermineFirstMove,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Play the game to the end. Only one game per instance.
    pub fn play<C: Counterpart + ?Sized>(&mut self, counterpart: &mut C) -> Result<GameOutcome> {
        if self.phase != GamePhase::DetermineFirstMove {
            return Err(DiceError::InvalidState(format!(
                "game {} already played",
                self.id
            )));
        }

        let first_mover = self.determine_first_move(counterpart)?;

        self.phase = GamePhase::SelectDice;
        let mut selection = SelectionState::new();
        let (human_die, computer_die) = match first_mover {
            Party::Human => {
                let Some(human) = self.human_selection(counterpart, &mut selection)? else {
                    return Ok(self.exit());
                };
                let computer = self.computer_selection(counterpart, &mut selection)?;
                (human, computer)
            }
            Party::Computer => {
                let computer = self.computer_selection(counterpart, &mut selection)?;
                let Some(human) = self.human_selection(counterpart, &mut selection)? else {
                    return Ok(self.exit());
                };
                (human, computer)
            }
        };

        self.phase = GamePhase::Throw;
        let computer_face = self.throw(counterpart, Party::Computer, computer_die)?;
        let human_face = self.throw(counterpart, Party::Human, human_die)?;

        self.phase = GamePhase::Compare;
        let verdict = Verdict::compare(human_face, computer_face);
        counterpart.notify(&GameEvent::Finished(verdict))?;

        self.phase = GamePhase::Done;
        tracing::info!(
            "Game {} finished: human {} vs computer {} -> {:?}",
            self.id,
            human_face,
            computer_face,
            verdict
        );

        Ok(GameOutcome::Completed(GameReport {
            first_mover,
            human_die,
            computer_die,
            human_face,
            computer_face,
            verdict,
        }))
    }

    /// 1-bit protocol round: 0 means the human moves first
    fn determine_first_move<C: Counterpart + ?Sized>(&mut self, counterpart: &mut C) -> Result<Party> {
        counterpart.notify(&GameEvent::FirstMoveDraw)?;
        let round = self
            .protocol
            .run(counterpart, 1, self.config.contribution_policy)?;

        let first_mover = if round.computed_value == 0 {
            Party::Human
        } else {
            Party::Computer
        };
        counterpart.notify(&GameEvent::FirstMover(first_mover))?;

        tracing::info!("Game {}: {} moves first", self.id, first_mover);
        Ok(first_mover)
    }

    fn computer_selection<C: Counterpart + ?Sized>(
        &mut self,
        counterpart: &mut C,
        selection: &mut SelectionState,
    ) -> Result<usize> {
        let index = self
            .strategy
            .choose(&self.dice, selection)
            .ok_or(DiceError::NoDiceAvailable)?;
        selection.claim(index, &self.dice)?;
        self.announce_choice(counterpart, Party::Computer, index)?;
        Ok(index)
    }

    /// Re-prompts until a free die is picked; `None` if the human exits
    fn human_selection<C: Counterpart + ?Sized>(
        &self,
        counterpart: &mut C,
        selection: &mut SelectionState,
    ) -> Result<Option<usize>> {
        loop {
            let available = selection
                .available(&self.dice)
                .map(|(index, die)| (index, die.clone()))
                .collect();
            let input = counterpart.ask(&Prompt::DieSelection { available })?;

            let choice = input
                .parse::<MenuChoice>()
                .and_then(|choice| match choice {
                    MenuChoice::Die(index) => selection.claim(index, &self.dice).map(|_| choice),
                    other => Ok(other),
                });

            match choice {
                Ok(MenuChoice::Die(index)) => {
                    self.announce_choice(counterpart, Party::Human, index)?;
                    return Ok(Some(index));
                }
                Ok(MenuChoice::Exit) => return Ok(None),
                Ok(MenuChoice::Help) => {
                    counterpart.notify(&GameEvent::Probabilities {
                        dice: self.dice.clone(),
                        matrix: ProbabilityMatrix::compute(&self.dice),
                    })?;
                }
                Err(err) => {
                    tracing::debug!("Game {}: {}", self.id, err);
                    counterpart.notify(&GameEvent::InvalidSelection {
                        input: input.trim().to_string(),
                    })?;
                }
            }
        }
    }

    fn announce_choice<C: Counterpart + ?Sized>(
        &self,
        counterpart: &mut C,
        party: Party,
        index: usize,
    ) -> Result<()> {
        let die = self
            .dice
            .get(index)
            .ok_or_else(|| DiceError::selection(format!("die {} does not exist", index)))?;
        tracing::info!("Game {}: {} takes die {} [{}]", self.id, party, index, die);
        counterpart.notify(&GameEvent::DieChosen {
            party,
            index,
            die: die.clone(),
        })
    }

    fn throw<C: Counterpart + ?Sized>(
        &mut self,
        counterpart: &mut C,
        party: Party,
        index: usize,
    ) -> Result<i64> {
        let die = self
            .dice
            .get(index)
            .ok_or_else(|| DiceError::selection(format!("die {} does not exist", index)))?
            .clone();

        counterpart.notify(&GameEvent::ThrowStarted(party))?;
        let max = (die.face_count() - 1) as u64;
        let round = self
            .protocol
            .run(counterpart, max, self.config.contribution_policy)?;

        let face = die.roll(round.computed_value as i64);
        counterpart.notify(&GameEvent::Thrown { party, face })?;
        Ok(face)
    }

    fn exit(&mut self) -> GameOutcome {
        tracing::info!("Game {}: human exited during selection", self.id);
        self.phase = GamePhase::Done;
        GameOutcome::Exited
    }
}
