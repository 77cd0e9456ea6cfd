use fairdice_core::{ContributionPolicy, GameConfig};

#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub verbose: bool,
    pub game: GameConfig,
}

impl CliConfig {
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "warn" };
        format!("fairdice={},fairdice_core={}", level, level)
    }

    pub fn apply_play_options(
        &mut self,
        reprompt: bool,
        min_dice: Option<usize>,
    ) -> anyhow::Result<()> {
        if reprompt {
            self.game.contribution_policy = ContributionPolicy::Reprompt;
        }
        if let Some(min_dice) = min_dice {
            self.game.min_dice = min_dice;
        }
        self.game.validate()?;
        Ok(())
    }
}
