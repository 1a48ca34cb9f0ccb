//! Command-line options shared by the window and console games.

use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::models::Mode;

#[derive(Args, Debug, Clone)]
pub struct GameOptions {
    /// Game to start in. `menu` asks first, `two-player` and `computer` skip it.
    #[arg(long, value_enum, default_value_t = ModeArg::Menu)]
    pub mode: ModeArg,

    /// Seed for the computer opponent, for reproducible games
    #[arg(long, env = "TIC_TAC_TOE_SEED")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Menu,
    TwoPlayer,
    Computer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Menu => Mode::Menu,
            ModeArg::TwoPlayer => Mode::HumanVsHuman,
            ModeArg::Computer => Mode::HumanVsComputer,
        }
    }
}

impl GameOptions {
    pub fn mode(&self) -> Mode {
        self.mode.into()
    }

    /// The opponent's generator: seeded when a seed was given, from OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rand::RngCore;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        game: GameOptions,
    }

    #[test]
    fn modes_map_onto_game_modes() {
        for (flag, mode) in [
            ("menu", Mode::Menu),
            ("two-player", Mode::HumanVsHuman),
            ("computer", Mode::HumanVsComputer),
        ] {
            let cli = TestCli::try_parse_from(["test", "--mode", flag]).unwrap();
            assert_eq!(cli.game.mode(), mode);
        }
    }

    #[test]
    fn same_seed_same_generator() {
        let cli = TestCli::try_parse_from(["test", "--seed", "11"]).unwrap();
        assert_eq!(cli.game.seed, Some(11));
        assert_eq!(cli.game.rng().next_u64(), cli.game.rng().next_u64());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(TestCli::try_parse_from(["test", "--mode", "online"]).is_err());
    }
}
