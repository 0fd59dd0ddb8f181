//! Game-level settings read from `Section.Name=value` pairs.
//!
//! Bot options are shared by both sides except the search depth, which is set
//! per color. A side that is not a bot is played by the random engine, since
//! headless games have no interactive player.

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_options::{
    invalid_value, parse_bool, parse_depth, parse_optimization, parse_scoring, EngineOptions,
    OptionError, RandomSeed,
};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::draughts_types::Color;
use crate::search::board_scoring::ScoringMode;
use crate::utils::engine_match_harness::MatchConfig;
use tracing::warn;

/// Window and pacing keys of the interactive game; headless runs ignore them.
fn is_ui_only_key(key: &str) -> bool {
    key == "Bot.BotDelayMS" || key.starts_with("WindowSize.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub white_is_bot: bool,
    pub black_is_bot: bool,
    pub white_bot_level: u8,
    pub black_bot_level: u8,
    pub scoring: ScoringMode,
    pub pruning: bool,
    pub no_random: bool,
    pub max_turns: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            white_is_bot: true,
            black_is_bot: true,
            white_bot_level: 3,
            black_bot_level: 3,
            scoring: ScoringMode::Number,
            pruning: true,
            no_random: false,
            max_turns: MatchConfig::default().max_turns,
        }
    }
}

impl GameSettings {
    /// Defaults overridden by every `(key, value)` pair in order.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            settings.set(key, value)?;
        }
        Ok(settings)
    }

    /// Parses `key=value` command-line style arguments.
    pub fn from_args<I, S>(args: I) -> Result<Self, OptionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| OptionError::MalformedPair(arg.to_owned()))?;
            settings.set(key.trim(), value)?;
        }
        Ok(settings)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), OptionError> {
        let value = value.trim();
        match key {
            "Bot.IsWhiteBot" => self.white_is_bot = parse_bool(key, value)?,
            "Bot.IsBlackBot" => self.black_is_bot = parse_bool(key, value)?,
            "Bot.WhiteBotLevel" => self.white_bot_level = parse_depth(key, value)?,
            "Bot.BlackBotLevel" => self.black_bot_level = parse_depth(key, value)?,
            "Bot.BotScoringType" => self.scoring = parse_scoring(value)?,
            "Bot.Optimization" => self.pruning = parse_optimization(value),
            "Bot.NoRandom" => self.no_random = parse_bool(key, value)?,
            "Game.MaxNumTurns" => {
                self.max_turns = value.parse::<u32>().map_err(|_| invalid_value(key, value))?
            }
            _ if is_ui_only_key(key) => warn!(key, value, "ignoring interface-only setting"),
            _ => return Err(OptionError::UnknownOption(key.to_owned())),
        }
        Ok(())
    }

    pub fn is_bot(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_is_bot,
            Color::Black => self.black_is_bot,
        }
    }

    fn seed(&self) -> RandomSeed {
        if self.no_random {
            RandomSeed::Fixed(RandomSeed::DETERMINISTIC)
        } else {
            RandomSeed::WallClock
        }
    }

    pub fn engine_options(&self, color: Color) -> EngineOptions {
        EngineOptions {
            depth: match color {
                Color::White => self.white_bot_level,
                Color::Black => self.black_bot_level,
            },
            scoring: self.scoring,
            pruning: self.pruning,
            seed: self.seed(),
        }
    }

    pub fn build_engine(&self, color: Color) -> Box<dyn Engine> {
        if self.is_bot(color) {
            Box::new(MinimaxEngine::new(self.engine_options(color)))
        } else {
            Box::new(RandomEngine::with_seed(self.seed()))
        }
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            max_turns: self.max_turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameSettings;
    use crate::engines::engine_options::{OptionError, RandomSeed};
    use crate::game_state::draughts_types::Color;
    use crate::search::board_scoring::ScoringMode;

    #[test]
    fn pairs_override_defaults() {
        let settings = GameSettings::from_pairs([
            ("Bot.IsBlackBot", "false"),
            ("Bot.WhiteBotLevel", "5"),
            ("Bot.BotScoringType", "NumberAndPotential"),
            ("Bot.Optimization", "O0"),
            ("Bot.NoRandom", "true"),
            ("Game.MaxNumTurns", "64"),
        ])
        .expect("settings should parse");

        assert!(settings.is_bot(Color::White));
        assert!(!settings.is_bot(Color::Black));
        assert_eq!(settings.match_config().max_turns, 64);

        let white = settings.engine_options(Color::White);
        assert_eq!(white.depth, 5);
        assert_eq!(white.scoring, ScoringMode::NumberAndPotential);
        assert!(!white.pruning);
        assert_eq!(white.seed, RandomSeed::Fixed(0));
        assert_eq!(settings.engine_options(Color::Black).depth, 3);
    }

    #[test]
    fn args_are_split_on_equals() {
        let settings = GameSettings::from_args(["Bot.BlackBotLevel=2", "Game.MaxNumTurns = 10"])
            .expect("args should parse");
        assert_eq!(settings.black_bot_level, 2);
        assert_eq!(settings.max_turns, 10);

        assert_eq!(
            GameSettings::from_args(["Bot.NoRandom"]),
            Err(OptionError::MalformedPair("Bot.NoRandom".to_owned()))
        );
    }

    #[test]
    fn interface_only_keys_are_skipped() {
        let settings = GameSettings::from_pairs([
            ("WindowSize.Width", "0"),
            ("WindowSize.Hight", "0"),
            ("Bot.IsWhiteBot", "false"),
            ("Bot.IsBlackBot", "true"),
            ("Bot.WhiteBotLevel", "4"),
            ("Bot.BlackBotLevel", "5"),
            ("Bot.BotScoringType", "NumberAndPotential"),
            ("Bot.BotDelayMS", "0"),
            ("Bot.NoRandom", "false"),
            ("Bot.Optimization", "O1"),
        ])
        .expect("interactive settings should be accepted");

        assert!(!settings.is_bot(Color::White));
        assert_eq!(settings.engine_options(Color::Black).depth, 5);
        assert_eq!(settings.scoring, ScoringMode::NumberAndPotential);
        assert!(settings.pruning);
    }

    #[test]
    fn bad_settings_are_rejected() {
        assert_eq!(
            GameSettings::from_pairs([("Bot.BotDelay", "100")]),
            Err(OptionError::UnknownOption("Bot.BotDelay".to_owned()))
        );
        assert_eq!(
            GameSettings::from_pairs([("Game.WindowSize", "100")]),
            Err(OptionError::UnknownOption("Game.WindowSize".to_owned()))
        );
        assert_eq!(
            GameSettings::from_pairs([("Bot.WhiteBotLevel", "0")]),
            Err(OptionError::DepthOutOfRange(0))
        );
        assert!(GameSettings::from_pairs([("Game.MaxNumTurns", "-3")]).is_err());
    }

    #[test]
    fn engines_follow_bot_flags() {
        let settings = GameSettings::from_pairs([("Bot.IsWhiteBot", "false")])
            .expect("settings should parse");
        assert_eq!(settings.build_engine(Color::White).name(), "PlumDraughts Random");
        assert_eq!(settings.build_engine(Color::Black).name(), "PlumDraughts Minimax");
    }
}
