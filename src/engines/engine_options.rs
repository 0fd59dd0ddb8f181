//! Engine configuration parsed from name/value option pairs.
//!
//! Recognized names: `BotLevel` (search depth, at least 1), `BotScoringType`
//! (`Number` or `NumberAndPotential`), `Optimization` (`O0` turns pruning off)
//! and `NoRandom` (fixed seed instead of the wall clock).

use chrono::Utc;

use crate::search::board_scoring::ScoringMode;
use crate::search::minimax::SearchConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },

    #[error("search depth must be at least 1, got {0}")]
    DepthOutOfRange(u64),

    #[error("unknown scoring type '{0}'")]
    UnknownScoringMode(String),

    #[error("expected key=value, got '{0}'")]
    MalformedPair(String),
}

/// Source of the seed for the search's tie-breaking generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSeed {
    #[default]
    WallClock,
    Fixed(u64),
}

impl RandomSeed {
    /// Seed used when randomness is switched off.
    pub const DETERMINISTIC: u64 = 0;

    pub fn resolve(self) -> u64 {
        match self {
            RandomSeed::WallClock => Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64,
            RandomSeed::Fixed(seed) => seed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub depth: u8,
    pub scoring: ScoringMode,
    pub pruning: bool,
    pub seed: RandomSeed,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            depth: 3,
            scoring: ScoringMode::Number,
            pruning: true,
            seed: RandomSeed::WallClock,
        }
    }
}

impl EngineOptions {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            pruning: self.pruning,
        }
    }

    /// Updates one option by name. Names are matched case-insensitively.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let value = value.trim();
        if name.eq_ignore_ascii_case("BotLevel") {
            self.depth = parse_depth(name, value)?;
        } else if name.eq_ignore_ascii_case("BotScoringType") {
            self.scoring = parse_scoring(value)?;
        } else if name.eq_ignore_ascii_case("Optimization") {
            self.pruning = parse_optimization(value);
        } else if name.eq_ignore_ascii_case("NoRandom") {
            self.seed = if parse_bool(name, value)? {
                RandomSeed::Fixed(RandomSeed::DETERMINISTIC)
            } else {
                RandomSeed::WallClock
            };
        } else {
            return Err(OptionError::UnknownOption(name.to_owned()));
        }
        Ok(())
    }
}

pub(crate) fn parse_depth(name: &str, value: &str) -> Result<u8, OptionError> {
    let depth = value
        .parse::<u64>()
        .map_err(|_| invalid_value(name, value))?;
    if depth == 0 {
        return Err(OptionError::DepthOutOfRange(depth));
    }
    u8::try_from(depth).map_err(|_| OptionError::DepthOutOfRange(depth))
}

pub(crate) fn parse_scoring(value: &str) -> Result<ScoringMode, OptionError> {
    value
        .parse::<ScoringMode>()
        .map_err(|_| OptionError::UnknownScoringMode(value.to_owned()))
}

/// `O0` disables alpha-beta cutoffs; any other level keeps them.
pub(crate) fn parse_optimization(value: &str) -> bool {
    !value.eq_ignore_ascii_case("O0")
}

pub(crate) fn parse_bool(name: &str, value: &str) -> Result<bool, OptionError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid_value(name, value)),
    }
}

pub(crate) fn invalid_value(name: &str, value: &str) -> OptionError {
    OptionError::InvalidValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineOptions, OptionError, RandomSeed};
    use crate::search::board_scoring::ScoringMode;

    #[test]
    fn options_update_search_config() {
        let mut options = EngineOptions::default();
        options.set("BotLevel", "5").expect("depth should parse");
        options.set("Optimization", "O0").expect("level should parse");
        options
            .set("botscoringtype", "NumberAndPotential")
            .expect("scoring should parse");
        options.set("NoRandom", "true").expect("flag should parse");

        let config = options.search_config();
        assert_eq!(config.max_depth, 5);
        assert!(!config.pruning);
        assert_eq!(options.scoring, ScoringMode::NumberAndPotential);
        assert_eq!(options.seed, RandomSeed::Fixed(0));

        options.set("Optimization", "O1").expect("level should parse");
        assert!(options.search_config().pruning);
    }

    #[test]
    fn zero_or_huge_depth_is_rejected() {
        let mut options = EngineOptions::default();
        assert_eq!(options.set("BotLevel", "0"), Err(OptionError::DepthOutOfRange(0)));
        assert_eq!(
            options.set("BotLevel", "300"),
            Err(OptionError::DepthOutOfRange(300))
        );
        assert!(matches!(
            options.set("BotLevel", "deep"),
            Err(OptionError::InvalidValue { .. })
        ));
        assert_eq!(options.depth, EngineOptions::default().depth);
    }

    #[test]
    fn unknown_names_and_modes_are_rejected() {
        let mut options = EngineOptions::default();
        assert_eq!(
            options.set("Hash", "64"),
            Err(OptionError::UnknownOption("Hash".to_owned()))
        );
        assert_eq!(
            options.set("BotScoringType", "Potential"),
            Err(OptionError::UnknownScoringMode("Potential".to_owned()))
        );
        assert!(options.set("NoRandom", "maybe").is_err());
    }

    #[test]
    fn fixed_seed_resolves_to_itself() {
        assert_eq!(RandomSeed::Fixed(42).resolve(), 42);
    }
}
