//! Per-stage timer table
//!
//! Plain text, read once at startup. One line per stage:
//!
//! ```text
//! # stage  normal  hard
//! 1 30 20
//! 2 35 25
//! ```
//!
//! Blank lines and `#` comments are skipped. Every playable stage must have
//! an entry; coverage is checked right after loading so a missing line is a
//! startup error rather than a mid-run surprise.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Selected difficulty. Hard hands out the old, tighter timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn toggled(self) -> Self {
        match self {
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Error type for the timer table
#[derive(Debug)]
pub enum TimesError {
    IoError(std::io::Error),
    ParseError(String),
    MissingStage(u32),
}

impl From<std::io::Error> for TimesError {
    fn from(e: std::io::Error) -> Self {
        TimesError::IoError(e)
    }
}

impl std::fmt::Display for TimesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimesError::IoError(e) => write!(f, "IO error: {}", e),
            TimesError::ParseError(e) => write!(f, "Parse error: {}", e),
            TimesError::MissingStage(s) => write!(f, "no timer entry for stage {}", s),
        }
    }
}

impl std::error::Error for TimesError {}

/// The loaded timer table
#[derive(Debug, Clone)]
pub struct StageTimes {
    entries: HashMap<u32, (f32, f32)>,
}

impl StageTimes {
    pub fn load(path: impl AsRef<Path>) -> Result<StageTimes, TimesError> {
        let text = fs::read_to_string(path)?;
        StageTimes::parse(&text)
    }

    pub fn parse(text: &str) -> Result<StageTimes, TimesError> {
        let mut entries = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(TimesError::ParseError(format!(
                    "line {}: expected '<stage> <normal> <hard>', got '{}'",
                    lineno + 1,
                    line
                )));
            }
            let stage: u32 = fields[0].parse().map_err(|_| {
                TimesError::ParseError(format!("line {}: bad stage number '{}'", lineno + 1, fields[0]))
            })?;
            let normal: f32 = fields[1].parse().map_err(|_| {
                TimesError::ParseError(format!("line {}: bad time '{}'", lineno + 1, fields[1]))
            })?;
            let hard: f32 = fields[2].parse().map_err(|_| {
                TimesError::ParseError(format!("line {}: bad time '{}'", lineno + 1, fields[2]))
            })?;
            if normal <= 0.0 || hard <= 0.0 {
                return Err(TimesError::ParseError(format!(
                    "line {}: stage times must be positive",
                    lineno + 1
                )));
            }
            if entries.insert(stage, (normal, hard)).is_some() {
                return Err(TimesError::ParseError(format!(
                    "line {}: duplicate entry for stage {}",
                    lineno + 1,
                    stage
                )));
            }
        }
        Ok(StageTimes { entries })
    }

    /// Seconds allowed for a stage at the given difficulty
    pub fn time_for(&self, stage: u32, difficulty: Difficulty) -> Option<f32> {
        self.entries.get(&stage).map(|&(normal, hard)| match difficulty {
            Difficulty::Normal => normal,
            Difficulty::Hard => hard,
        })
    }

    /// Verify every stage in the range has an entry
    pub fn check_coverage(
        &self,
        stages: impl IntoIterator<Item = u32>,
    ) -> Result<(), TimesError> {
        for stage in stages {
            if !self.entries.contains_key(&stage) {
                return Err(TimesError::MissingStage(stage));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TABLE: &str = "# stage normal hard\n1 30 20\n2 45.5 30\n\n3 60 40\n";

    #[test]
    fn test_parse_and_lookup() {
        let times = StageTimes::parse(TABLE).unwrap();
        assert_eq!(times.len(), 3);
        assert_eq!(times.time_for(1, Difficulty::Normal), Some(30.0));
        assert_eq!(times.time_for(1, Difficulty::Hard), Some(20.0));
        assert_eq!(times.time_for(2, Difficulty::Normal), Some(45.5));
        assert_eq!(times.time_for(9, Difficulty::Normal), None);
    }

    #[test]
    fn test_coverage() {
        let times = StageTimes::parse(TABLE).unwrap();
        assert!(times.check_coverage(1..=3).is_ok());
        let err = times.check_coverage(1..=4).unwrap_err();
        assert!(matches!(err, TimesError::MissingStage(4)));
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert!(StageTimes::parse("1 30").is_err());
        assert!(StageTimes::parse("one 30 20").is_err());
        assert!(StageTimes::parse("1 30 nope").is_err());
        assert!(StageTimes::parse("1 0 20").is_err());
        assert!(StageTimes::parse("1 30 20\n1 40 30").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{}", TABLE).unwrap();
        let times = StageTimes::load(f.path()).unwrap();
        assert_eq!(times.time_for(3, Difficulty::Hard), Some(40.0));
    }

    #[test]
    fn test_difficulty_toggle() {
        assert_eq!(Difficulty::Normal.toggled(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.toggled(), Difficulty::Normal);
        assert_eq!(Difficulty::Hard.label(), "Hard");
    }
}
