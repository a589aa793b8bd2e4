use anyhow::{Context, Result};
use gilded_core::QualityBounds;
use gilded_core::rules::{DEFAULT_MAX_QUALITY, DEFAULT_MIN_QUALITY};

pub const MIN_QUALITY_VAR: &str = "GILDED_MIN_QUALITY";
pub const MAX_QUALITY_VAR: &str = "GILDED_MAX_QUALITY";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub bounds: QualityBounds,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let min = read_quality(&lookup, MIN_QUALITY_VAR, DEFAULT_MIN_QUALITY)?;
        let max = read_quality(&lookup, MAX_QUALITY_VAR, DEFAULT_MAX_QUALITY)?;
        let bounds = QualityBounds::new(min, max)
            .with_context(|| format!("{MIN_QUALITY_VAR} and {MAX_QUALITY_VAR} form an empty range"))?;

        Ok(Self { bounds })
    }
}

fn read_quality<F>(lookup: &F, key: &str, default: i32) -> Result<i32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be an integer, got {raw:?}")),
        None => Ok(default),
    }
}
