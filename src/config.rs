use serde::{Deserialize, Serialize};

use crate::error::{MiningError, MiningResult};

/// Miner settings. Every field has a default, so a partial TOML document such
/// as `min_support = 3` is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Minimum total weight an item set needs to be reported. `0` keeps every item.
    pub min_support: i64,
    /// Run the per-item branches on the rayon pool. Needs the `parallel` feature.
    pub parallel: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            parallel: false,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: i64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> MiningResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MiningResult<()> {
        if self.min_support < 0 {
            return Err(MiningError::NegativeMinSupport(self.min_support));
        }
        Ok(())
    }

    /// The threshold in the unit item supports are stored in.
    pub(crate) fn threshold(&self) -> f64 {
        self.min_support.max(0) as f64
    }
}
