//! Configuration for herdbook queries and classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::util::safe_read_to_string;
use crate::error::{HerdbookError, Result};

/// Bounds and behaviour of pedigree requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PedigreeConfig {
    /// Smallest depth a caller may request
    pub min_depth: u32,
    /// Largest depth a caller may request
    pub max_depth: u32,
    /// Depth used when the caller does not specify one
    pub default_depth: u32,
    /// Resolve the paternal and maternal subtrees on separate rayon tasks
    pub parallel_subtrees: bool,
}

impl Default for PedigreeConfig {
    fn default() -> Self {
        Self {
            min_depth: 1,
            max_depth: 5,
            default_depth: 3,
            parallel_subtrees: false,
        }
    }
}

/// Settings for the consanguinity estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsanguinityConfig {
    /// Number of generations the ancestor census walks
    pub max_generation: u32,
    /// Decimal places kept in the reported percentage
    pub decimal_places: u32,
}

impl Default for ConsanguinityConfig {
    fn default() -> Self {
        Self {
            max_generation: 5,
            decimal_places: 2,
        }
    }
}

/// Age and reproduction thresholds used by the life-stage rules
///
/// Only the numbers are configurable; the order in which the rules are
/// evaluated is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeStageThresholds {
    /// Animals up to this age in days are calves
    pub calf_max_days: i64,
    /// Upper bound (inclusive) of the weaning band
    pub weaning_max_days: i64,
    /// Upper bound (inclusive) of the rearing band
    pub rearing_max_days: i64,
    /// Animals older than this are mature (bulls and open cows)
    pub mature_after_days: i64,
    /// A birth counts as recent for this many calendar months
    pub recent_birth_months: u32,
    /// Gestation length used when no expected-birth date was recorded
    pub gestation_days: u32,
}

impl Default for LifeStageThresholds {
    fn default() -> Self {
        Self {
            calf_max_days: 240,
            weaning_max_days: 365,
            rearing_max_days: 600,
            mature_after_days: 1080,
            recent_birth_months: 8,
            gestation_days: 283,
        }
    }
}

/// Top-level herdbook configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HerdbookConfig {
    /// Pedigree request settings
    pub pedigree: PedigreeConfig,
    /// Consanguinity estimate settings
    pub consanguinity: ConsanguinityConfig,
    /// Life-stage classification thresholds
    pub life_stage: LifeStageThresholds,
}

impl HerdbookConfig {
    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "herdbook configuration")?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded herdbook configuration from {}", path.display());
        Ok(config)
    }

    /// Check that the thresholds are internally consistent
    pub fn validate(&self) -> Result<()> {
        let p = &self.pedigree;
        if p.min_depth == 0 || p.min_depth > p.max_depth {
            return Err(HerdbookError::Config(format!(
                "pedigree depth range [{}, {}] is empty or starts at zero",
                p.min_depth, p.max_depth
            )));
        }
        if !(p.min_depth..=p.max_depth).contains(&p.default_depth) {
            return Err(HerdbookError::Config(format!(
                "default pedigree depth {} is outside [{}, {}]",
                p.default_depth, p.min_depth, p.max_depth
            )));
        }

        let t = &self.life_stage;
        if !(t.calf_max_days < t.weaning_max_days
            && t.weaning_max_days < t.rearing_max_days
            && t.rearing_max_days < t.mature_after_days)
        {
            return Err(HerdbookError::Config(
                "life-stage age bounds must be strictly increasing".to_string(),
            ));
        }
        if t.recent_birth_months == 0 {
            return Err(HerdbookError::Config(
                "recent_birth_months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for HerdbookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Herdbook Configuration:")?;
        writeln!(
            f,
            "  Pedigree Depth: {} (allowed {}..={})",
            self.pedigree.default_depth, self.pedigree.min_depth, self.pedigree.max_depth
        )?;
        writeln!(f, "  Parallel Subtrees: {}", self.pedigree.parallel_subtrees)?;
        writeln!(
            f,
            "  Consanguinity Generations: {}",
            self.consanguinity.max_generation
        )?;
        let t = &self.life_stage;
        writeln!(
            f,
            "  Age Bands (days): calf <= {}, weaning <= {}, rearing <= {}, mature > {}",
            t.calf_max_days, t.weaning_max_days, t.rearing_max_days, t.mature_after_days
        )?;
        writeln!(f, "  Recent Birth Window: {} months", t.recent_birth_months)?;
        writeln!(f, "  Gestation: {} days", t.gestation_days)?;
        Ok(())
    }
}
