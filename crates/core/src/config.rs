use serde::{Deserialize, Serialize};

/// Detection thresholds. Plain data with defaults; never mutated after
/// the detector is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorCfg {
    /// Prior triggers at or above which a single medium match escalates
    /// from mild to moderate.
    pub session_boost_after: u32,
    /// Distinct medium groups required for moderate without session history.
    pub moderate_min_groups: usize,
}

impl Default for DetectorCfg {
    fn default() -> Self {
        Self {
            session_boost_after: 3,
            moderate_min_groups: 2,
        }
    }
}
