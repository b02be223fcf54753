//! The severity decision: strong groups dominate, medium groups combine,
//! session history can raise a lone medium match.

use std::sync::LazyLock;

use crate::config::DetectorCfg;
use crate::patterns::{self, PatternError, TriggerGroup, TriggerGroupSpec};
use crate::types::{DetectionResult, Severity, TriggerClass};

/// Frustration detector over a compiled trigger-group table.
#[derive(Debug)]
pub struct Detector {
    groups: Vec<TriggerGroup>,
    cfg: DetectorCfg,
}

impl Detector {
    /// Detector over the builtin EN/HU groups with default thresholds.
    pub fn new() -> Self {
        Self::with_groups(&patterns::builtin_specs(), DetectorCfg::default())
            .expect("builtin trigger groups compile")
    }

    /// Detector over an explicit group list (e.g. builtin plus groups
    /// loaded from a pattern file).
    pub fn with_groups(
        specs: &[TriggerGroupSpec],
        cfg: DetectorCfg,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            groups: patterns::compile_all(specs)?,
            cfg,
        })
    }

    /// Classify one prompt given the caller's count of prior triggers.
    ///
    /// Pure: the result depends only on the arguments and the configured
    /// groups. The counter is supplied by the caller and never stored here.
    pub fn detect(&self, prompt: &str, prior_trigger_count: u32) -> DetectionResult {
        if prompt.trim().is_empty() {
            return DetectionResult::calm();
        }

        let folded = prompt.to_lowercase();
        let mut matched_groups = Vec::new();
        let mut strong_hit = false;
        let mut medium_hits = 0usize;

        for group in &self.groups {
            if !group.matches(&folded) {
                continue;
            }
            tracing::debug!(group = %group.name, class = ?group.class, "trigger group matched");
            match group.class {
                TriggerClass::Strong => strong_hit = true,
                TriggerClass::Medium => medium_hits += 1,
            }
            matched_groups.push(group.name.clone());
        }

        let severity = if strong_hit {
            // Strong dominates medium count and session state.
            Severity::High
        } else if medium_hits >= self.cfg.moderate_min_groups {
            Severity::Moderate
        } else if medium_hits == 1 {
            if prior_trigger_count >= self.cfg.session_boost_after {
                Severity::Moderate
            } else {
                Severity::Mild
            }
        } else {
            Severity::None
        };

        DetectionResult {
            severity,
            matched_groups,
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_DETECTOR: LazyLock<Detector> = LazyLock::new(Detector::new);

/// Classify a prompt against the builtin table. The sole entry point
/// most callers need.
pub fn detect(prompt: &str, prior_trigger_count: u32) -> DetectionResult {
    DEFAULT_DETECTOR.detect(prompt, prior_trigger_count)
}
