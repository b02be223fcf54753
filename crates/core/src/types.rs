use serde::{Deserialize, Serialize};

/// Frustration intensity assigned to a prompt.
/// Ordered: `None < Mild < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// No trigger group matched.
    None,
    /// Exactly one medium group matched, no session boost.
    Mild,
    /// Two or more medium groups, or a session-boosted single match.
    Moderate,
    /// At least one strong group matched.
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::None,
        }
    }
}

/// Weight class of a trigger group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerClass {
    /// A single occurrence classifies the prompt as `High`.
    Strong,
    /// Elevates severity only in combination with other medium groups
    /// or with session history.
    Medium,
}

/// Outcome of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub severity: Severity,
    /// Names of every trigger group that matched, for diagnostics.
    /// Populated even when a strong group already decided the severity.
    pub matched_groups: Vec<String>,
}

impl DetectionResult {
    /// A result with no matches.
    pub fn calm() -> Self {
        Self {
            severity: Severity::None,
            matched_groups: Vec::new(),
        }
    }

    /// Whether this result counts as a trigger for session tracking.
    pub fn is_trigger(&self) -> bool {
        self.severity > Severity::None
    }
}
