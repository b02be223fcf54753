//! Heuristic frustration detector for user prompts (English/Hungarian).
//!
//! One pure decision: `detect(prompt, prior_trigger_count)` evaluates a
//! fixed table of trigger groups and maps the matches to a severity.
//! Strong groups (corrections, expletives, giving up) classify as high on
//! a single hit; medium groups (repetition, temporal, escalation,
//! intensifiers) combine with each other or with session history.
//!
//! The session counter belongs to the caller — typically a prompt-submission
//! hook that persists a memory record when severity reaches moderate.

pub mod config;
pub mod detector;
pub mod patterns;
pub mod session;
pub mod types;

pub use config::DetectorCfg;
pub use detector::{Detector, detect};
pub use patterns::{Pattern, PatternError, TriggerGroupSpec};
pub use session::SessionTracker;
pub use types::{DetectionResult, Severity, TriggerClass};
