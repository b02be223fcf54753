use crate::types::DetectionResult;

/// Caller-side counter of prior triggers in the current session.
///
/// The detector never owns session state; an upstream hook keeps one of
/// these per session and feeds `prior()` into each `detect` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionTracker {
    prior: u32,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of triggers recorded so far.
    pub fn prior(&self) -> u32 {
        self.prior
    }

    /// Record a detection result. Increments only above `none`.
    pub fn record(&mut self, result: &DetectionResult) {
        if result.is_trigger() {
            self.prior = self.prior.saturating_add(1);
        }
    }

    /// Clear the counter (new session).
    pub fn reset(&mut self) {
        self.prior = 0;
    }
}
