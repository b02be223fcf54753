//! Interactive driver for the frustration detector.
//!
//! Plays the role of the upstream prompt-submission hook: keeps the
//! session's trigger counter across lines and emits a JSON memory record
//! for every moderate or high classification.

use anyhow::Context;
use chrono::{DateTime, Utc};
use rustyline::error::ReadlineError;
use serde::Serialize;
use uuid::Uuid;

use tilt_core::config::DetectorCfg;
use tilt_core::detector::Detector;
use tilt_core::patterns;
use tilt_core::session::SessionTracker;
use tilt_core::types::Severity;

/// Env var naming a JSON file with additional trigger groups.
const PATTERNS_ENV: &str = "TILT_PATTERNS";

/// What the hook would persist for a moderate/high prompt.
#[derive(Debug, Serialize)]
struct MemoryRecord {
    id: Uuid,
    timestamp: DateTime<Utc>,
    severity: Severity,
    groups: Vec<String>,
    prompt: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let detector = build_detector()?;
    run_repl(&detector)
}

/// Builtin groups, extended by the file named in `TILT_PATTERNS` if set.
fn build_detector() -> anyhow::Result<Detector> {
    let mut specs = patterns::builtin_specs();
    if let Ok(path) = std::env::var(PATTERNS_ENV) {
        let extra = patterns::load_specs(&path)
            .with_context(|| format!("loading trigger groups from {path}"))?;
        tracing::info!(count = extra.len(), file = %path, "loaded extra trigger groups");
        specs.extend(extra);
    }
    Ok(Detector::with_groups(&specs, DetectorCfg::default())?)
}

fn run_repl(detector: &Detector) -> anyhow::Result<()> {
    let mut editor = rustyline::DefaultEditor::new()?;
    let mut tracker = SessionTracker::new();

    loop {
        match editor.readline("You> ") {
            Ok(line) => {
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                match text {
                    "/q" | "/exit" | "/quit" => break,
                    "/reset" => {
                        tracker.reset();
                        println!("session counter cleared");
                        continue;
                    }
                    "/prior" => {
                        println!("prior triggers: {}", tracker.prior());
                        continue;
                    }
                    _ => {}
                }

                let result = detector.detect(text, tracker.prior());
                println!(
                    "severity={} groups={:?} prior={}",
                    result.severity.as_str(),
                    result.matched_groups,
                    tracker.prior()
                );
                if result.severity >= Severity::Moderate {
                    let record = MemoryRecord {
                        id: Uuid::new_v4(),
                        timestamp: Utc::now(),
                        severity: result.severity,
                        groups: result.matched_groups.clone(),
                        prompt: text.to_owned(),
                    };
                    println!("{}", serde_json::to_string(&record)?);
                }
                tracker.record(&result);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
