use std::time::Duration;

use strum_macros::Display;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

/// Pipeline phases. Strictly linear; a new file selection from
/// `ShowingResults` re-enters at `ImagePending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Phase {
    #[default]
    Idle,
    ImagePending,
    Previewing,
    Analyzing,
    ShowingResults,
}

/// Status labels shown while the Guided-mode analysis "runs".
pub const GUIDED_STEPS: [&str; 5] = [
    "Analyzing facial features...",
    "Detecting body proportions...",
    "Identifying skin tone...",
    "Processing style preferences...",
    "Generating recommendations...",
];

/// Progress reported by an analysis run over the app action channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisEvent {
    Step(String),
    Done,
}

/// A scripted, purely cosmetic delay standing in for a real inference call.
///
/// Guided mode walks the five status labels holding each for `hold`;
/// Instant mode is a single wait with no labels. The run is cancelable so a
/// new upload can abort an in-flight analysis instead of racing it, and the
/// durations are injectable so tests run against a zero-duration clock.
#[derive(Debug, Clone)]
pub struct AnalysisScript {
    steps: Vec<String>,
    hold: Duration,
}

impl AnalysisScript {
    pub fn guided(hold: Duration) -> Self {
        Self {
            steps: GUIDED_STEPS.iter().map(|s| s.to_string()).collect(),
            hold,
        }
    }

    pub fn instant(wait: Duration) -> Self {
        Self {
            steps: Vec::new(),
            hold: wait,
        }
    }

    /// Total wall-clock time a full, uncancelled run takes.
    pub fn total_duration(&self) -> Duration {
        self.hold * self.steps.len().max(1) as u32
    }

    /// Walk the script, reporting each label then `Done`. Returns early
    /// without `Done` when cancelled mid-run.
    pub async fn run(self, events: UnboundedSender<AnalysisEvent>, cancel: CancellationToken) {
        let holds = self.steps.len().max(1);

        for i in 0..holds {
            if let Some(label) = self.steps.get(i) {
                let _ = events.send(AnalysisEvent::Step(label.clone()));
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(step = i, "analysis run cancelled");
                    return;
                }
                _ = tokio::time::sleep(self.hold) => {}
            }
        }

        let _ = events.send(AnalysisEvent::Done);
    }
}
