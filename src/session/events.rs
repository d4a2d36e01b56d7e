use tokio::sync::broadcast;

use crate::models::alert::AlertRecord;
use crate::models::verdict::RiskVerdict;

use super::state::SafetySystemState;

/// Events published by a session. Subscribers (UI layers, audit sinks) get
/// their own receiver; the session never knows who is listening.
#[derive(Debug, Clone)]
pub enum SafetyEvent {
    /// A verdict was produced for one transcript chunk.
    RiskAnalysis(RiskVerdict),
    /// An alert crossed the configured threshold and was recorded.
    SafetyAlert(AlertRecord),
    /// The session state changed (processing flag, activation, dismissals).
    StateChange(SafetySystemState),
    /// A verdict reached the auto-stop threshold and the session deactivated.
    AutoStop { urgency_level: u8 },
    /// A chunk failed to process; the session continues with the next one.
    Error(String),
}

/// Broadcast bus decoupling the session from its observers. Publishing with
/// no subscribers is not an error.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SafetyEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SafetyEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SafetyEvent) {
        // Err means no live receivers; events are fire-and-forget.
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
