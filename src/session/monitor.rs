use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::analysis::risk::RiskClassifier;
use crate::config::SafetyConfig;
use crate::models::alert::AlertRecord;

use super::buffer::ChunkBuffer;
use super::channels::{default_channels, NotificationChannel};
use super::dispatcher::AlertDispatcher;
use super::events::{EventBus, SafetyEvent};
use super::state::{SafetySystemState, SessionState};
use super::SafetyError;

/// One live safety session: accepts transcript chunks, classifies them in
/// arrival order, raises alerts, and deactivates itself past the auto-stop
/// threshold. Created at capture start, stopped and dropped at capture end.
pub struct SafetySession {
    config: SafetyConfig,
    classifier: RiskClassifier,
    dispatcher: AlertDispatcher,
    buffer: ChunkBuffer,
    state: SessionState,
    bus: EventBus,
    // Serializes drains: the timer tick and a batch-size push may both
    // request one, and chunks must never be analyzed out of order.
    drain_guard: Mutex<()>,
}

impl SafetySession {
    pub fn new(config: SafetyConfig) -> Self {
        Self::with_channels(config, default_channels())
    }

    /// Build a session with caller-supplied notification channels. UI layers
    /// use this to substitute real banner/audio backends for the defaults.
    pub fn with_channels(
        config: SafetyConfig,
        channels: Vec<Box<dyn NotificationChannel>>,
    ) -> Self {
        let bus = EventBus::default();
        let dispatcher =
            AlertDispatcher::new(config.clone(), "es", channels, bus.clone());
        let enabled = config.enabled;
        Self {
            config,
            classifier: RiskClassifier::default(),
            dispatcher,
            buffer: ChunkBuffer::default(),
            state: SessionState::new(enabled),
            bus,
            drain_guard: Mutex::new(()),
        }
    }

    /// Replace the default rule classifier, e.g. with one compiled from a
    /// clinic-specific rule table.
    pub fn with_classifier(mut self, classifier: RiskClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SafetyEvent> {
        self.bus.subscribe()
    }

    /// Enqueue one transcript chunk. Disabled or deactivated sessions drop
    /// chunks silently; a queue at batch size drains inline.
    pub async fn push_chunk(&self, chunk: impl Into<String>) -> Result<(), SafetyError> {
        if !self.config.enabled || !self.state.is_active()? {
            return Ok(());
        }
        let batch_ready = self.buffer.push(chunk.into())?;
        if batch_ready {
            self.drain_pending().await?;
        }
        Ok(())
    }

    /// Drain and analyze every buffered chunk. If a drain is already in
    /// flight the call returns immediately; the running drain will pick up
    /// anything pushed meanwhile on its own pass or the next tick.
    pub async fn drain_pending(&self) -> Result<(), SafetyError> {
        let Ok(_guard) = self.drain_guard.try_lock() else {
            return Ok(());
        };

        let chunks = self.buffer.drain_all()?;
        if chunks.is_empty() {
            return Ok(());
        }

        self.state.set_processing(true)?;
        for chunk in chunks {
            if !self.state.is_active()? {
                break;
            }
            if let Err(e) = self.process_chunk(&chunk) {
                // One bad chunk must not stall the session.
                tracing::error!(error = %e, "Chunk analysis failed, continuing");
                self.state.record_error(e.to_string())?;
                self.bus.publish(SafetyEvent::Error(e.to_string()));
            }
        }
        self.state.set_processing(false)?;
        Ok(())
    }

    fn process_chunk(&self, chunk: &str) -> Result<(), SafetyError> {
        let analysis = self.classifier.analyze(chunk);
        let verdict = analysis.verdict.clone();

        self.state.record_verdict(verdict.clone())?;
        self.bus.publish(SafetyEvent::RiskAnalysis(verdict.clone()));

        if self.config.log_all_analyses {
            tracing::info!(
                risk = verdict.risk_level.as_str(),
                urgency = verdict.urgency_level,
                warnings = verdict.warning_count,
                highlights = verdict.highlight_count,
                "Chunk analyzed"
            );
        }

        self.dispatcher.trigger(&analysis)?;

        if verdict.urgency_level >= self.config.auto_stop_threshold {
            tracing::warn!(
                urgency = verdict.urgency_level,
                threshold = self.config.auto_stop_threshold,
                "Auto-stop threshold reached, deactivating session"
            );
            self.state.deactivate()?;
            self.bus.publish(SafetyEvent::AutoStop {
                urgency_level: verdict.urgency_level,
            });
            self.publish_state()?;
        }
        Ok(())
    }

    /// Periodic drain loop, one tick per chunk interval. Exits when the
    /// session deactivates.
    pub async fn run_drain_loop(self: Arc<Self>) {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_millis(self.config.chunk_size_ms));
        loop {
            interval.tick().await;
            match self.state.is_active() {
                Ok(true) => {}
                _ => break,
            }
            if let Err(e) = self.drain_pending().await {
                tracing::error!(error = %e, "Drain tick failed");
            }
        }
        tracing::debug!("Drain loop stopped");
    }

    /// Deactivate the session and discard pending work and active alerts.
    pub fn stop(&self) -> Result<(), SafetyError> {
        self.state.deactivate()?;
        self.buffer.clear()?;
        self.dispatcher.clear_all()?;
        self.publish_state()?;
        tracing::info!("Safety session stopped");
        Ok(())
    }

    pub fn state_snapshot(&self) -> Result<SafetySystemState, SafetyError> {
        self.state.snapshot(self.dispatcher.active_alerts()?)
    }

    pub fn active_alerts(&self) -> Result<Vec<AlertRecord>, SafetyError> {
        self.dispatcher.active_alerts()
    }

    pub fn dismiss_alert(&self, id: Uuid) -> Result<(), SafetyError> {
        self.dispatcher.dismiss(id)?;
        self.publish_state()
    }

    fn publish_state(&self) -> Result<(), SafetyError> {
        let snapshot = self.state_snapshot()?;
        self.bus.publish(SafetyEvent::StateChange(snapshot));
        Ok(())
    }
}
