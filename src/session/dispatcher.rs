use std::sync::RwLock;

use chrono::Local;
use uuid::Uuid;

use crate::config::SafetyConfig;
use crate::models::alert::{AlertKind, AlertRecord};
use crate::models::enums::{ActionRequired, ChannelKind};
use crate::models::verdict::RiskAnalysis;

use super::channels::NotificationChannel;
use super::events::{EventBus, SafetyEvent};
use super::messages::AlertMessages;
use super::SafetyError;

/// Turns alerting verdicts into stored `AlertRecord`s and fans them out to
/// the configured notification channels. Channel failures are logged and
/// swallowed here; the record is kept either way.
pub struct AlertDispatcher {
    config: SafetyConfig,
    lang: String,
    active: RwLock<Vec<AlertRecord>>,
    channels: Vec<Box<dyn NotificationChannel>>,
    bus: EventBus,
}

impl AlertDispatcher {
    pub fn new(
        config: SafetyConfig,
        lang: impl Into<String>,
        channels: Vec<Box<dyn NotificationChannel>>,
        bus: EventBus,
    ) -> Self {
        Self {
            config,
            lang: lang.into(),
            active: RwLock::new(Vec::new()),
            channels,
            bus,
        }
    }

    /// Raise an alert for an analysis pass if it crosses the configured
    /// threshold. Returns the stored record, or None when no alert is due.
    pub fn trigger(&self, analysis: &RiskAnalysis) -> Result<Option<AlertRecord>, SafetyError> {
        let verdict = &analysis.verdict;
        if !verdict.should_alert || verdict.urgency_level < self.config.alert_threshold {
            return Ok(None);
        }

        let kind = AlertKind::from_counts(verdict.warning_count, verdict.highlight_count);
        let action = ActionRequired::from_urgency(verdict.urgency_level);
        let alert = AlertRecord {
            id: Uuid::new_v4(),
            timestamp: Local::now().naive_local(),
            urgency_level: verdict.urgency_level,
            kind,
            message: AlertMessages::message(kind, action, &self.lang),
            recommendations: AlertMessages::recommendations(action, &self.lang),
            evidence: analysis
                .findings
                .iter()
                .map(|f| f.description.clone())
                .collect(),
            action_required: action,
            is_dismissed: false,
        };

        self.active
            .write()
            .map_err(|_| SafetyError::LockFailed)?
            .push(alert.clone());

        tracing::warn!(
            alert_id = %alert.id,
            urgency = alert.urgency_level,
            kind = alert.kind.as_str(),
            action = alert.action_required.as_str(),
            "Safety alert raised"
        );

        self.deliver(&alert);
        self.bus.publish(SafetyEvent::SafetyAlert(alert.clone()));
        Ok(Some(alert))
    }

    fn channel_enabled(&self, kind: ChannelKind) -> bool {
        match kind {
            ChannelKind::Visual => self.config.enable_visual_alerts,
            ChannelKind::Audio => self.config.enable_audio_alerts,
            ChannelKind::Vibration => self.config.enable_vibration,
        }
    }

    fn deliver(&self, alert: &AlertRecord) {
        for channel in &self.channels {
            if !self.channel_enabled(channel.kind()) {
                continue;
            }
            if let Err(e) = channel.deliver(alert) {
                tracing::warn!(
                    channel = channel.kind().as_str(),
                    alert_id = %alert.id,
                    error = %e,
                    "Notification channel failed, alert kept"
                );
            }
        }
    }

    /// Flip the dismissed flag on one alert. An unknown id is a no-op: the
    /// alert may already have been cleared by session teardown.
    pub fn dismiss(&self, id: Uuid) -> Result<(), SafetyError> {
        let mut active = self.active.write().map_err(|_| SafetyError::LockFailed)?;
        match active.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.is_dismissed = true;
                tracing::info!(alert_id = %id, "Alert dismissed");
            }
            None => tracing::debug!(alert_id = %id, "Dismiss requested for unknown alert"),
        }
        Ok(())
    }

    /// Alerts raised this session and not yet dismissed.
    pub fn active_alerts(&self) -> Result<Vec<AlertRecord>, SafetyError> {
        Ok(self
            .active
            .read()
            .map_err(|_| SafetyError::LockFailed)?
            .iter()
            .filter(|a| !a.is_dismissed)
            .cloned()
            .collect())
    }

    pub fn clear_all(&self) -> Result<(), SafetyError> {
        self.active.write().map_err(|_| SafetyError::LockFailed)?.clear();
        Ok(())
    }

    /// Poison the active-alert lock so the next `trigger` fails with
    /// `LockFailed`. Lock poisoning is the only runtime failure the
    /// dispatcher can hit; tests use this to drive that path.
    #[cfg(test)]
    pub(crate) fn poison_active_lock(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.active.write().unwrap();
            panic!("poisoning active-alert lock");
        }));
    }
}
