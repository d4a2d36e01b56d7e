use thiserror::Error;

use crate::models::alert::AlertRecord;
use crate::models::enums::ChannelKind;

/// A channel failed to deliver. Caught at the dispatcher boundary; the
/// alert record is stored regardless.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ChannelError(pub String);

/// One delivery mechanism for a raised alert. The core ships tracing-backed
/// defaults; a UI layer substitutes its own implementations at session
/// construction.
pub trait NotificationChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;
    fn deliver(&self, alert: &AlertRecord) -> Result<(), ChannelError>;
}

/// Default visual channel: logs the banner the UI would show.
pub struct VisualBannerChannel;

impl NotificationChannel for VisualBannerChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Visual
    }

    fn deliver(&self, alert: &AlertRecord) -> Result<(), ChannelError> {
        tracing::info!(
            channel = self.kind().as_str(),
            alert_id = %alert.id,
            urgency = alert.urgency_level,
            action = alert.action_required.as_str(),
            "Visual alert banner"
        );
        Ok(())
    }
}

/// Default audio channel: logs the cue the UI would play.
pub struct AudioCueChannel;

impl NotificationChannel for AudioCueChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Audio
    }

    fn deliver(&self, alert: &AlertRecord) -> Result<(), ChannelError> {
        tracing::info!(
            channel = self.kind().as_str(),
            alert_id = %alert.id,
            urgency = alert.urgency_level,
            "Audio alert cue"
        );
        Ok(())
    }
}

/// Default vibration channel: logs the pattern the device would vibrate.
pub struct VibrationChannel;

impl NotificationChannel for VibrationChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Vibration
    }

    fn deliver(&self, alert: &AlertRecord) -> Result<(), ChannelError> {
        tracing::info!(
            channel = self.kind().as_str(),
            alert_id = %alert.id,
            urgency = alert.urgency_level,
            "Vibration alert pattern"
        );
        Ok(())
    }
}

/// The default channel set, one per kind.
pub fn default_channels() -> Vec<Box<dyn NotificationChannel>> {
    vec![
        Box::new(VisualBannerChannel),
        Box::new(AudioCueChannel),
        Box::new(VibrationChannel),
    ]
}
