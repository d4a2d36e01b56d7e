use serde::{Deserialize, Serialize};

/// Session configuration. Each option gates exactly the behavior its name
/// states; both thresholds are compared against `urgency_level`, never
/// against the derived risk label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Master switch: a disabled session accepts chunks but analyzes nothing.
    pub enabled: bool,
    /// Drain tick interval, and the nominal size of one transcript chunk.
    pub chunk_size_ms: u64,
    /// Overlap the upstream capture applies between consecutive chunks.
    /// Carried for the capture collaborator; unused by analysis itself.
    pub overlap_ms: u64,
    /// Minimum urgency (1-5) for an alert to be raised.
    pub alert_threshold: u8,
    /// Urgency (1-5) at which the session deactivates itself.
    pub auto_stop_threshold: u8,
    pub enable_audio_alerts: bool,
    pub enable_visual_alerts: bool,
    pub enable_vibration: bool,
    /// Log every verdict at info level, not only alerting ones.
    pub log_all_analyses: bool,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chunk_size_ms: 5_000,
            overlap_ms: 1_000,
            alert_threshold: 3,
            auto_stop_threshold: 5,
            enable_audio_alerts: true,
            enable_visual_alerts: true,
            enable_vibration: false,
            log_all_analyses: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_match_alert_floor() {
        let config = SafetyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.alert_threshold, 3);
        assert_eq!(config.auto_stop_threshold, 5);
        assert!(!config.enable_vibration);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SafetyConfig {
            alert_threshold: 4,
            log_all_analyses: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SafetyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.alert_threshold, 4);
        assert!(back.log_all_analyses);
    }
}
