//! Session-scoped alerting: the dispatcher, the buffered chunk drain loop,
//! and the per-session safety state. One `SafetySession` is created at
//! capture start and discarded at capture stop; nothing here is global.

pub mod buffer;
pub mod channels;
pub mod dispatcher;
pub mod events;
pub mod messages;
pub mod monitor;
pub mod state;

use thiserror::Error;

use crate::rules::RuleError;

pub use buffer::{ChunkBuffer, DRAIN_BATCH_SIZE};
pub use channels::{AudioCueChannel, ChannelError, NotificationChannel, VibrationChannel, VisualBannerChannel};
pub use dispatcher::AlertDispatcher;
pub use events::{EventBus, SafetyEvent};
pub use monitor::SafetySession;
pub use state::SafetySystemState;

/// Session-level errors. Channel failures are deliberately absent: they are
/// caught at the channel boundary and never propagate past the dispatcher.
#[derive(Error, Debug)]
pub enum SafetyError {
    #[error("Internal lock failed")]
    LockFailed,

    #[error(transparent)]
    Rule(#[from] RuleError),
}
