use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::models::alert::AlertRecord;
use crate::models::verdict::RiskVerdict;

use super::SafetyError;

/// Snapshot of one session's safety state, as exposed to observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetySystemState {
    pub is_active: bool,
    pub is_processing: bool,
    pub last_verdict: Option<RiskVerdict>,
    pub active_alerts: Vec<AlertRecord>,
    pub analyses_performed: usize,
    pub errors: Vec<String>,
}

#[derive(Debug)]
struct SessionStateInner {
    is_active: bool,
    is_processing: bool,
    last_verdict: Option<RiskVerdict>,
    analyses_performed: usize,
    errors: Vec<String>,
}

/// Mutable session state behind an RwLock. Owned by the session for its
/// duration and discarded with it; the only mutators are the session's
/// processing loop and direct user actions.
#[derive(Debug)]
pub struct SessionState {
    inner: RwLock<SessionStateInner>,
}

impl SessionState {
    pub fn new(is_active: bool) -> Self {
        Self {
            inner: RwLock::new(SessionStateInner {
                is_active,
                is_processing: false,
                last_verdict: None,
                analyses_performed: 0,
                errors: Vec::new(),
            }),
        }
    }

    pub fn is_active(&self) -> Result<bool, SafetyError> {
        Ok(self.inner.read().map_err(|_| SafetyError::LockFailed)?.is_active)
    }

    pub fn set_processing(&self, processing: bool) -> Result<(), SafetyError> {
        self.inner
            .write()
            .map_err(|_| SafetyError::LockFailed)?
            .is_processing = processing;
        Ok(())
    }

    pub fn record_verdict(&self, verdict: RiskVerdict) -> Result<(), SafetyError> {
        let mut inner = self.inner.write().map_err(|_| SafetyError::LockFailed)?;
        inner.last_verdict = Some(verdict);
        inner.analyses_performed += 1;
        Ok(())
    }

    pub fn record_error(&self, message: String) -> Result<(), SafetyError> {
        self.inner
            .write()
            .map_err(|_| SafetyError::LockFailed)?
            .errors
            .push(message);
        Ok(())
    }

    pub fn deactivate(&self) -> Result<(), SafetyError> {
        self.inner
            .write()
            .map_err(|_| SafetyError::LockFailed)?
            .is_active = false;
        Ok(())
    }

    /// Snapshot with the dispatcher's current active-alert list merged in.
    pub fn snapshot(&self, active_alerts: Vec<AlertRecord>) -> Result<SafetySystemState, SafetyError> {
        let inner = self.inner.read().map_err(|_| SafetyError::LockFailed)?;
        Ok(SafetySystemState {
            is_active: inner.is_active,
            is_processing: inner.is_processing,
            last_verdict: inner.last_verdict.clone(),
            active_alerts,
            analyses_performed: inner.analyses_performed,
            errors: inner.errors.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_snapshot() {
        let state = SessionState::new(true);
        let snap = state.snapshot(vec![]).unwrap();
        assert!(snap.is_active);
        assert!(!snap.is_processing);
        assert!(snap.last_verdict.is_none());
        assert_eq!(snap.analyses_performed, 0);
        assert!(snap.errors.is_empty());
    }

    #[test]
    fn record_verdict_bumps_counter() {
        let state = SessionState::new(true);
        state.record_verdict(RiskVerdict::safe()).unwrap();
        state.record_verdict(RiskVerdict::from_counts(5, 1, 0)).unwrap();
        let snap = state.snapshot(vec![]).unwrap();
        assert_eq!(snap.analyses_performed, 2);
        assert_eq!(snap.last_verdict.unwrap().urgency_level, 5);
    }

    #[test]
    fn errors_accumulate_without_aborting() {
        let state = SessionState::new(true);
        state.record_error("chunk 1 failed".into()).unwrap();
        state.record_error("chunk 4 failed".into()).unwrap();
        let snap = state.snapshot(vec![]).unwrap();
        assert_eq!(snap.errors.len(), 2);
    }

    #[test]
    fn deactivate_flips_active_flag() {
        let state = SessionState::new(true);
        state.deactivate().unwrap();
        assert!(!state.is_active().unwrap());
    }
}
