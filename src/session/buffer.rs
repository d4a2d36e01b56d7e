use std::collections::VecDeque;
use std::sync::Mutex;

use super::SafetyError;

/// Queue length at which a drain is requested immediately instead of
/// waiting for the next timer tick.
pub const DRAIN_BATCH_SIZE: usize = 3;

const DEFAULT_CAPACITY: usize = 64;

/// Bounded FIFO of transcript chunks awaiting analysis. Plain FIFO by
/// design: alert ordering must match chunk arrival order. When full, the
/// oldest chunk is dropped and the drop is logged.
#[derive(Debug)]
pub struct ChunkBuffer {
    queue: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl ChunkBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Enqueue one chunk. Returns true when the queue has reached the batch
    /// size and the caller should drain now rather than wait for the tick.
    pub fn push(&self, chunk: String) -> Result<bool, SafetyError> {
        let mut queue = self.queue.lock().map_err(|_| SafetyError::LockFailed)?;
        if queue.len() >= self.capacity {
            queue.pop_front();
            tracing::warn!(capacity = self.capacity, "Chunk buffer full, dropped oldest chunk");
        }
        queue.push_back(chunk);
        Ok(queue.len() >= DRAIN_BATCH_SIZE)
    }

    /// Take every pending chunk, preserving arrival order.
    pub fn drain_all(&self) -> Result<Vec<String>, SafetyError> {
        let mut queue = self.queue.lock().map_err(|_| SafetyError::LockFailed)?;
        Ok(queue.drain(..).collect())
    }

    pub fn len(&self) -> Result<usize, SafetyError> {
        Ok(self.queue.lock().map_err(|_| SafetyError::LockFailed)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SafetyError> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> Result<(), SafetyError> {
        self.queue.lock().map_err(|_| SafetyError::LockFailed)?.clear();
        Ok(())
    }
}

impl Default for ChunkBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_signals_drain_at_batch_size() {
        let buffer = ChunkBuffer::default();
        assert!(!buffer.push("uno".into()).unwrap());
        assert!(!buffer.push("dos".into()).unwrap());
        assert!(buffer.push("tres".into()).unwrap());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let buffer = ChunkBuffer::default();
        buffer.push("uno".into()).unwrap();
        buffer.push("dos".into()).unwrap();
        let drained = buffer.drain_all().unwrap();
        assert_eq!(drained, vec!["uno".to_string(), "dos".to_string()]);
        assert!(buffer.is_empty().unwrap());
    }

    #[test]
    fn full_buffer_drops_oldest() {
        let buffer = ChunkBuffer::new(2);
        buffer.push("uno".into()).unwrap();
        buffer.push("dos".into()).unwrap();
        buffer.push("tres".into()).unwrap();
        let drained = buffer.drain_all().unwrap();
        assert_eq!(drained, vec!["dos".to_string(), "tres".to_string()]);
    }

    #[test]
    fn clear_empties_queue() {
        let buffer = ChunkBuffer::default();
        buffer.push("uno".into()).unwrap();
        buffer.clear().unwrap();
        assert!(buffer.is_empty().unwrap());
    }
}
