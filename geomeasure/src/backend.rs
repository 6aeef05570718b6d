//! Scoped computational resources used during measurement.
//!
//! Segment-pair searches need a buffer of segment envelopes for every call. A [`MeasureBackend`] hands such
//! buffers out and takes them back, so that concurrent calls never share mutable scratch state while allocations
//! are still reused between calls.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

use geomeasure_types::Envelope;
use parking_lot::Mutex;

use crate::error::BackendError;

/// Default number of buffers kept by [`ScratchBackend`] for reuse.
pub const DEFAULT_POOL_CAPACITY: usize = 16;

/// Resource provider of a [`MeasurementOperator`](crate::MeasurementOperator).
pub trait MeasureBackend: Send + Sync {
    /// Name of the backend used in log and error messages.
    fn name(&self) -> &str;

    /// Takes an empty envelope buffer for exclusive use by one call.
    fn take_buffer(&self) -> Vec<Envelope>;

    /// Gives back a buffer obtained with [`MeasureBackend::take_buffer`].
    fn return_buffer(&self, buffer: Vec<Envelope>);

    /// Returns true if [`MeasureBackend::release`] has been called.
    fn is_released(&self) -> bool;

    /// Frees the resources held by the backend. Calling it more than once has no further effect.
    fn release(&self) -> Result<(), BackendError>;
}

/// Envelope buffer checked out of a backend. The buffer is given back when the guard is dropped.
pub struct ScratchBuffer<'a> {
    backend: &'a dyn MeasureBackend,
    buffer: Vec<Envelope>,
}

impl<'a> ScratchBuffer<'a> {
    /// Takes a buffer from the backend.
    pub fn new(backend: &'a dyn MeasureBackend) -> Self {
        Self {
            buffer: backend.take_buffer(),
            backend,
        }
    }
}

impl Deref for ScratchBuffer<'_> {
    type Target = Vec<Envelope>;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl DerefMut for ScratchBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl Drop for ScratchBuffer<'_> {
    fn drop(&mut self) {
        self.backend.return_buffer(std::mem::take(&mut self.buffer));
    }
}

/// Backend keeping a bounded pool of envelope buffers.
///
/// Buffers are popped from the pool under a lock, so two calls never hold the same buffer. After release the pool
/// is emptied and returned buffers are dropped instead of being pooled.
#[derive(Debug)]
pub struct ScratchBackend {
    pool: Mutex<Vec<Vec<Envelope>>>,
    capacity: usize,
    released: AtomicBool,
}

impl ScratchBackend {
    /// Creates a backend pooling at most `capacity` buffers.
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
            released: AtomicBool::new(false),
        }
    }

    /// Maximum number of pooled buffers.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffers currently waiting in the pool.
    pub fn pooled(&self) -> usize {
        self.pool.lock().len()
    }
}

impl Default for ScratchBackend {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

impl MeasureBackend for ScratchBackend {
    fn name(&self) -> &str {
        "scratch"
    }

    fn take_buffer(&self) -> Vec<Envelope> {
        self.pool.lock().pop().unwrap_or_default()
    }

    fn return_buffer(&self, mut buffer: Vec<Envelope>) {
        if self.is_released() {
            return;
        }

        buffer.clear();
        let mut pool = self.pool.lock();
        if pool.len() < self.capacity {
            pool.push(buffer);
        }
    }

    fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    fn release(&self) -> Result<(), BackendError> {
        if self.released.swap(true, Ordering::AcqRel) {
            log::warn!("Backend '{}' is already released", self.name());
            return Ok(());
        }

        let mut pool = self.pool.lock();
        let count = pool.len();
        *pool = Vec::new();
        log::debug!("Backend '{}' released {count} pooled buffers", self.name());

        Ok(())
    }
}
