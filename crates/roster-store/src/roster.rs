//! Single-writer reactive roster with broadcast change events.

use roster_core::Employee;
use roster_generator::{EmployeeGenerator, GeneratorError};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Batch size used when the caller does not specify one.
pub const DEFAULT_BATCH_SIZE: usize = 200;

/// Capacity of the change-event channel.
///
/// Regenerations are user-triggered and rare; a lagging subscriber loses old
/// events, not data - it can always take a fresh snapshot.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Error type for roster operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Batch generation failed
    #[error("Generation failed: {0}")]
    Generator(#[from] GeneratorError),
}

/// Change event broadcast to roster subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterEvent {
    /// The whole batch was replaced by a freshly generated one
    BatchReplaced {
        /// Size of the new batch
        size: usize,
    },
}

impl std::fmt::Display for RosterEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterEvent::BatchReplaced { size } => write!(f, "BATCH_REPLACED({size})"),
        }
    }
}

/// Single-writer reactive container for one batch of employee records.
///
/// The roster owns its generator; only the roster's own operations mutate
/// the batch. Readers hold [`RosterReader`] handles or raw snapshots, which
/// never block the writer beyond the instant of the pointer swap.
pub struct EmployeeRoster {
    generator: EmployeeGenerator,
    batch: Arc<RwLock<Arc<Vec<Employee>>>>,
    events: broadcast::Sender<RosterEvent>,
}

impl EmployeeRoster {
    /// Generate the initial batch and establish the reactive state.
    ///
    /// Records carry ids `1..=count`. A zero count is rejected and no state
    /// is created.
    pub fn initialize(mut generator: EmployeeGenerator, count: usize) -> Result<Self, RosterError> {
        let batch = generator.batch(count)?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            generator,
            batch: Arc::new(RwLock::new(Arc::new(batch))),
            events,
        })
    }

    /// Initialize with [`DEFAULT_BATCH_SIZE`] records.
    pub fn with_default_size(generator: EmployeeGenerator) -> Result<Self, RosterError> {
        Self::initialize(generator, DEFAULT_BATCH_SIZE)
    }

    /// Replace the whole batch with a freshly generated one.
    ///
    /// With `new_count` the batch is resized; without it the current size is
    /// kept. The replacement is constructed in full before it is swapped in,
    /// and on error the current batch is left untouched.
    pub fn regenerate(&mut self, new_count: Option<usize>) -> Result<(), RosterError> {
        let total = new_count.unwrap_or_else(|| self.len());
        let fresh = Arc::new(self.generator.batch(total)?);

        {
            let mut slot = self.batch.write().expect("roster lock poisoned");
            *slot = fresh;
        }

        // Fire-and-forget: no subscribers just means no one is listening
        let _ = self.events.send(RosterEvent::BatchReplaced { size: total });
        Ok(())
    }

    /// Take a snapshot of the current batch.
    ///
    /// The snapshot is an `Arc` clone; it stays valid (and unchanged) across
    /// later regenerations.
    pub fn snapshot(&self) -> Arc<Vec<Employee>> {
        Arc::clone(&self.batch.read().expect("roster lock poisoned"))
    }

    /// Number of records in the current batch.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the current batch is empty (never true for a live roster).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to roster change events.
    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events.subscribe()
    }

    /// Create a cloneable read-only handle to this roster.
    pub fn reader(&self) -> RosterReader {
        RosterReader {
            batch: Arc::clone(&self.batch),
            events: self.events.clone(),
        }
    }
}

/// Read-only handle to an [`EmployeeRoster`].
///
/// Cloneable and sendable to other tasks; cannot trigger regeneration.
#[derive(Clone)]
pub struct RosterReader {
    batch: Arc<RwLock<Arc<Vec<Employee>>>>,
    events: broadcast::Sender<RosterEvent>,
}

impl RosterReader {
    /// Take a snapshot of the current batch.
    pub fn snapshot(&self) -> Arc<Vec<Employee>> {
        Arc::clone(&self.batch.read().expect("roster lock poisoned"))
    }

    /// Number of records in the current batch.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the current batch is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to roster change events.
    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events.subscribe()
    }
}
