use uuid::Uuid;

use crate::SequenceNumber;

/// The internal state for an Aggregate.
/// It contains:
/// - an id uniquely representing the aggregate,
/// - an incremental sequence number, counting the events applied so far,
/// - a state defined by the user of this library.
#[derive(Debug, Clone)]
pub struct AggregateState<S> {
    id: Uuid,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S: Default> Default for AggregateState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Default> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with a new unique id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a new instance of an [`AggregateState`] with the given aggregate id.
    pub fn with_id(id: impl Into<Uuid>) -> Self {
        Self::with_state(id, S::default())
    }
}

impl<S> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with the given aggregate id and inner state.
    pub fn with_state(id: impl Into<Uuid>, inner: S) -> Self {
        Self {
            id: id.into(),
            sequence_number: 0,
            inner,
        }
    }

    /// Returns the unique identifier for the `AggregateState`.
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Returns the internal sequence number incremented by 1.
    pub fn next_sequence_number(&self) -> SequenceNumber {
        self.sequence_number + 1
    }

    /// Returns the internal sequence number.
    pub fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    /// Returns the internal state.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Replaces the inner state with the result of `f` and records that one more event has been applied.
    pub(crate) fn apply(&mut self, f: impl FnOnce(S) -> S)
    where
        S: Default,
    {
        let inner = std::mem::take(&mut self.inner);
        self.inner = f(inner);
        self.sequence_number = self.next_sequence_number();
    }
}
