use core::fmt;

use crate::deque::Deque;
use crate::error::Result;
use crate::table::SequenceTable;

/// FIFO façade: pushes at the back and pops at the front of its backend.
///
/// On the growable array backend every pop shifts the remaining elements;
/// pick the ring buffer or linked list table for long-lived queues.
pub struct Queue<'t, T> {
    inner: Deque<'t, T>,
}

impl<'t, T: 't> Queue<'t, T> {
    /// Creates an empty queue on the growable array backend.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend cannot reserve its initial storage.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: Deque::new()?,
        })
    }

    /// Creates an empty queue on the backend of `table`.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend cannot reserve its initial storage.
    pub fn with_table(table: &'t dyn SequenceTable<T>) -> Result<Self> {
        Ok(Self {
            inner: Deque::with_table(table)?,
        })
    }

    /// Creates a queue on the growable array backend holding `values` in order.
    ///
    /// # Errors
    ///
    /// Returns the first push failure.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self {
            inner: Deque::from_values(values)?,
        })
    }

    /// Creates a queue holding `values`; the first one is popped first.
    ///
    /// # Errors
    ///
    /// Returns the first push failure.
    pub fn from_values_in<I>(table: &'t dyn SequenceTable<T>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self {
            inner: Deque::from_values_in(table, values)?,
        })
    }
}

impl<'t, T> Queue<'t, T> {
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends an element at the tail.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` or `Overflow` if the backend cannot make room.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.inner.push_back(value)
    }

    /// Removes and returns the head element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[allow(clippy::expect_used)]
    pub fn pop(&mut self) -> T {
        self.try_pop().expect("Cannot pop from empty queue")
    }

    pub fn try_pop(&mut self) -> Option<T> {
        self.inner.try_pop_front()
    }

    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn front(&self) -> &T {
        self.try_front().expect("front() called on empty queue")
    }

    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn back(&self) -> &T {
        self.try_back().expect("back() called on empty queue")
    }

    #[must_use]
    pub fn try_front(&self) -> Option<&T> {
        self.inner.try_front()
    }

    #[must_use]
    pub fn try_back(&self) -> Option<&T> {
        self.inner.try_back()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// # Panics
    ///
    /// Panics if the queues run on different backends.
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }
}

impl<T> fmt::Debug for Queue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("backend", &self.backend_name())
            .field("len", &self.len())
            .finish()
    }
}
