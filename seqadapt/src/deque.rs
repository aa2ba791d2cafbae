use alloc::boxed::Box;
use core::fmt;
use core::mem;

use crate::error::Result;
use crate::sequence::Sequence;
use crate::table::{same_table, SequenceTable, GROW_ARRAY};

/// Double-ended sequence over any backend.
///
/// The deque owns one backend instance built through its table and forwards
/// every call to it. It never looks at which backend it is running on.
pub struct Deque<'t, T> {
    table: &'t dyn SequenceTable<T>,
    backend: Box<dyn Sequence<T> + 't>,
}

impl<'t, T: 't> Deque<'t, T> {
    /// Creates an empty deque on the growable array backend.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend cannot reserve its initial storage.
    pub fn new() -> Result<Self> {
        Self::with_table(&GROW_ARRAY)
    }

    /// Creates an empty deque on the backend of `table`.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend cannot reserve its initial storage.
    pub fn with_table(table: &'t dyn SequenceTable<T>) -> Result<Self> {
        let backend = table.construct()?;
        Ok(Self { table, backend })
    }

    /// Creates a deque on the growable array backend holding `values` in order.
    ///
    /// # Errors
    ///
    /// Returns the first push failure.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_in(&GROW_ARRAY, values)
    }

    /// Creates a deque on the backend of `table` holding `values` in order.
    ///
    /// # Errors
    ///
    /// Returns the first push failure.
    pub fn from_values_in<I>(table: &'t dyn SequenceTable<T>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let backend = table.construct_with(&mut values)?;
        Ok(Self { table, backend })
    }
}

impl<'t, T> Deque<'t, T> {
    #[must_use]
    pub fn table(&self) -> &'t dyn SequenceTable<T> {
        self.table
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.table.name()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn front(&self) -> &T {
        self.backend.front().expect("front() called on empty deque")
    }

    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn back(&self) -> &T {
        self.backend.back().expect("back() called on empty deque")
    }

    #[must_use]
    pub fn try_front(&self) -> Option<&T> {
        self.backend.front()
    }

    #[must_use]
    pub fn try_back(&self) -> Option<&T> {
        self.backend.back()
    }

    /// # Errors
    ///
    /// Returns `BadAlloc` or `Overflow` if the backend cannot make room.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.backend.push_back(value)
    }

    /// # Errors
    ///
    /// Returns `BadAlloc` or `Overflow` if the backend cannot make room.
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.backend.push_front(value)
    }

    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_back(&mut self) -> T {
        self.backend.pop_back().expect("Cannot pop from empty deque")
    }

    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_front(&mut self) -> T {
        self.backend.pop_front().expect("Cannot pop from empty deque")
    }

    pub fn try_pop_back(&mut self) -> Option<T> {
        self.backend.pop_back()
    }

    pub fn try_pop_front(&mut self) -> Option<T> {
        self.backend.pop_front()
    }

    /// # Errors
    ///
    /// Returns `OutOfRange` if `index > len()`, or `BadAlloc`/`Overflow` if
    /// the backend cannot make room.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.backend.insert(index, value)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        self.backend.erase(index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.backend.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.backend.get_mut(index)
    }

    /// Overwrites the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.backend.set(index, value)
    }

    pub fn clear(&mut self) {
        self.backend.clear();
    }

    /// Exchanges the contents of two deques built from the same table.
    ///
    /// # Panics
    ///
    /// Panics if the deques run on different backends.
    pub fn swap(&mut self, other: &mut Self) {
        assert!(
            self.table.name() == other.table.name(),
            "Cannot swap a {} deque with a {} deque",
            self.table.name(),
            other.table.name()
        );
        assert!(
            same_table(self.table, other.table),
            "Cannot swap deques built by different {} tables: {} and {}",
            self.table.name(),
            self.table.table_type(),
            other.table.table_type()
        );
        mem::swap(&mut self.backend, &mut other.backend);
    }
}

impl<T> fmt::Debug for Deque<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("backend", &self.table.name())
            .field("len", &self.len())
            .finish()
    }
}
