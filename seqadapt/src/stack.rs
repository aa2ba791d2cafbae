use core::fmt;

use crate::deque::Deque;
use crate::error::Result;
use crate::table::SequenceTable;

/// LIFO façade: pushes and pops at the back of its backend.
pub struct Stack<'t, T> {
    inner: Deque<'t, T>,
}

impl<'t, T: 't> Stack<'t, T> {
    /// Creates an empty stack on the growable array backend.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend cannot reserve its initial storage.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: Deque::new()?,
        })
    }

    /// Creates an empty stack on the backend of `table`.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend cannot reserve its initial storage.
    pub fn with_table(table: &'t dyn SequenceTable<T>) -> Result<Self> {
        Ok(Self {
            inner: Deque::with_table(table)?,
        })
    }

    /// Creates a stack on the growable array backend by pushing `values` in order.
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

    /// Creates a stack by pushing `values` in order; the last one ends on top.
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

impl<'t, T> Stack<'t, T> {
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

    /// Pushes an element onto the stack.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` or `Overflow` if the backend cannot make room.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.inner.push_back(value)
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[allow(clippy::expect_used)]
    pub fn pop(&mut self) -> T {
        self.try_pop().expect("Cannot pop from empty stack")
    }

    pub fn try_pop(&mut self) -> Option<T> {
        self.inner.try_pop_back()
    }

    /// Returns the top element without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn top(&self) -> &T {
        self.try_top().expect("top() called on empty stack")
    }

    #[must_use]
    pub fn try_top(&self) -> Option<&T> {
        self.inner.try_back()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// # Panics
    ///
    /// Panics if the stacks run on different backends.
    pub fn swap(&mut self, other: &mut Self) {
        self.inner.swap(&mut other.inner);
    }
}

impl<T> fmt::Debug for Stack<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("backend", &self.backend_name())
            .field("len", &self.len())
            .finish()
    }
}
