use alloc::collections::VecDeque;
use core::fmt;
use core::mem;

use growarray::GrowArrayError;

use crate::error::Result;
use crate::sequence::{insert_out_of_range, Sequence};

/// Ring buffer backend with O(1) pushes and pops at both ends.
pub struct RingSequence<T> {
    ring: VecDeque<T>,
}

impl<T> RingSequence<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ring: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Makes room for at least `additional` more elements.
    ///
    /// The `requested` field of the error is the total number of elements
    /// the ring needed room for, not the capacity the ring asked the
    /// allocator for, which may be larger.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if `len() + additional` elements cannot be
    /// addressed, or `BadAlloc` if the allocation fails. The ring is left
    /// unchanged in both cases.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        let Some(requested) = self.ring.len().checked_add(additional) else {
            return Err(GrowArrayError::Overflow {
                requested: usize::MAX,
            }
            .into());
        };
        let limit = match mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        };
        if requested > limit {
            return Err(GrowArrayError::Overflow { requested }.into());
        }
        self.ring
            .try_reserve(additional)
            .map_err(|_| GrowArrayError::BadAlloc { requested })?;
        Ok(())
    }

    fn reserve_one(&mut self) -> Result<()> {
        self.try_reserve(1)
    }
}

impl<T> Default for RingSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ring.iter()).finish()
    }
}

impl<T> Sequence<T> for RingSequence<T> {
    fn len(&self) -> usize {
        self.ring.len()
    }

    fn front(&self) -> Option<&T> {
        self.ring.front()
    }

    fn back(&self) -> Option<&T> {
        self.ring.back()
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        self.ring.push_back(value);
        Ok(())
    }

    fn pop_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    fn push_front(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        self.ring.push_front(value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        insert_out_of_range(index, self.ring.len())?;
        self.reserve_one()?;
        self.ring.insert(index, value);
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        let length = self.ring.len();
        Ok(self
            .ring
            .remove(index)
            .ok_or(GrowArrayError::OutOfRange { index, length })?)
    }

    fn clear(&mut self) {
        self.ring.clear();
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.ring.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.ring.get_mut(index)
    }
}
