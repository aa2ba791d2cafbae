//! The capability interface every sequence backend implements.

use core::mem;

use growarray::GrowArrayError;

use crate::error::Result;

/// Operations an adapter needs from its backend.
///
/// The trait is object safe: adapters hold a `Box<dyn Sequence<T>>` and never
/// know which concrete container is behind it. Index arguments are checked
/// here; the adapters decide whether a violation panics or is reported.
pub trait Sequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn front(&self) -> Option<&T>;

    fn back(&self) -> Option<&T>;

    /// # Errors
    ///
    /// Returns `Error::Array` with `BadAlloc` or `Overflow` if the backend
    /// cannot make room. The sequence is unchanged in that case.
    fn push_back(&mut self, value: T) -> Result<()>;

    fn pop_back(&mut self) -> Option<T>;

    /// # Errors
    ///
    /// Same as [`Sequence::push_back`].
    fn push_front(&mut self, value: T) -> Result<()>;

    fn pop_front(&mut self) -> Option<T>;

    /// Inserts `value` before position `index`; `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index > len()`, otherwise the same as
    /// [`Sequence::push_back`].
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    fn erase(&mut self, index: usize) -> Result<T>;

    fn clear(&mut self);

    fn get(&self, index: usize) -> Option<&T>;

    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Overwrites the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let length = self.len();
        let slot = self
            .get_mut(index)
            .ok_or(GrowArrayError::OutOfRange { index, length })?;
        Ok(mem::replace(slot, value))
    }
}

pub(crate) fn insert_out_of_range(index: usize, length: usize) -> Result<()> {
    if index > length {
        return Err(GrowArrayError::OutOfRange { index, length }.into());
    }
    Ok(())
}

pub(crate) fn erase_out_of_range(index: usize, length: usize) -> Result<()> {
    if index >= length {
        return Err(GrowArrayError::OutOfRange { index, length }.into());
    }
    Ok(())
}
