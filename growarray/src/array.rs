use alloc::vec::Vec;
use core::fmt;
use core::mem;

use crate::error::GrowArrayError;
use crate::iter::IntoIter;
use crate::policy::GrowthPolicy;

/// A contiguous growable array whose capacity follows a `GrowthPolicy`
///
/// `capacity()` is the policy-controlled logical capacity. The backing
/// `Vec` always has at least that much room, so pushes below the logical
/// capacity never allocate.
pub struct GrowArray<T> {
    data: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
    reallocations: usize,
}

fn max_capacity<T>() -> usize {
    match mem::size_of::<T>() {
        0 => usize::MAX,
        size => isize::MAX as usize / size,
    }
}

impl<T> GrowArray<T> {
    /// Creates an empty array with the default policy, reserving the minimum capacity.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` if the initial reservation fails.
    pub fn new() -> Result<Self, GrowArrayError> {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty array with a custom policy, reserving its minimum capacity.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` if the initial reservation fails.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, GrowArrayError> {
        let mut array = Self {
            data: Vec::new(),
            capacity: 0,
            policy,
            reallocations: 0,
        };
        array.grow_to(policy.min_capacity())?;
        Ok(array)
    }

    /// Creates an array holding `values` in order, as if pushed one by one.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failed push. The partially built array
    /// is dropped before returning.
    pub fn from_values<I>(values: I) -> Result<Self, GrowArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new()?;
        for value in values {
            array.push_back(value)?;
        }
        Ok(array)
    }

    /// Creates an array holding clones of `values`.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` or `GrowArrayError::Overflow` if
    /// the storage cannot be reserved.
    pub fn from_slice(values: &[T]) -> Result<Self, GrowArrayError>
    where
        T: Clone,
    {
        let mut array = Self::new()?;
        array.extend_from_slice(values)?;
        Ok(array)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Number of buffer reallocations performed so far, including the
    /// initial reservation.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<(), GrowArrayError> {
        if new_capacity > max_capacity::<T>() {
            return Err(GrowArrayError::Overflow {
                requested: new_capacity,
            });
        }
        if new_capacity > self.data.capacity() {
            self.data
                .try_reserve_exact(new_capacity - self.data.len())
                .map_err(|_| GrowArrayError::BadAlloc {
                    requested: new_capacity,
                })?;
        }
        self.record_reallocation(new_capacity);
        Ok(())
    }

    fn shrink_to(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.data.len());
        self.data.shrink_to(new_capacity);
        self.record_reallocation(new_capacity);
    }

    fn record_reallocation(&mut self, new_capacity: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "growarray",
            from = self.capacity,
            to = new_capacity,
            len = self.data.len(),
            "reallocate"
        );
        self.capacity = new_capacity;
        self.reallocations += 1;
    }

    fn grow(&mut self) -> Result<(), GrowArrayError> {
        let target = self
            .policy
            .grown_capacity(self.capacity)
            .ok_or(GrowArrayError::Overflow {
                requested: usize::MAX,
            })?;
        self.grow_to(target)
    }

    fn shrink_if_sparse(&mut self) {
        if !self.policy.should_shrink(self.len(), self.capacity) {
            return;
        }
        if let Some(target) = self.policy.shrunk_capacity(self.capacity, self.len()) {
            self.shrink_to(target);
        }
    }

    /// Makes room for `additional` more elements with at most one
    /// reallocation, landing on the first capacity of the growth path that fits.
    fn reserve_for(&mut self, additional: usize) -> Result<(), GrowArrayError> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(GrowArrayError::Overflow {
                requested: usize::MAX,
            })?;
        if required <= self.capacity {
            return Ok(());
        }

        let mut target = self.capacity;
        while target < required {
            target = self
                .policy
                .grown_capacity(target)
                .ok_or(GrowArrayError::Overflow {
                    requested: required,
                })?;
        }
        self.grow_to(target)
    }

    /// Grows the capacity to at least `min_capacity`. Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` or `GrowArrayError::Overflow` if the
    /// buffer cannot be reserved; the array is unchanged in that case.
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), GrowArrayError> {
        if min_capacity > self.capacity {
            self.grow_to(min_capacity)?;
        }
        Ok(())
    }

    /// Gets the element at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        assert!(
            index < self.len(),
            "Index {} out of bounds for array of length {}",
            index,
            self.len()
        );
        &self.data[index]
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len(),
            "Index {} out of bounds for array of length {}",
            index,
            self.len()
        );
        &mut self.data[index]
    }

    /// Bounds-checked access to the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, GrowArrayError> {
        let length = self.len();
        self.data
            .get(index)
            .ok_or(GrowArrayError::OutOfRange { index, length })
    }

    /// Bounds-checked mutable access to the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowArrayError> {
        let length = self.len();
        self.data
            .get_mut(index)
            .ok_or(GrowArrayError::OutOfRange { index, length })
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn front(&self) -> &T {
        self.try_front().expect("front() called on empty array")
    }

    /// # Panics
    ///
    /// Panics if the array is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn back(&self) -> &T {
        self.try_back().expect("back() called on empty array")
    }

    #[must_use]
    pub fn try_front(&self) -> Option<&T> {
        self.data.first()
    }

    #[must_use]
    pub fn try_back(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.data.first_mut()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.data.last_mut()
    }

    /// Overwrites the element at `index` and hands the previous one back.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> T {
        mem::replace(self.get_mut(index), value)
    }

    /// Appends an element, growing first if the array is full.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` or `GrowArrayError::Overflow` if the
    /// array is full and cannot grow. `value` is dropped and the array is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), GrowArrayError> {
        if self.policy.should_grow(self.len(), self.capacity) {
            self.grow()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().expect("Cannot pop from empty array")
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn try_pop_back(&mut self) -> Option<T> {
        let value = self.data.pop()?;
        self.shrink_if_sparse();
        Some(value)
    }

    /// Inserts an element at the front, shifting everything right.
    ///
    /// # Errors
    ///
    /// Same as [`GrowArray::push_back`].
    pub fn push_front(&mut self, value: T) -> Result<(), GrowArrayError> {
        self.insert(0, value)
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().expect("Cannot pop from empty array")
    }

    pub fn try_pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove(0))
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Same as [`GrowArray::push_back`].
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), GrowArrayError> {
        assert!(
            index <= self.len(),
            "Insertion index {} out of bounds for array of length {}",
            index,
            self.len()
        );
        if self.policy.should_grow(self.len(), self.capacity) {
            self.grow()?;
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left, then applies the shrink check.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len(),
            "Index {} out of bounds for array of length {}",
            index,
            self.len()
        );
        let value = self.data.remove(index);
        self.shrink_if_sparse();
        value
    }

    /// Bounds-checked [`GrowArray::remove`].
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::OutOfRange` if `index >= len()`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, GrowArrayError> {
        if index >= self.len() {
            return Err(GrowArrayError::OutOfRange {
                index,
                length: self.len(),
            });
        }
        Ok(self.remove(index))
    }

    /// Removes and drops the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Hands every element to `release` in order, then empties the array.
    /// The capacity is kept.
    pub fn clear_with<F>(&mut self, release: F)
    where
        F: FnMut(T),
    {
        self.data.drain(..).for_each(release);
    }

    /// Moves every element of `other` to the end of this array, leaving
    /// `other` empty with its capacity untouched.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` or `GrowArrayError::Overflow` if the
    /// storage cannot be reserved; both arrays are unchanged in that case.
    pub fn append(&mut self, other: &mut Self) -> Result<(), GrowArrayError> {
        self.reserve_for(other.len())?;
        self.data.append(&mut other.data);
        Ok(())
    }

    /// Appends clones of `values`, reserving once up front.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` or `GrowArrayError::Overflow` if the
    /// storage cannot be reserved; the array is unchanged in that case.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), GrowArrayError>
    where
        T: Clone,
    {
        self.reserve_for(values.len())?;
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Exchanges the whole state of two arrays. Never fails and never drops elements.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Clones the array with the same policy and capacity.
    ///
    /// # Errors
    ///
    /// Returns `GrowArrayError::BadAlloc` if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, GrowArrayError>
    where
        T: Clone,
    {
        let mut copy = Self::with_policy(self.policy)?;
        copy.reserve(self.capacity)?;
        copy.data.extend_from_slice(&self.data);
        Ok(copy)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an iterator of mutable references over the elements in order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub(crate) fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for GrowArray<T> {}

impl<T> IntoIterator for GrowArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_reservation() {
        let array: GrowArray<u32> = GrowArray::new().unwrap();

        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 4);
        assert!(array.data.capacity() >= 4);
        assert_eq!(array.reallocations(), 1);
    }

    #[test]
    fn test_backing_buffer_covers_logical_capacity() {
        let mut array = GrowArray::new().unwrap();

        for i in 0..100 {
            array.push_back(i).unwrap();
            assert!(array.data.capacity() >= array.capacity());
        }
        while array.try_pop_back().is_some() {
            assert!(array.data.capacity() >= array.capacity());
        }
    }

    #[test]
    fn test_overflow_on_unaddressable_capacity() {
        let mut array: GrowArray<u64> = GrowArray::new().unwrap();

        assert_eq!(
            array.reserve(usize::MAX),
            Err(GrowArrayError::Overflow {
                requested: usize::MAX
            })
        );
        assert_eq!(array.capacity(), 4);
        assert_eq!(array.reallocations(), 1);
    }

    #[test]
    fn test_reserve_for_lands_on_growth_path() {
        let mut array = GrowArray::new().unwrap();
        array.push_back(0u8).unwrap();

        array.reserve_for(20).unwrap();
        assert_eq!(array.capacity(), 32);
        assert_eq!(array.reallocations(), 2);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut array = GrowArray::new().unwrap();

        for _ in 0..10 {
            array.push_back(()).unwrap();
        }
        assert_eq!(array.len(), 10);
        assert_eq!(array.capacity(), 16);
    }
}
