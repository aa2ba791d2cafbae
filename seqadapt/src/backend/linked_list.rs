use alloc::collections::LinkedList;
use core::fmt;

use growarray::GrowArrayError;

use crate::error::Result;
use crate::sequence::{erase_out_of_range, insert_out_of_range, Sequence};

/// Doubly linked list backend.
///
/// Node allocation failure aborts, so pushes never report `BadAlloc`.
pub struct ListSequence<T> {
    list: LinkedList<T>,
}

impl<T> ListSequence<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> Default for ListSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ListSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            list: values.into_iter().collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.list.iter()).finish()
    }
}

impl<T> Sequence<T> for ListSequence<T> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn front(&self) -> Option<&T> {
        self.list.front()
    }

    fn back(&self) -> Option<&T> {
        self.list.back()
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        self.list.push_back(value);
        Ok(())
    }

    fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    fn push_front(&mut self, value: T) -> Result<()> {
        self.list.push_front(value);
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        insert_out_of_range(index, self.list.len())?;
        let mut tail = self.list.split_off(index);
        self.list.push_back(value);
        self.list.append(&mut tail);
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        erase_out_of_range(index, self.list.len())?;
        let length = self.list.len();
        let mut tail = self.list.split_off(index);
        let value = tail.pop_front();
        self.list.append(&mut tail);
        Ok(value.ok_or(GrowArrayError::OutOfRange { index, length })?)
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.list.iter().nth(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.list.iter_mut().nth(index)
    }
}
