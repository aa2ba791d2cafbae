use growarray::GrowArray;

use crate::error::Result;
use crate::sequence::{insert_out_of_range, Sequence};

impl<T> Sequence<T> for GrowArray<T> {
    fn len(&self) -> usize {
        GrowArray::len(self)
    }

    fn front(&self) -> Option<&T> {
        self.try_front()
    }

    fn back(&self) -> Option<&T> {
        self.try_back()
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        Ok(GrowArray::push_back(self, value)?)
    }

    fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back()
    }

    fn push_front(&mut self, value: T) -> Result<()> {
        Ok(GrowArray::push_front(self, value)?)
    }

    fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front()
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        insert_out_of_range(index, GrowArray::len(self))?;
        Ok(GrowArray::insert(self, index, value)?)
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        Ok(self.try_remove(index)?)
    }

    fn clear(&mut self) {
        GrowArray::clear(self);
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.at_mut(index).ok()
    }
}
