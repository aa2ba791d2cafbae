//! Capability tables: one static, read-only singleton per backend.
//!
//! A table knows how to build a fresh backend instance. Adapters keep a
//! reference to the table they were built from so that two adapters can
//! check they share a backend before exchanging their instances.

use alloc::boxed::Box;

use growarray::GrowArray;

use crate::backend::{ListSequence, RingSequence};
use crate::error::Result;
use crate::sequence::Sequence;

/// Factory for the backend instances of one concrete sequence type.
pub trait SequenceTable<T> {
    /// Name of the backend, reported in panics and `Debug` output.
    ///
    /// Names should be unique, but adapters do not rely on it: two tables
    /// match only if both their names and their [`table_type`] agree.
    ///
    /// [`table_type`]: SequenceTable::table_type
    fn name(&self) -> &'static str;

    /// Name of the concrete table type.
    fn table_type(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Builds an empty backend instance.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the backend reserves storage up front and the
    /// reservation fails.
    fn construct<'s>(&'s self) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's;

    /// Builds a backend instance holding `values` in order.
    ///
    /// # Errors
    ///
    /// Returns the first push failure; nothing partially built escapes.
    fn construct_with<'s>(
        &'s self,
        values: &mut dyn Iterator<Item = T>,
    ) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's;
}

/// True iff `first` and `second` build the same kind of backend.
#[must_use]
pub fn same_table<T>(first: &dyn SequenceTable<T>, second: &dyn SequenceTable<T>) -> bool {
    first.name() == second.name() && first.table_type() == second.table_type()
}

/// Table for [`GrowArray`], the default backend.
#[derive(Debug, Clone, Copy)]
pub struct GrowArrayTable;

/// Table for [`ListSequence`].
#[derive(Debug, Clone, Copy)]
pub struct LinkedListTable;

/// Table for [`RingSequence`].
#[derive(Debug, Clone, Copy)]
pub struct RingBufferTable;

pub static GROW_ARRAY: GrowArrayTable = GrowArrayTable;
pub static LINKED_LIST: LinkedListTable = LinkedListTable;
pub static RING_BUFFER: RingBufferTable = RingBufferTable;

impl<T> SequenceTable<T> for GrowArrayTable {
    fn name(&self) -> &'static str {
        "grow_array"
    }

    fn construct<'s>(&'s self) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's,
    {
        Ok(Box::new(GrowArray::<T>::new()?))
    }

    fn construct_with<'s>(
        &'s self,
        values: &mut dyn Iterator<Item = T>,
    ) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's,
    {
        Ok(Box::new(GrowArray::from_values(values)?))
    }
}

impl<T> SequenceTable<T> for LinkedListTable {
    fn name(&self) -> &'static str {
        "linked_list"
    }

    fn construct<'s>(&'s self) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's,
    {
        Ok(Box::new(ListSequence::<T>::new()))
    }

    fn construct_with<'s>(
        &'s self,
        values: &mut dyn Iterator<Item = T>,
    ) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's,
    {
        Ok(Box::new(ListSequence::from_iter(values)))
    }
}

impl<T> SequenceTable<T> for RingBufferTable {
    fn name(&self) -> &'static str {
        "ring_buffer"
    }

    fn construct<'s>(&'s self) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's,
    {
        Ok(Box::new(RingSequence::<T>::new()))
    }

    fn construct_with<'s>(
        &'s self,
        values: &mut dyn Iterator<Item = T>,
    ) -> Result<Box<dyn Sequence<T> + 's>>
    where
        T: 's,
    {
        let mut ring = RingSequence::<T>::new();
        for value in values {
            ring.push_back(value)?;
        }
        Ok(Box::new(ring))
    }
}
