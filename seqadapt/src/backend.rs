//! Concrete sequence backends.

mod grow_array;
mod linked_list;
mod ring_buffer;

pub use linked_list::ListSequence;
pub use ring_buffer::RingSequence;
