#![no_std]

//! `GrowArray`: a growable contiguous array with an explicit capacity policy.
//!
//! `GrowArray` stores its elements in a single contiguous buffer and tracks a
//! logical capacity that only changes at well-defined points:
//!
//! - it grows (by the growth factor, rounded up) when a push or insert finds
//!   the array full;
//! - it shrinks (by the growth factor, floored at the minimum capacity) when a
//!   pop or removal leaves the array at or below the shrink threshold;
//! - `reserve()` grows it to an exact size and never shrinks it.
//!
//! With the defaults (factor 2, threshold 1/4, minimum 4) the grow and shrink
//! lines are a 4:1 band apart, so alternating push/pop at either edge never
//! reallocates back and forth.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Failure model
//!
//! Every operation that may allocate returns `Result` and leaves the array
//! untouched on failure. Index and emptiness preconditions come in two
//! flavours: the plain accessors (`get`, `front`, `pop_back`, `remove`, ...)
//! panic when violated, the checked ones (`at`, `try_front`,
//! `try_pop_back`, `try_remove`, ...) report it.
//!
//! ```
//! # use growarray::{GrowArray, GrowArrayError};
//! let mut array = GrowArray::new().unwrap();
//! assert_eq!(array.capacity(), 4);
//!
//! for value in [0, 1, 2, 4, 5] {
//!     array.push_back(value).unwrap();
//! }
//! assert_eq!(array.len(), 5);
//! assert_eq!(array.capacity(), 8);
//! assert_eq!(*array.get(3), 4);
//!
//! assert_eq!(
//!     array.at(5),
//!     Err(GrowArrayError::OutOfRange { index: 5, length: 5 })
//! );
//! ```
//!
//! # Shrinking
//!
//! ```
//! # use growarray::GrowArray;
//! let mut array = GrowArray::from_values(0..5).unwrap();
//! assert_eq!(array.capacity(), 8);
//!
//! array.pop_back();
//! array.pop_back();
//! assert_eq!(array.capacity(), 8);
//!
//! array.pop_back(); // 2 of 8 left: at the shrink line
//! assert_eq!(array.capacity(), 4);
//!
//! array.pop_back();
//! array.pop_back();
//! assert_eq!(array.capacity(), 4); // never below the minimum
//! ```
//!
//! # Custom policy
//!
//! ```
//! # use growarray::{GrowArray, GrowthPolicy};
//! let policy = GrowthPolicy::new(1.5, 0.25, 8).unwrap();
//! let mut array = GrowArray::with_policy(policy).unwrap();
//! assert_eq!(array.capacity(), 8);
//!
//! for i in 0..9 {
//!     array.push_back(i).unwrap();
//! }
//! assert_eq!(array.capacity(), 12);
//! ```
//!
//! Enable the optional `tracing` feature to get a `trace`-level event for
//! every reallocation:
//! ```toml
//! [dependencies]
//! growarray = { version = "0.1", features = ["tracing"] }
//! ```

extern crate alloc;

mod array;
mod error;
mod iter;
mod policy;

// Re-export public types and constants
pub use array::GrowArray;
pub use error::GrowArrayError;
pub use iter::IntoIter;
pub use policy::{GrowthPolicy, DEFAULT_GROWTH_FACTOR, MIN_CAPACITY, SHRINK_THRESHOLD};
