use core::fmt;

use growarray::GrowArray;

use crate::error::Result;

/// Less-than predicate deciding priority: `less(a, b)` means `b` comes out first.
pub type Less<T> = fn(&T, &T) -> bool;

fn ord_less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

/// Binary max-heap stored in a `GrowArray`.
///
/// The element with the highest priority under the configured predicate is
/// always at index 0 of the backing array.
pub struct PriorityQueue<T> {
    heap: GrowArray<T>,
    less: Less<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue ordered by `Ord`; the greatest element pops first.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the initial reservation fails.
    pub fn new() -> Result<Self> {
        Self::with_less(ord_less::<T>)
    }

    /// Creates a queue ordered by `Ord` holding `values`.
    ///
    /// # Errors
    ///
    /// Returns the first push failure.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new()?;
        for value in values {
            queue.push(value)?;
        }
        Ok(queue)
    }
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by a custom predicate.
    ///
    /// # Errors
    ///
    /// Returns `BadAlloc` if the initial reservation fails.
    pub fn with_less(less: Less<T>) -> Result<Self> {
        Ok(Self {
            heap: GrowArray::new()?,
            less,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// # Errors
    ///
    /// Returns `BadAlloc` or `Overflow` if the heap cannot grow.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.heap.push_back(value)?;
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Removes and returns the highest-priority element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[allow(clippy::expect_used)]
    pub fn pop(&mut self) -> T {
        self.try_pop().expect("Cannot pop from empty priority queue")
    }

    pub fn try_pop(&mut self) -> Option<T> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.as_mut_slice().swap(0, last);
        let top = self.heap.try_pop_back()?;
        self.sift_down(0);
        Some(top)
    }

    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn top(&self) -> &T {
        self.try_top().expect("top() called on empty priority queue")
    }

    #[must_use]
    pub fn try_top(&self) -> Option<&T> {
        self.heap.try_front()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        self.heap.swap(&mut other.heap);
        core::mem::swap(&mut self.less, &mut other.less);
    }

    fn sift_up(&mut self, mut index: usize) {
        let less = self.less;
        let heap = self.heap.as_mut_slice();
        while index > 0 {
            let parent = (index - 1) / 2;
            if !less(&heap[parent], &heap[index]) {
                break;
            }
            heap.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let less = self.less;
        let heap = self.heap.as_mut_slice();
        let len = heap.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let mut largest = index;
            if less(&heap[largest], &heap[left]) {
                largest = left;
            }
            let right = left + 1;
            if right < len && less(&heap[largest], &heap[right]) {
                largest = right;
            }
            if largest == index {
                break;
            }
            heap.swap(index, largest);
            index = largest;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
