use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;

use crate::{Error, Result};

/// Capacity used by [`IndexedPriorityQueue::new`]
const DEFAULT_CAPACITY: usize = 10;

/// A min-oriented binary heap of values ordered by an associated key, with
/// decrease-key support
///
/// Heap positions are 1-based: the children of slot `k` are `2k` and `2k + 1`
/// and every key is at most as large as the keys of its children. A map from
/// value to slot is kept in step with the layout on every swap, so a value
/// already in the queue can be re-keyed in O(log n) without searching.
///
/// The logical capacity doubles when full and halves once occupancy falls to a
/// quarter of it, never dropping below one slot.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<V, K>
where
    V: Eq + Hash + Clone + Debug,
    K: Ord + Debug,
{
    /// Heap-ordered `(value, key)` pairs; slot `k` lives at `entries[k - 1]`
    entries: Vec<(V, K)>,

    /// Logical capacity driving the grow/shrink policy
    capacity: usize,

    /// Slot currently holding each value
    index: HashMap<V, usize>,
}

impl<V, K> IndexedPriorityQueue<V, K>
where
    V: Eq + Hash + Clone + Debug,
    K: Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            entries: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            index: HashMap::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Creates a new empty priority queue with room for `capacity` values
    ///
    /// Fails with [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidArgument(
                "priority queue capacity must be at least 1".to_string(),
            ));
        }
        Ok(IndexedPriorityQueue {
            entries: Vec::with_capacity(capacity),
            capacity,
            index: HashMap::with_capacity(capacity),
        })
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of values in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the value is queued, in O(1) time
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// Returns the key currently associated with a queued value
    pub fn key_of(&self, value: &V) -> Option<&K> {
        self.index.get(value).map(|&slot| &self.entries[slot - 1].1)
    }

    /// Inserts `value` with priority `key`, or re-keys it if already queued
    ///
    /// A smaller key moves the value towards the root, a larger one towards
    /// the leaves.
    pub fn push(&mut self, value: V, key: K) {
        if let Some(&slot) = self.index.get(&value) {
            let previous = std::mem::replace(&mut self.entries[slot - 1].1, key);
            if self.entries[slot - 1].1 < previous {
                self.swim(slot);
            } else {
                self.sink(slot);
            }
            return;
        }

        if self.entries.len() == self.capacity {
            self.resize(2 * self.capacity);
        }
        self.entries.push((value.clone(), key));
        let slot = self.entries.len();
        self.index.insert(value, slot);
        self.swim(slot);
    }

    /// Returns the value with the smallest key, and that key
    ///
    /// Fails with [`Error::EmptyQueue`] if there is nothing queued.
    pub fn peek(&self) -> Result<(&V, &K)> {
        self.entries
            .first()
            .map(|(value, key)| (value, key))
            .ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the value with the smallest key, and that key
    ///
    /// Fails with [`Error::EmptyQueue`] if there is nothing queued.
    pub fn pop(&mut self) -> Result<(V, K)> {
        let last = self.entries.len();
        if last == 0 {
            return Err(Error::EmptyQueue);
        }
        self.swap(1, last);
        let Some((value, key)) = self.entries.pop() else {
            return Err(Error::EmptyQueue);
        };
        self.index.remove(&value);
        self.sink(1);

        // Lazily reduce the capacity
        if !self.entries.is_empty() && self.entries.len() == self.capacity / 4 {
            self.resize(self.capacity / 2);
        }

        Ok((value, key))
    }

    /// Removes every value, keeping the current capacity
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns true if every key is at most as large as its children's keys
    ///
    /// A queue is always heap ordered; the check exists for testing.
    pub fn is_heap_ordered(&self) -> bool {
        let ordered = (2..=self.entries.len()).all(|child| !self.greater(child / 2, child));
        let indexed = self.index.len() == self.entries.len()
            && self.index.iter().all(|(value, &slot)| {
                (1..=self.entries.len()).contains(&slot) && self.entries[slot - 1].0 == *value
            });
        ordered && indexed
    }

    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        trace!("Resizing priority queue from {} to {}", self.capacity, capacity);
        if capacity > self.entries.capacity() {
            self.entries.reserve_exact(capacity - self.entries.len());
        } else {
            self.entries.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.entries.len();
        while 2 * k <= n {
            let mut smallest = 2 * k;
            if smallest < n && self.greater(smallest, smallest + 1) {
                smallest += 1;
            }
            if !self.greater(k, smallest) {
                break;
            }
            self.swap(k, smallest);
            k = smallest;
        }
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.swap(k / 2, k);
            k /= 2;
        }
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        self.entries[i - 1].1 > self.entries[j - 1].1
    }

    /// Swaps two slots, keeping the value index in step
    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i - 1, j - 1);
        if let Some(slot) = self.index.get_mut(&self.entries[i - 1].0) {
            *slot = i;
        }
        if let Some(slot) = self.index.get_mut(&self.entries[j - 1].0) {
            *slot = j;
        }
    }
}

impl<V, K> Default for IndexedPriorityQueue<V, K>
where
    V: Eq + Hash + Clone + Debug,
    K: Ord + Debug,
{
    fn default() -> Self {
        IndexedPriorityQueue::new()
    }
}
