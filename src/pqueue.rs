//! A max-heap priority queue over `(priority, payload)` entries.
//!
//! Storage is a single `Vec` read as a complete binary tree with 0-indexed
//! layout: parent = (i-1)/2, children = 2i+1, 2i+2. The only ordering key
//! is the integer priority; payloads never take part in comparisons.
//!
//! Entries with equal priority come out in no particular order. When
//! sift-down meets two children of equal priority it descends into the
//! left one.

use crate::{QueueError, QueueResult};

/// An entry in the priority queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub priority: i32,
    pub payload: String,
}

impl Entry {
    pub fn new(priority: i32, payload: impl Into<String>) -> Self {
        Entry {
            priority,
            payload: payload.into(),
        }
    }
}

impl From<(i32, String)> for Entry {
    fn from((priority, payload): (i32, String)) -> Self {
        Entry { priority, payload }
    }
}

impl From<Entry> for (i32, String) {
    fn from(entry: Entry) -> Self {
        (entry.priority, entry.payload)
    }
}

/// A max-heap priority queue that dequeues the highest-priority entry first.
///
/// Growth is unbounded apart from available memory; the queue owns every
/// entry and hands out clones (`peek`) or ownership (`dequeue`), never
/// references into its storage.
#[derive(Debug, Clone, Default)]
pub struct BoundedHeap {
    nodes: Vec<Entry>,
}

impl BoundedHeap {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        BoundedHeap { nodes: Vec::new() }
    }

    /// Create an empty queue with room for `capacity` entries before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedHeap {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the queue.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `payload` with the given priority.
    pub fn enqueue(&mut self, priority: i32, payload: impl Into<String>) {
        self.nodes.push(Entry::new(priority, payload));
        self.sift_up(self.nodes.len() - 1);
    }

    /// Remove and return the entry with the highest priority.
    ///
    /// Returns [`QueueError::Empty`] without touching the queue if there is
    /// nothing to remove.
    pub fn dequeue(&mut self) -> QueueResult<Entry> {
        if self.nodes.is_empty() {
            return Err(QueueError::Empty);
        }
        // Move the last entry into the root slot, then restore order below it.
        let max = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(max)
    }

    /// Return a copy of the highest-priority entry without removing it.
    pub fn peek(&self) -> QueueResult<Entry> {
        self.nodes.first().cloned().ok_or(QueueError::Empty)
    }

    /// Sift entry at `index` up while it outranks its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[parent].priority >= self.nodes[index].priority {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    /// Sift entry at `index` down until it outranks both children.
    ///
    /// Children are compared with a strict `>` and the left child is
    /// checked first, so ties between children resolve to the left.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.nodes[left].priority > self.nodes[largest].priority {
                largest = left;
            }
            if right < len && self.nodes[right].priority > self.nodes[largest].priority {
                largest = right;
            }

            if largest == index {
                break;
            }

            self.nodes.swap(index, largest);
            index = largest;
        }
    }

    /// Check the max-heap property over the whole backing vector.
    #[cfg(test)]
    pub(crate) fn is_valid_heap(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[(i - 1) / 2].priority >= self.nodes[i].priority)
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Entry] {
        &self.nodes
    }
}

impl<S: Into<String>> Extend<(i32, S)> for BoundedHeap {
    fn extend<I: IntoIterator<Item = (i32, S)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for (priority, payload) in iter {
            self.enqueue(priority, payload);
        }
    }
}

impl<S: Into<String>> FromIterator<(i32, S)> for BoundedHeap {
    fn from_iter<I: IntoIterator<Item = (i32, S)>>(iter: I) -> Self {
        let mut heap = BoundedHeap::new();
        heap.extend(iter);
        heap
    }
}
