//! Min-weight-first queue of candidate trees, used while the Huffman tree is being assembled.
//!
//! Entries with equal weight come out in the order they went in. Every push gets a sequence number,
//! so a freshly merged node always loses a tie against anything already waiting in the queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    weight: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    /// Reversed so the max-heap pops the lightest, then oldest, entry first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct MergeQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
    weight_of: fn(&T) -> f64,
}

impl<T> MergeQueue<T> {
    /// Create an empty queue. `weight_of` extracts the ordering weight from each item.
    pub fn new(weight_of: fn(&T) -> f64) -> Self {
        MergeQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
            weight_of,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn push(&mut self, item: T) {
        let weight = (self.weight_of)(&item);
        self.heap.push(Entry {
            weight,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Remove the lightest item
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    /// Remove the two lightest items, lightest first. Returns None (and takes nothing) when fewer
    /// than two items are waiting.
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.heap.len() < 2 {
            return None;
        }
        let first = self.pop()?;
        let second = self.pop()?;
        Some((first, second))
    }
}
