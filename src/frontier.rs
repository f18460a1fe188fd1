use std::{cmp::Ordering, collections::BinaryHeap};

/// Min-priority queue whose priority comes from an extraction function.
///
/// Entries with equal priority leave in insertion order.
pub struct Frontier<T, P> {
    heap: BinaryHeap<Entry<T>>,
    priority: P,
    inserted: u64,
}

impl<T, P> Frontier<T, P>
where
    P: Fn(&T) -> usize,
{
    pub fn new(priority: P) -> Self {
        Self {
            heap: BinaryHeap::new(),
            priority,
            inserted: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let priority = (self.priority)(&item);
        self.heap.push(Entry {
            priority,
            sequence: self.inserted,
            item,
        });
        self.inserted += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn peek_priority(&self) -> Option<usize> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

struct Entry<T> {
    priority: usize,
    sequence: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for Entry<T> {}

// Reversed so the max-heap yields the lowest priority, then the oldest entry.
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
