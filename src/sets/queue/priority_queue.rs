use std::cmp::Ordering;

use crate::sets::queue::Comparator;

/// An array-backed binary heap ordered by an injected [`Comparator`].
///
/// The item at the root is always the one with the greatest priority according to
/// the comparator. Children of the item at index `i` live at `2i + 1` and `2i + 2`.
///
/// # Invariants
/// - For every non-root index `i`, `compare(storage[(i - 1) / 2], storage[i])` is
///   not `Ordering::Less`, as long as the comparator answers consistently.
/// - Equal-priority items come out in an unspecified (but deterministic) order.
///
/// # Time Complexity
/// - `push`, `pop`: O(log n)
/// - `contains`: O(n), linear scan over storage
///
/// The comparator can be reached through [`PriorityQueue::comparator_mut`]. Changing
/// what it answers for items already stored does not re-sort them; callers that do so
/// accept that the heap order may no longer reflect the new answers.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, C> {
    storage: Vec<T>,
    compare: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Comparator<T>,
{
    /// Creates an empty queue ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        PriorityQueue {
            storage: Vec::new(),
            compare: comparator,
        }
    }

    /// Creates an empty queue with room for `capacity` items before reallocating.
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        PriorityQueue {
            storage: Vec::with_capacity(capacity),
            compare: comparator,
        }
    }

    /// Adds `item` to the queue.
    ///
    /// The item is appended, then swapped with its parent until the parent compares
    /// greater than or equal to it.
    pub fn push(&mut self, item: T) {
        self.storage.push(item);

        let mut index_current = self.storage.len() - 1;
        while index_current > 0 {
            let index_parent = (index_current - 1) / 2;
            let order = self
                .compare
                .compare(&self.storage[index_parent], &self.storage[index_current]);
            if order != Ordering::Less {
                break;
            }
            self.storage.swap(index_current, index_parent);
            index_current = index_parent;
        }
    }

    /// Removes and returns the item with the greatest priority, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        // tiny heaps are already in order, shifting the front is enough
        if self.storage.len() <= 2 {
            return if self.storage.is_empty() {
                None
            } else {
                Some(self.storage.remove(0))
            };
        }

        // move the last item to the root and hand the old root back to the caller
        let last = self.storage.pop()?;
        let top = std::mem::replace(&mut self.storage[0], last);

        let index_last = self.storage.len() - 1;
        let mut index_current = 0;
        loop {
            let index_first = index_current * 2 + 1;
            if index_first > index_last {
                break;
            }

            // the second child only wins if the first one strictly loses against it
            let index_second = index_first + 1;
            let mut index_next = index_first;
            if index_second <= index_last
                && self
                    .compare
                    .compare(&self.storage[index_first], &self.storage[index_second])
                    == Ordering::Less
            {
                index_next = index_second;
            }

            let order = self
                .compare
                .compare(&self.storage[index_next], &self.storage[index_current]);
            if order == Ordering::Less {
                break;
            }
            self.storage.swap(index_next, index_current);
            index_current = index_next;
        }

        Some(top)
    }

    /// Returns the item `pop` would return next, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Number of items currently queued.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterates over the stored items in heap storage order, not in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Mutable access to the comparator. Stored items are not re-sorted afterwards.
    pub fn comparator_mut(&mut self) -> &mut C {
        &mut self.compare
    }

    /// Drains the queue, returning its items in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.storage.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T, C> PriorityQueue<T, C>
where
    T: PartialEq,
{
    /// Whether an item equal to `item` is currently queued. Does not touch the order.
    pub fn contains(&self, item: &T) -> bool {
        self.storage.contains(item)
    }
}

impl<T, C> Extend<T> for PriorityQueue<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T, crate::sets::queue::MaxFirst> {
    fn default() -> Self {
        PriorityQueue::new(crate::sets::queue::MaxFirst)
    }
}
