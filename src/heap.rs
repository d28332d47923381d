use std::fmt;

use crate::equality::StructuralEq;

/// A value stored in a [`MinHeap`] together with the priority it is ordered by.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<T> {
    pub priority: f64,
    pub value: T,
}

impl<T> HeapEntry<T> {
    pub fn new(priority: f64, value: T) -> Self {
        Self { priority, value }
    }
}

/// A bare priority is its own value.
impl From<f64> for HeapEntry<f64> {
    fn from(priority: f64) -> Self {
        Self::new(priority, priority)
    }
}

impl<T> From<(f64, T)> for HeapEntry<T> {
    fn from((priority, value): (f64, T)) -> Self {
        Self::new(priority, value)
    }
}

/// Binary min-heap over a dense `Vec`, with lookup and removal of arbitrary
/// entries by value.
///
/// The entry at index `i` has children at `2i + 1` and `2i + 2`. Every entry's
/// priority is greater than or equal to its parent's.
///
/// Entries with equal priorities come out in an unspecified order.
///
/// Values are matched with the equality function given at construction, by
/// default [`StructuralEq::structural_eq`].
#[derive(Clone)]
pub struct MinHeap<T> {
    entries: Vec<HeapEntry<T>>,
    equal: fn(&T, &T) -> bool,
}

impl<T: StructuralEq> MinHeap<T> {
    pub fn new() -> Self {
        Self::with_equality(T::structural_eq)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            equal: T::structural_eq,
        }
    }

    /// Bulk-loads `entries` and heapifies once, bottom-up.
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<HeapEntry<T>>,
    {
        let mut heap = Self::new();
        heap.entries.extend(entries.into_iter().map(Into::into));
        heap.heapify();
        heap
    }
}

impl MinHeap<f64> {
    /// Builds a heap where every priority is also the stored value.
    pub fn from_priorities<I: IntoIterator<Item = f64>>(priorities: I) -> Self {
        Self::from_entries(priorities)
    }
}

impl<T> MinHeap<T> {
    /// Empty heap matching values with `equal` instead of structural equality.
    pub fn with_equality(equal: fn(&T, &T) -> bool) -> Self {
        Self {
            entries: Vec::new(),
            equal,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in storage order, which is not priority order.
    pub fn iter(&self) -> impl Iterator<Item = &HeapEntry<T>> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn add<E: Into<HeapEntry<T>>>(&mut self, entry: E) {
        self.entries.push(entry.into());
        self.swim(self.entries.len() - 1);
    }

    pub fn peek(&self) -> Option<&HeapEntry<T>> {
        self.entries.first()
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.peek().map(|entry| entry.priority)
    }

    pub fn pop(&mut self) -> Option<HeapEntry<T>> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Linear scan for an entry whose value equals `value`.
    pub fn includes(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Removes the first entry, in storage order, whose value equals `value`.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => {
                self.remove_at(index);
                true
            }
            None => false,
        }
    }

    /// Drains the heap into a vector ordered by ascending priority.
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<T>> {
        let mut sorted = Vec::with_capacity(self.entries.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| (self.equal)(&entry.value, value))
    }

    /// Removes the entry at `index` by moving the last entry into its slot.
    /// The moved entry may violate the invariant in either direction, so it
    /// is sunk first and swum only if sinking left it in place.
    fn remove_at(&mut self, index: usize) -> HeapEntry<T> {
        let removed = self.entries.swap_remove(index);
        if index < self.entries.len() && self.sink(index) == index {
            self.swim(index);
        }
        removed
    }

    fn heapify(&mut self) {
        for index in (0..self.entries.len() / 2).rev() {
            self.sink(index);
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a].priority < self.entries[b].priority
    }

    fn swim(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    /// Returns the index the entry ended up at.
    fn sink(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                return index;
            }
            let right = left + 1;
            let smallest = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smallest, index) {
                return index;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: StructuralEq> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<T: StructuralEq> FromIterator<HeapEntry<T>> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = HeapEntry<T>>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<T> Extend<HeapEntry<T>> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = HeapEntry<T>>>(&mut self, iter: I) {
        self.entries.extend(iter);
        self.heapify();
    }
}
