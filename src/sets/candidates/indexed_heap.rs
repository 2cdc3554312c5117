use std::hash::Hash;

use hashbrown::HashMap;

use crate::sets::candidates::QueueEntry;

/// A binary min-heap keyed by score, with an index map from each queued value to its slot.
///
/// The heap is the open set of the A* search. Every value appears at most once: the
/// index map gives O(1) membership checks, which lets [`insert`](Self::insert) skip
/// values that are already pending.
///
/// # Invariants
/// - For every slot `i`, `tree[i].score <= tree[2i + 1].score` and
///   `tree[i].score <= tree[2i + 2].score` when those children exist.
/// - `positions[v] == i` if and only if `tree[i].value == v`.
///
/// # Duplicate Insertion
/// Offering a value that is already queued is a no-op, even when the new score is
/// smaller. The stored priority of a value is fixed at its first offer until it is
/// extracted. There is no decrease-key operation.
///
/// # Time Complexity
/// - `insert`: O(log n)
/// - `extract`: O(log n)
/// - `contains`, `peek`, `len`: O(1)
///
/// # Examples
/// ```
/// use waypoint::sets::candidates::IndexedMinHeap;
///
/// let mut heap = IndexedMinHeap::new();
/// heap.insert(2.0, "b");
/// heap.insert(1.0, "a");
/// assert!(!heap.insert(0.5, "b"));
///
/// assert_eq!(heap.extract(), Some("a"));
/// assert_eq!(heap.extract(), Some("b"));
/// assert_eq!(heap.extract(), None);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    tree: Vec<QueueEntry<T>>,
    positions: HashMap<T, usize>,
}

impl<T> IndexedMinHeap<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a new empty heap.
    pub fn new() -> Self {
        IndexedMinHeap {
            tree: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates a new empty heap with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            tree: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of values currently queued.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns whether `value` is currently queued.
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns the minimum score and its value without removing it.
    pub fn peek(&self) -> Option<(f64, &T)> {
        self.tree.first().map(|entry| (entry.score.0, &entry.value))
    }

    /// Queues `value` with the given `score`.
    ///
    /// # Returns
    /// `true` if the value was added, `false` if it was already queued. In the latter
    /// case the stored score is left untouched.
    pub fn insert(&mut self, score: f64, value: T) -> bool {
        if self.positions.contains_key(&value) {
            return false;
        }

        let slot = self.tree.len();
        self.positions.insert(value.clone(), slot);
        self.tree.push(QueueEntry::new(score, value));
        self.sift_up(slot);
        true
    }

    /// Removes and returns the value with the smallest score.
    ///
    /// Ties between equal scores are broken by heap layout, not by insertion order.
    ///
    /// # Returns
    /// `None` if the heap is empty.
    pub fn extract(&mut self) -> Option<T> {
        if self.tree.is_empty() {
            return None;
        }

        // the last slot moves into the root, then sinks to its place
        let root = self.tree.swap_remove(0);
        self.positions.remove(&root.value);

        if !self.tree.is_empty() {
            self.update_position(0);
            self.sift_down(0);
        }

        Some(root.value)
    }

    /// Iterates over the queued `(score, value)` pairs in heap layout order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> {
        self.tree.iter().map(|entry| (entry.score.0, &entry.value))
    }

    fn update_position(&mut self, slot: usize) {
        if let Some(position) = self.positions.get_mut(&self.tree[slot].value) {
            *position = slot;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.tree.swap(a, b);
        self.update_position(a);
        self.update_position(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.tree[parent] > self.tree[slot] {
                self.swap_slots(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.tree[left] < self.tree[smallest] {
                smallest = left;
            }
            if right < len && self.tree[right] < self.tree[smallest] {
                smallest = right;
            }

            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}

impl<T> Default for IndexedMinHeap<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
