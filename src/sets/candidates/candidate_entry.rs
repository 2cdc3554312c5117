use crate::sets::candidates::TotalF64;

/// A slot of the indexed min-heap: a node identity and the score it was queued with.
///
/// Entries are ordered by score only. Two entries with equal scores compare equal
/// even when their values differ, so the heap is free to break such ties in any order.
#[derive(Clone, Debug)]
pub struct QueueEntry<T> {
    /// Ordering key, the f-score the value was offered with.
    pub score: TotalF64,

    /// Identity of the queued node.
    pub value: T,
}

impl<T> QueueEntry<T> {
    pub fn new(score: f64, value: T) -> Self {
        QueueEntry {
            score: score.into(),
            value,
        }
    }
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.cmp(&other.score)
    }
}
