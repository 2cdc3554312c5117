use std::hash::Hash;

use hashbrown::HashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A set of undirected edges between node identities.
///
/// `{a, b}` and `{b, a}` are the same edge: an edge is stored once, in the orientation
/// it was first inserted with, and later insertions in either orientation are ignored.
/// The set only grows; there is no removal.
///
/// # Examples
/// ```
/// use waypoint::sets::traversed::EdgeSet;
///
/// let mut edges = EdgeSet::new();
/// assert!(edges.insert(1, 2));
/// assert!(!edges.insert(2, 1));
/// assert!(edges.contains(&2, &1));
/// assert_eq!(edges.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeSet<T> {
    edges: HashSet<(T, T)>,
}

impl<T> EdgeSet<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        EdgeSet {
            edges: HashSet::new(),
        }
    }

    /// Records the undirected edge `{a, b}`.
    ///
    /// # Returns
    /// `true` if the edge was not present in either orientation.
    pub fn insert(&mut self, a: T, b: T) -> bool {
        if self.contains(&a, &b) {
            return false;
        }
        self.edges.insert((a, b))
    }

    /// Returns whether `{a, b}` is present in either orientation.
    pub fn contains(&self, a: &T, b: &T) -> bool {
        // (T, T) keys can only be probed with owned tuples
        self.edges.contains(&(a.clone(), b.clone())) || self.edges.contains(&(b.clone(), a.clone()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges, each in the orientation it was first recorded with.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> {
        self.edges.iter().map(|(a, b)| (a, b))
    }

    /// Returns whether every edge of `self` is also an edge of `other`, in any orientation.
    pub fn is_subset(&self, other: &EdgeSet<T>) -> bool {
        self.len() <= other.len() && self.iter().all(|(a, b)| other.contains(a, b))
    }
}

impl<T> Default for EdgeSet<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for EdgeSet<T>
where
    T: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T> Eq for EdgeSet<T> where T: Eq + Hash + Clone {}

impl<T> FromIterator<(T, T)> for EdgeSet<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        for (a, b) in iter {
            set.insert(a, b);
        }
        set
    }
}

impl<T> Serialize for EdgeSet<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.edges.iter().map(|(a, b)| [a, b]))
    }
}

impl<'de, T> Deserialize<'de> for EdgeSet<T>
where
    T: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pairs = Vec::<[T; 2]>::deserialize(deserializer)?;
        Ok(pairs.into_iter().map(|[a, b]| (a, b)).collect())
    }
}
