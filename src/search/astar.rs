use std::hash::Hash;

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::{
    search::Frame,
    sets::{candidates::IndexedMinHeap, traversed::EdgeSet},
    statistics::SearchStats,
};

/// Which frames a run keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameCapture {
    /// Keep the initial frame and one frame per extraction.
    #[default]
    All,
    /// Keep only the most recent frame. Each frame still costs a path reconstruction
    /// and an edge set copy, but memory no longer grows with the number of extractions.
    FinalOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveOptions {
    pub capture: FrameCapture,
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The goal was extracted from the open set.
    Found,
    /// The open set ran empty before the goal was extracted.
    Exhausted,
}

/// Everything a run hands back to its caller.
#[derive(Debug, Clone)]
pub struct SearchOutcome<T>
where
    T: Eq + Hash + Clone,
{
    pub frames: Vec<Frame<T>>,
    pub found: bool,
    pub stats: SearchStats,
}

impl<T> SearchOutcome<T>
where
    T: Eq + Hash + Clone,
{
    pub fn status(&self) -> SearchStatus {
        if self.found {
            SearchStatus::Found
        } else {
            SearchStatus::Exhausted
        }
    }

    /// Path of the last recorded frame, from its head back to the start.
    ///
    /// When the goal was found, this is the route to the goal in reverse order.
    pub fn final_path(&self) -> Option<&[T]> {
        self.frames.last().map(|frame| frame.path.as_slice())
    }
}

/// Runs A* from `start` to `goal`, recording a frame after every extraction.
///
/// Shorthand for [`solve_with`] with default options.
///
/// # Examples
/// ```
/// use waypoint::search::solve;
///
/// // a line 0 - 1 - 2 - 3 with unit edges
/// let outcome = solve(
///     0i32,
///     3,
///     |&n| [n - 1, n + 1].into_iter().filter(|m| (0..=3).contains(m)),
///     |&n| (3 - n) as f64,
///     |_, _| 1.0,
/// );
///
/// assert!(outcome.found);
/// assert_eq!(outcome.final_path(), Some(&[3, 2, 1, 0][..]));
/// ```
pub fn solve<T, N, I, H, D>(
    start: T,
    goal: T,
    neighbors: N,
    heuristic: H,
    distance: D,
) -> SearchOutcome<T>
where
    T: Eq + Hash + Clone,
    N: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    H: FnMut(&T) -> f64,
    D: FnMut(&T, &T) -> f64,
{
    solve_with(
        SolveOptions::default(),
        start,
        goal,
        neighbors,
        heuristic,
        distance,
    )
}

/// Runs A* from `start` to `goal`.
///
/// The run repeatedly extracts the node with the smallest f-score from the open set,
/// records a frame for it, stops if it is the goal, and otherwise relaxes every edge
/// to its neighbors. A neighbor is offered to the open set when its g-score improves
/// strictly; the offer is dropped if the neighbor is already queued.
///
/// # Parameters
/// - `neighbors`: Adjacency of a node. Must return the same neighbors for the same
///   node during the whole run.
/// - `heuristic`: Estimated remaining cost to `goal`. Paths are shortest only if it
///   never overestimates.
/// - `distance`: Exact cost of an edge. Must be finite and non-negative.
///
/// None of these requirements are checked.
///
/// # Returns
/// The frame log, whether the goal was reached, and the run's counters. With
/// [`FrameCapture::All`] the log holds `1 + extractions` frames.
pub fn solve_with<T, N, I, H, D>(
    options: SolveOptions,
    start: T,
    goal: T,
    mut neighbors: N,
    mut heuristic: H,
    mut distance: D,
) -> SearchOutcome<T>
where
    T: Eq + Hash + Clone,
    N: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
    H: FnMut(&T) -> f64,
    D: FnMut(&T, &T) -> f64,
{
    let mut search = SearchState::new(options.capture);
    debug!(capture = ?options.capture, "starting A* search");

    search.open.insert(0.0, start.clone());
    search.g_score.insert(start.clone(), 0.0);
    search.f_score.insert(start.clone(), heuristic(&start));
    search.record_frame(Frame {
        path: vec![start],
        traversed: EdgeSet::new(),
    });

    while let Some(node) = search.open.extract() {
        search.stats.bump_extractions();
        trace!(
            open = search.open.len(),
            traversed = search.traversed.len(),
            "expanding node"
        );

        search.record_frame(Frame {
            path: search.reconstruct_path(&node),
            traversed: search.traversed.clone(),
        });

        if node == goal {
            return search.finish(true);
        }

        // every node that reaches the open set has a g-score
        let node_g = search.g_score[&node];
        for neighbor in neighbors(&node) {
            let tentative_g = node_g + distance(&node, &neighbor);
            search.stats.bump_edges();
            search.traversed.insert(node.clone(), neighbor.clone());

            let improves = match search.g_score.get(&neighbor) {
                Some(&known_g) => tentative_g < known_g,
                None => true,
            };
            if improves {
                search.relax(node.clone(), neighbor, tentative_g, &mut heuristic);
            }
        }
    }

    search.finish(false)
}

struct SearchState<T>
where
    T: Eq + Hash + Clone,
{
    open: IndexedMinHeap<T>,
    g_score: HashMap<T, f64>,
    f_score: HashMap<T, f64>,
    came_from: HashMap<T, T>,
    traversed: EdgeSet<T>,
    frames: Vec<Frame<T>>,
    capture: FrameCapture,
    stats: SearchStats,
}

impl<T> SearchState<T>
where
    T: Eq + Hash + Clone,
{
    fn new(capture: FrameCapture) -> Self {
        SearchState {
            open: IndexedMinHeap::new(),
            g_score: HashMap::new(),
            f_score: HashMap::new(),
            came_from: HashMap::new(),
            traversed: EdgeSet::new(),
            frames: Vec::new(),
            capture,
            stats: SearchStats::new(),
        }
    }

    fn record_frame(&mut self, frame: Frame<T>) {
        if self.capture == FrameCapture::FinalOnly {
            self.frames.clear();
        }
        self.frames.push(frame);
        self.stats.bump_frames();
    }

    fn relax<H>(&mut self, from: T, neighbor: T, tentative_g: f64, heuristic: &mut H)
    where
        H: FnMut(&T) -> f64,
    {
        let f = tentative_g + heuristic(&neighbor);
        self.came_from.insert(neighbor.clone(), from);
        self.g_score.insert(neighbor.clone(), tentative_g);
        self.f_score.insert(neighbor.clone(), f);

        let queued = self.open.insert(f, neighbor);
        self.stats.bump_relaxations(queued);
    }

    /// Follows predecessors from `node` until a node without one.
    fn reconstruct_path(&self, node: &T) -> Vec<T> {
        let mut path = vec![node.clone()];
        let mut current = node;
        while let Some(previous) = self.came_from.get(current) {
            // a valid predecessor chain visits every relaxed node at most once
            if path.len() > self.came_from.len() {
                break;
            }
            path.push(previous.clone());
            current = previous;
        }
        path
    }

    fn finish(self, found: bool) -> SearchOutcome<T> {
        debug!(
            found,
            extractions = self.stats.get_extractions(),
            edges_examined = self.stats.get_edges_examined(),
            relaxations = self.stats.get_relaxations(),
            stale_offers = self.stats.get_stale_offers(),
            frames = self.frames.len(),
            left_in_open_set = self.open.len(),
            "A* search finished"
        );
        SearchOutcome {
            frames: self.frames,
            found,
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A - B = 1, B - D = 1, A - C = 5, C - D = 1
    fn diamond_neighbors(node: &char) -> Vec<char> {
        match node {
            'A' => vec!['B', 'C'],
            'B' => vec!['A', 'D'],
            'C' => vec!['A', 'D'],
            'D' => vec!['B', 'C'],
            _ => vec![],
        }
    }

    fn diamond_distance(a: &char, b: &char) -> f64 {
        let mut pair = [*a, *b];
        pair.sort();
        match pair {
            ['A', 'B'] | ['B', 'D'] | ['C', 'D'] => 1.0,
            ['A', 'C'] => 5.0,
            _ => f64::INFINITY,
        }
    }

    #[test]
    fn test_diamond_takes_cheap_branch() {
        let outcome = solve('A', 'D', diamond_neighbors, |_| 0.0, diamond_distance);

        assert!(outcome.found);
        assert_eq!(outcome.status(), SearchStatus::Found);
        assert_eq!(outcome.final_path(), Some(&['D', 'B', 'A'][..]));

        let last = outcome.frames.last().unwrap();
        assert_eq!(last.path_cost(diamond_distance), 2.0);
    }

    #[test]
    fn test_diamond_frame_trace() {
        let outcome = solve('A', 'D', diamond_neighbors, |_| 0.0, diamond_distance);

        // initial, A, B, D
        let heads: Vec<char> = outcome.frames.iter().map(|f| f.path[0]).collect();
        assert_eq!(heads, vec!['A', 'A', 'B', 'D']);
        assert!(outcome.frames[0].traversed.is_empty());
        assert!(outcome.frames[1].traversed.is_empty());

        // popping A examined A-B and A-C
        assert_eq!(outcome.frames[2].traversed.len(), 2);
        // popping B examined B-A again (already present) and B-D
        assert_eq!(outcome.frames[3].traversed.len(), 3);
        assert!(outcome.frames[3].traversed.contains(&'D', &'B'));
    }

    #[test]
    fn test_start_equals_goal() {
        let outcome = solve(7u32, 7, |_| vec![8], |_| 0.0, |_, _| 1.0);

        assert!(outcome.found);
        assert_eq!(outcome.frames.len(), 2);
        assert_eq!(outcome.frames[1].path, vec![7]);
        assert!(outcome.frames[1].traversed.is_empty());
        assert_eq!(outcome.stats.get_edges_examined(), 0);
    }

    #[test]
    fn test_isolated_goal_is_exhausted() {
        let edges: HashMap<u32, Vec<u32>> =
            [(0, vec![1]), (1, vec![0, 2]), (2, vec![1]), (9, vec![])]
                .into_iter()
                .collect();
        let outcome = solve(
            0,
            9,
            |n| edges.get(n).cloned().unwrap_or_default(),
            |_| 0.0,
            |_, _| 1.0,
        );

        assert!(!outcome.found);
        assert_eq!(outcome.status(), SearchStatus::Exhausted);
        assert_eq!(outcome.frames.len(), 4);

        let mut heads: Vec<u32> = outcome.frames[1..].iter().map(|f| f.path[0]).collect();
        heads.sort();
        assert_eq!(heads, vec![0, 1, 2]);
    }

    #[test]
    fn test_edges_recorded_even_without_improvement() {
        // triangle where 0-2 direct is worse than 0-1-2
        let outcome = solve(
            0u8,
            3,
            |&n| match n {
                0 => vec![1, 2],
                1 => vec![0, 2],
                2 => vec![0, 1],
                _ => vec![],
            },
            |_| 0.0,
            |a, b| if a + b == 2 { 10.0 } else { 1.0 },
        );

        assert!(!outcome.found);
        let last = outcome.frames.last().unwrap();
        assert!(last.traversed.contains(&1, &2));
        assert!(last.traversed.contains(&0, &2));
        assert_eq!(outcome.stats.get_edges_examined(), 6);
        assert_eq!(outcome.stats.get_relaxations(), 3);
    }

    #[test]
    fn test_frames_count_matches_extractions() {
        let outcome = solve('A', 'D', diamond_neighbors, |_| 0.0, diamond_distance);
        assert_eq!(
            outcome.frames.len(),
            1 + outcome.stats.get_extractions()
        );
        assert_eq!(outcome.frames.len(), outcome.stats.get_frames_recorded());
    }

    #[test]
    fn test_final_only_keeps_last_frame() {
        let all = solve('A', 'D', diamond_neighbors, |_| 0.0, diamond_distance);
        let last_only = solve_with(
            SolveOptions {
                capture: FrameCapture::FinalOnly,
            },
            'A',
            'D',
            diamond_neighbors,
            |_| 0.0,
            diamond_distance,
        );

        assert_eq!(last_only.found, all.found);
        assert_eq!(last_only.frames.len(), 1);
        assert_eq!(last_only.frames.last(), all.frames.last());
        assert_eq!(last_only.stats, all.stats);
    }

    #[test]
    fn test_queued_node_keeps_first_offer() {
        // From S, C is reached first at cost 10 and A at cost 1. Expanding A finds
        // C at cost 2 while C is still queued with f = 10: the predecessor is
        // rewritten but the queue offer is dropped.
        let outcome = solve(
            'S',
            'G',
            |n| match n {
                'S' => vec!['C', 'A'],
                'A' => vec!['C'],
                'C' => vec!['G'],
                _ => vec![],
            },
            |_| 0.0,
            |a, b| match (a, b) {
                ('S', 'C') => 10.0,
                _ => 1.0,
            },
        );

        assert!(outcome.found);
        assert_eq!(outcome.final_path(), Some(&['G', 'C', 'A', 'S'][..]));
        assert_eq!(outcome.stats.get_stale_offers(), 1);
    }
}
