use serde::Serialize;

/// Counters collected by one A* run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    extractions: usize,
    edges_examined: usize,
    relaxations: usize,
    queue_insertions: usize,
    frames_recorded: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        SearchStats::default()
    }

    /// Record that a node was popped from the open set
    pub fn bump_extractions(&mut self) {
        self.extractions += 1
    }

    /// Record that an edge was looked at during expansion, improving or not
    pub fn bump_edges(&mut self) {
        self.edges_examined += 1
    }

    /// Record that a neighbor got a cheaper cost. `queued` tells whether the offer to
    /// the open set actually added it.
    pub fn bump_relaxations(&mut self, queued: bool) {
        self.relaxations += 1;
        if queued {
            self.queue_insertions += 1;
        }
    }

    pub fn bump_frames(&mut self) {
        self.frames_recorded += 1
    }

    pub fn get_extractions(&self) -> usize {
        self.extractions
    }

    pub fn get_edges_examined(&self) -> usize {
        self.edges_examined
    }

    pub fn get_relaxations(&self) -> usize {
        self.relaxations
    }

    pub fn get_queue_insertions(&self) -> usize {
        self.queue_insertions
    }

    /// Number of frames recorded, including the initial one. With every frame kept
    /// this is also the length of the returned frame log.
    pub fn get_frames_recorded(&self) -> usize {
        self.frames_recorded
    }

    /// Relaxations whose offer to the open set was dropped because the node was
    /// already queued with an older score.
    pub fn get_stale_offers(&self) -> usize {
        self.relaxations - self.queue_insertions
    }
}
