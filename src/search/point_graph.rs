use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::Uniform;
use tracing::debug;

use crate::{
    error::WaypointError,
    search::{
        Frame, NodeId, SearchOutcome, SolveOptions, WiringMode,
        node::{Node, Point},
        solve_with,
    },
    sets::{fixed::FixedNeighbors, traversed::EdgeSet},
};

/// Parameters of the random demonstration graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphParams {
    /// Number of randomly placed points, not counting the two fixed corners.
    pub num_nodes: usize,
    /// Side of the square canvas the points live on.
    pub canvas_size: u32,
    /// Radius wiring connects points strictly closer than this.
    pub neighbor_distance: f64,
    /// Radius wiring never gives a node more neighbors than this.
    pub max_neighbors: usize,
    pub wiring: WiringMode,
    /// Number of pairs drawn by random wiring.
    pub num_random_edges: usize,
}

impl Default for GraphParams {
    fn default() -> Self {
        GraphParams {
            num_nodes: 500,
            canvas_size: 1000,
            neighbor_distance: 80.0,
            max_neighbors: 10,
            wiring: WiringMode::Radius,
            num_random_edges: 100,
        }
    }
}

impl GraphParams {
    fn validate(&self) -> Result<(), WaypointError> {
        if self.canvas_size < 2 {
            return Err(WaypointError::InvalidParams(format!(
                "canvas size must be at least 2, got {}",
                self.canvas_size
            )));
        }
        if self.neighbor_distance.is_nan() || self.neighbor_distance < 0.0 {
            return Err(WaypointError::InvalidParams(format!(
                "neighbor distance must be non-negative, got {}",
                self.neighbor_distance
            )));
        }
        Ok(())
    }
}

/// Undirected graph of points on a square canvas, used to demonstrate the search.
///
/// # Invariants
/// - `nodes[i]` is the node with id `i`.
/// - Every neighbor id is a valid index into `nodes`.
/// - Adjacency is symmetric: wiring always adds both directions.
///
/// Generated graphs put the start at the top-left corner `(0, 0)` and the goal at the
/// bottom-right corner `(canvas, canvas)`, with the random points in between.
#[derive(Debug)]
pub struct PointGraph {
    nodes: Vec<Node>,
    canvas_size: u32,
}

impl PointGraph {
    /// Builds a graph from explicit positions and adjacency lists.
    ///
    /// The first node is the start and the last one the goal.
    pub fn new(nodes: Vec<Node>, canvas_size: u32) -> Result<Self, WaypointError> {
        if nodes.is_empty() {
            return Err(WaypointError::InvalidParams(
                "a graph needs at least one node".to_string(),
            ));
        }
        if let Some(bad) = nodes
            .iter()
            .flat_map(|n| n.neighbors.as_slice())
            .find(|id| id.internal >= nodes.len())
        {
            return Err(WaypointError::InvalidParams(format!(
                "neighbor {} is out of bounds for {} nodes",
                bad.internal,
                nodes.len()
            )));
        }
        Ok(PointGraph { nodes, canvas_size })
    }

    /// Generates a random graph from `params`. The same seed always yields the same graph.
    pub fn generate(params: &GraphParams, seed: u64) -> Result<Self, WaypointError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let points = Self::place_points(params, &mut rng)?;
        let adjacency = match params.wiring {
            WiringMode::Radius => Self::wire_radius(&points, params),
            WiringMode::Random => Self::wire_random(points.len(), params, &mut rng),
        };

        let nodes: Vec<Node> = points
            .into_iter()
            .zip(adjacency)
            .map(|(position, neighbors)| Node {
                position,
                neighbors: FixedNeighbors::new(neighbors),
            })
            .collect();

        let graph = PointGraph {
            nodes,
            canvas_size: params.canvas_size,
        };
        debug!(
            seed,
            wiring = %params.wiring,
            nodes = graph.len(),
            edges = graph.edges().len(),
            "generated point graph"
        );
        Ok(graph)
    }

    fn place_points(params: &GraphParams, rng: &mut StdRng) -> Result<Vec<Point>, WaypointError> {
        let coordinate = Uniform::new_inclusive(1, params.canvas_size - 1)
            .map_err(|e| WaypointError::InvalidParams(e.to_string()))?;

        let corner = f64::from(params.canvas_size);
        let mut points = Vec::with_capacity(params.num_nodes + 2);
        points.push(Point::new(0.0, 0.0));
        for _ in 0..params.num_nodes {
            let x: u32 = rng.sample(&coordinate);
            let y: u32 = rng.sample(&coordinate);
            points.push(Point::new(f64::from(x), f64::from(y)));
        }
        points.push(Point::new(corner, corner));
        Ok(points)
    }

    /// Greedy radius wiring: pairs are considered in index order, and a pair is
    /// connected only while both endpoints are under the neighbor cap.
    fn wire_radius(points: &[Point], params: &GraphParams) -> Vec<Vec<NodeId>> {
        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); points.len()];
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points[i].distance(&points[j]) < params.neighbor_distance
                    && adjacency[i].len() < params.max_neighbors
                    && adjacency[j].len() < params.max_neighbors
                {
                    adjacency[i].push(NodeId::from(j));
                    adjacency[j].push(NodeId::from(i));
                }
            }
        }
        adjacency
    }

    /// Random wiring may draw self-loops and the same pair twice; both are kept.
    fn wire_random(len: usize, params: &GraphParams, rng: &mut StdRng) -> Vec<Vec<NodeId>> {
        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); len];
        for _ in 0..params.num_random_edges {
            let a = rng.random_range(0..len);
            let b = rng.random_range(0..len);
            adjacency[a].push(NodeId::from(b));
            adjacency[b].push(NodeId::from(a));
        }
        adjacency
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    pub fn start(&self) -> NodeId {
        NodeId::from(0)
    }

    pub fn goal(&self) -> NodeId {
        NodeId::from(self.nodes.len() - 1)
    }

    /// # Panics
    /// If `id` is not a node of this graph.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.nodes[id.internal].neighbors.as_slice()
    }

    /// # Panics
    /// If `id` is not a node of this graph.
    pub fn position(&self, id: NodeId) -> Point {
        self.nodes[id.internal].position
    }

    /// Euclidean distance between the positions of `a` and `b`.
    pub fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        self.position(a).distance(&self.position(b))
    }

    /// Iterates over node ids and their positions.
    pub fn positions(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from(i), node.position))
    }

    /// Every undirected edge of the graph, once.
    pub fn edges(&self) -> EdgeSet<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| {
                node.neighbors
                    .as_slice()
                    .iter()
                    .map(move |&n| (NodeId::from(i), n))
            })
            .collect()
    }

    /// Searches from [`start`](Self::start) to [`goal`](Self::goal), with edge lengths as
    /// costs and the straight-line distance to the goal as heuristic.
    pub fn solve(&self, options: SolveOptions) -> SearchOutcome<NodeId> {
        let goal = self.goal();
        let goal_position = self.position(goal);
        solve_with(
            options,
            self.start(),
            goal,
            |&id| self.neighbors(id).iter().copied(),
            |&id| self.position(id).distance(&goal_position),
            |&a, &b| self.distance(a, b),
        )
    }

    /// Length of the path recorded in `frame`.
    pub fn path_length(&self, frame: &Frame<NodeId>) -> f64 {
        frame.path_cost(|&a, &b| self.distance(a, b))
    }
}
