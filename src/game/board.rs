//! Board representation: a fixed undirected graph

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt,
};

use crate::types::NodeId;

/// The base 20-node board (nodes 1-20).
pub const TOP_RIGHT_20: &str = "top-right-20";

/// The extended 35-node board with far-reaching links.
pub const TOP_RIGHT_35: &str = "top-right-35";

const EDGES_20: [(u16, u16); 20] = [
    (1, 8),
    (1, 9),
    (2, 10),
    (2, 20),
    (3, 4),
    (3, 11),
    (3, 12),
    (4, 13),
    (5, 15),
    (5, 16),
    (6, 7),
    (7, 17),
    (8, 18),
    (8, 19),
    (9, 19),
    (9, 20),
    (10, 11),
    (13, 14),
    (14, 15),
    (15, 16),
];

const EDGES_35_EXTRA: [(u16, u16); 34] = [
    // extended local region (21-35)
    (20, 21),
    (21, 22),
    (22, 23),
    (23, 24),
    (24, 25),
    (25, 26),
    (26, 27),
    (27, 28),
    (19, 29),
    (29, 30),
    (30, 31),
    (31, 32),
    (30, 33),
    (31, 34),
    (32, 35),
    (33, 34),
    (34, 35),
    (11, 23),
    (12, 25),
    (2, 24),
    (21, 29),
    (25, 30),
    (26, 31),
    (28, 32),
    // far-reaching connections
    (1, 24),
    (2, 29),
    (3, 28),
    (5, 30),
    (6, 22),
    (9, 27),
    (12, 33),
    (14, 34),
    (17, 31),
    (18, 35),
];

/// Scotland Yard game board, an undirected graph of numbered nodes.
///
/// The adjacency relation is symmetric and self-loop-free, and neighbor
/// iteration is ascending by node id so that move enumeration is
/// deterministic. Boards are built once from a static edge list and never
/// mutated.
#[derive(Debug, Clone)]
pub struct Board {
    name: &'static str,
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edge_count: usize,
}

impl Board {
    fn from_edges(name: &'static str, edges: &[(u16, u16)]) -> Self {
        let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> = BTreeMap::new();
        for &(u, v) in edges {
            debug_assert!(u != v, "self-loop in board definition");
            let u = NodeId::new(u);
            let v = NodeId::new(v);
            adjacency.entry(u).or_default().insert(v);
            adjacency.entry(v).or_default().insert(u);
        }
        Board {
            name,
            adjacency,
            edge_count: edges.len(),
        }
    }

    /// The base board: the original 20-node subgraph.
    pub fn top_right_20() -> Self {
        Board::from_edges(TOP_RIGHT_20, &EDGES_20)
    }

    /// The extended board: nodes 1-35 with a few far-reaching links.
    pub fn top_right_35() -> Self {
        let edges: Vec<(u16, u16)> = EDGES_20.iter().chain(EDGES_35_EXTRA.iter()).copied().collect();
        Board::from_edges(TOP_RIGHT_35, &edges)
    }

    /// Look a board up by its identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownBoard`] for an unrecognized name.
    pub fn by_name(name: &str) -> Result<Self, crate::Error> {
        match name {
            TOP_RIGHT_20 => Ok(Board::top_right_20()),
            TOP_RIGHT_35 => Ok(Board::top_right_35()),
            other => Err(crate::Error::UnknownBoard {
                name: other.to_string(),
                expected: format!("{TOP_RIGHT_20}, {TOP_RIGHT_35}"),
            }),
        }
    }

    /// The board's identifier string, used in persisted policy files.
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Neighbors of `node` in ascending id order.
    ///
    /// A node that is not on the board has no neighbors.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.get(&node).into_iter().flatten().copied()
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency.get(&u).is_some_and(|n| n.contains(&v))
    }

    /// All nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Breadth-first hop distances from `from` to every reachable node.
    ///
    /// Nodes in other components are absent from the result.
    pub fn distances(&self, from: NodeId) -> BTreeMap<NodeId, u32> {
        let mut dist = BTreeMap::new();
        if !self.contains(from) {
            return dist;
        }
        dist.insert(from, 0);
        let mut queue = VecDeque::from([from]);
        while let Some(node) = queue.pop_front() {
            let d = dist[&node];
            for next in self.neighbors(node) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} nodes, {} edges)",
            self.name,
            self.node_count(),
            self.edge_count
        )
    }
}
