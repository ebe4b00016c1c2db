//! Graph construction and adjacency.

use std::collections::{HashMap, HashSet};

use crate::error::RouteError;
use crate::models::{Edge, EdgeId, EdgeSpec, Node, NodeId, SegmentId, TraveledEdgeSet};

/// One outgoing adjacency entry: a traversable slot leaving a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent {
    /// Neighbor node.
    pub to: NodeId,
    /// The directed edge record this entry traverses.
    pub edge: EdgeId,
    /// Edge length in meters.
    pub distance: f64,
}

/// In-memory road network.
///
/// Every logical road segment of the input is materialized as two directed
/// [`Edge`] records with swapped endpoints, and as one adjacency entry at
/// each endpoint. Construction validates the input: edges referencing
/// unknown nodes and negative or non-finite distances are rejected.
///
/// # Examples
///
/// ```
/// use roadcover::graph::Graph;
/// use roadcover::models::{EdgeSpec, Node, NodeId};
///
/// let nodes = vec![
///     Node::new(NodeId(1), 0.0, 0.0),
///     Node::new(NodeId(2), 0.0, 1.0),
/// ];
/// let edges = vec![EdgeSpec::new(NodeId(1), NodeId(2), 100.0)];
///
/// let graph = Graph::build(nodes, &edges).unwrap();
/// assert_eq!(graph.num_nodes(), 2);
/// // One logical segment, two directed records.
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.neighbors(NodeId(1)).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    adjacency: HashMap<NodeId, Vec<Adjacent>>,
}

impl Graph {
    /// Builds a graph from a node list and the logical edge list.
    ///
    /// For each logical edge, creates forward and reverse directed records
    /// and appends an adjacency entry at both endpoints. An edge without an
    /// explicit distance gets the haversine distance between its endpoints.
    ///
    /// # Errors
    ///
    /// [`RouteError::MalformedGraph`] if an edge references a node id absent
    /// from the node list; [`RouteError::InvalidDistance`] if a distance is
    /// negative or non-finite.
    pub fn build(nodes: Vec<Node>, edges: &[EdgeSpec]) -> Result<Self, RouteError> {
        let mut graph = Self {
            nodes: HashMap::with_capacity(nodes.len()),
            edges: HashMap::with_capacity(edges.len() * 2),
            adjacency: HashMap::with_capacity(nodes.len()),
        };

        for node in nodes {
            graph.adjacency.entry(node.id).or_default();
            graph.nodes.insert(node.id, node);
        }

        for spec in edges {
            let from = graph.node(spec.from).copied().ok_or(RouteError::MalformedGraph {
                from: spec.from,
                to: spec.to,
                missing: spec.from,
            })?;
            let to = graph.node(spec.to).copied().ok_or(RouteError::MalformedGraph {
                from: spec.from,
                to: spec.to,
                missing: spec.to,
            })?;

            let distance = match spec.distance {
                Some(d) => d,
                None => from.distance_to(&to),
            };
            if !distance.is_finite() || distance < 0.0 {
                return Err(RouteError::InvalidDistance {
                    from: spec.from,
                    to: spec.to,
                    distance,
                });
            }

            let forward = Edge::new(spec.from, spec.to, distance, spec.tags.clone());
            let reverse = forward.reversed();
            graph.insert_directed(forward);
            graph.insert_directed(reverse);
        }

        Ok(graph)
    }

    fn insert_directed(&mut self, edge: Edge) {
        let entry = Adjacent {
            to: edge.to(),
            edge: edge.id(),
            distance: edge.distance(),
        };
        self.adjacency.entry(edge.from()).or_default().push(entry);
        self.edges.insert(edge.id(), edge);
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// `true` if the node exists in the graph.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Looks up a directed edge record by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Iterates over all directed edge records.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Iterates over all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Outgoing adjacency entries of a node. Empty for unknown nodes.
    pub fn neighbors(&self, id: NodeId) -> &[Adjacent] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edge records (twice the logical segment count).
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Total adjacency entry count across all nodes.
    pub fn num_adjacency_entries(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// The logical segments not yet covered by previous routes.
    pub fn required_segments(&self, traveled: &TraveledEdgeSet) -> HashSet<SegmentId> {
        self.edges
            .keys()
            .map(EdgeId::segment)
            .filter(|&s| !traveled.contains_segment(s))
            .collect()
    }

    /// All logical segments of the network.
    pub fn segments(&self) -> HashSet<SegmentId> {
        self.edges.keys().map(EdgeId::segment).collect()
    }
}
