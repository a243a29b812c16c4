//! Weighted location graph and shortest routes.
//!
//! # Algorithm
//!
//! Dijkstra over a dense adjacency matrix. Each round finalizes the
//! unvisited node with the smallest tentative distance (ties go to the
//! lowest node index) and relaxes its unvisited neighbours. A neighbour is
//! only updated on a strictly shorter distance, so the first-found
//! predecessor survives equal-length alternatives.
//!
//! # Complexity
//! O(V^2) time, O(V^2) space. Suited to small, fixed campuses.
//!
//! # Reference
//! Dijkstra (1959), "A note on two problems in connexion with graphs"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::config::CampusConfig;
use crate::error::{CampusError, Result};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Largest accepted edge weight.
///
/// Keeps every simple path sum far below `u64::MAX`.
pub const MAX_EDGE_WEIGHT: u64 = u32::MAX as u64;

/// A shortest route between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Locations from source to destination, inclusive.
    pub path: Vec<String>,
    /// Sum of edge weights along `path`.
    pub distance: u64,
}

impl Route {
    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Distance: {})", self.path.join(" -> "), self.distance)
    }
}

/// Undirected, non-negatively weighted graph over named locations.
///
/// `None` in the adjacency matrix means "no direct edge"; the diagonal is
/// always `Some(0)`.
///
/// # Example
///
/// ```
/// use campus_schedule::config::CampusConfig;
/// use campus_schedule::graph::LocationGraph;
///
/// let graph = LocationGraph::from_config(&CampusConfig::default()).unwrap();
/// let route = graph.shortest_path("Mainhall", "Hostel").unwrap();
/// assert_eq!(route.path, vec!["Mainhall", "Library", "Lab", "Hostel"]);
/// assert_eq!(route.distance, 11);
/// ```
#[derive(Debug, Clone)]
pub struct LocationGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Option<u64>>>,
}

impl LocationGraph {
    /// Creates a graph with the given nodes and no edges.
    ///
    /// Repeated names keep their first position.
    pub fn new<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();
        for name in nodes {
            let name = name.into();
            if !index.contains_key(&name) {
                index.insert(name.clone(), names.len());
                names.push(name);
            }
        }
        let n = names.len();
        let adjacency = (0..n)
            .map(|i| (0..n).map(|j| (i == j).then_some(0)).collect())
            .collect();
        Self {
            nodes: names,
            index,
            adjacency,
        }
    }

    /// Builds the graph described by a configuration.
    pub fn from_config(config: &CampusConfig) -> Result<Self> {
        let mut graph = Self::new(config.locations.iter().cloned());
        for edge in &config.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Location names in index order.
    pub fn locations(&self) -> &[String] {
        &self.nodes
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of a location in the fixed node order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Sets the weight of the undirected edge `from`-`to`.
    ///
    /// Re-adding an edge overwrites its weight. Weights above
    /// [`MAX_EDGE_WEIGHT`] are rejected.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<()> {
        let i = self.require(from)?;
        let j = self.require(to)?;
        if i == j {
            return Err(CampusError::Validation(vec![ValidationError::new(
                ValidationErrorKind::SelfLoop,
                format!("Edge loops back on '{from}'"),
            )]));
        }
        if weight > MAX_EDGE_WEIGHT {
            return Err(CampusError::Validation(vec![ValidationError::new(
                ValidationErrorKind::WeightTooLarge,
                format!("Edge {from}-{to} weight {weight} exceeds {MAX_EDGE_WEIGHT}"),
            )]));
        }
        self.adjacency[i][j] = Some(weight);
        self.adjacency[j][i] = Some(weight);
        Ok(())
    }

    /// Direct edge weight between two locations, if they are adjacent.
    ///
    /// A location is at distance 0 from itself.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<u64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.adjacency[i][j]
    }

    /// Direct neighbours of a location with edge weights, in index order.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, u64)>> {
        let i = self.require(name)?;
        Ok(self.adjacency[i]
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .filter_map(|(j, w)| w.map(|w| (self.nodes[j].as_str(), w)))
            .collect())
    }

    /// Shortest route from `from` to `to`.
    ///
    /// # Errors
    /// - [`CampusError::UnknownLocation`] if either name is not in the graph.
    /// - [`CampusError::NoRoute`] if `to` is unreachable from `from`.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Route> {
        let src = self.require(from)?;
        let dest = self.require(to)?;
        let n = self.nodes.len();

        // `None` = not reached yet.
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        dist[src] = Some(0);

        for _ in 0..n {
            // Strict `<` keeps the lowest index among equal distances.
            let mut next: Option<(usize, u64)> = None;
            for i in 0..n {
                if visited[i] {
                    continue;
                }
                if let Some(d) = dist[i] {
                    if next.map_or(true, |(_, best)| d < best) {
                        next = Some((i, d));
                    }
                }
            }
            let Some((u, du)) = next else {
                break;
            };
            visited[u] = true;

            for v in 0..n {
                if visited[v] {
                    continue;
                }
                let Some(candidate) = self.adjacency[u][v].and_then(|w| du.checked_add(w)) else {
                    continue;
                };
                if dist[v].map_or(true, |d| candidate < d) {
                    dist[v] = Some(candidate);
                    prev[v] = Some(u);
                }
            }
        }

        let Some(distance) = dist[dest] else {
            return Err(CampusError::NoRoute {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let mut path = vec![self.nodes[dest].clone()];
        let mut cursor = dest;
        while let Some(p) = prev[cursor] {
            path.push(self.nodes[p].clone());
            cursor = p;
        }
        path.reverse();

        Ok(Route { path, distance })
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| CampusError::UnknownLocation(name.to_string()))
    }
}
