//! All-pairs shortest routes over the capability graph.
//!
//! Every edge costs one hop, so a breadth-first search from each language
//! yields shortest routes in O(V * (V + E)). The searches run once, in
//! `Router::new`; lookups afterwards only walk the stored predecessor trees.
//!
//! Tie-break: neighbors are visited in edge insertion order and a language's
//! predecessor is fixed on first discovery, so among equal-length routes the
//! one whose hops were registered earliest wins. The result depends only on
//! the input order of the entries, never on hashing.

use crate::i18n::LanguageToken;
use crate::models::ModelEntry;
use crate::routing::graph::CapabilityGraph;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Ordered sequence of models realizing a translation. Empty means no route.
pub type Chain = Vec<Arc<ModelEntry>>;

/// Path through the graph, from the requested source to the requested target.
///
/// A single-language route stands for "source equals target".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(Vec<LanguageToken>);

impl Route {
    pub fn languages(&self) -> &[LanguageToken] {
        &self.0
    }

    /// Number of models the route chains together.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

/// Shortest-route table over a capability graph.
#[derive(Debug, Clone)]
pub struct Router {
    graph: CapabilityGraph,
    // predecessors[s][v]: node before v on the chosen route from s.
    // A source is its own predecessor; None means unreachable.
    predecessors: Vec<Vec<Option<usize>>>,
}

impl Router {
    /// Take ownership of the graph and compute every shortest route.
    pub fn new(graph: CapabilityGraph) -> Self {
        let predecessors = (0..graph.node_count())
            .map(|source| breadth_first(&graph, source))
            .collect();

        debug!(
            "Computed routes for {} languages over {} models",
            graph.node_count(),
            graph.edge_count()
        );

        Self { graph, predecessors }
    }

    pub fn graph(&self) -> &CapabilityGraph {
        &self.graph
    }

    /// The stored route from `source` to `target`.
    ///
    /// Returns `None` for unknown languages or when `target` is unreachable.
    pub fn route(&self, source: &str, target: &str) -> Option<Route> {
        let path = self.index_path(source, target)?;
        Some(Route(path.into_iter().map(|idx| self.graph.node(idx).clone()).collect()))
    }

    /// Models to chain for `source -> target`.
    ///
    /// Empty when source equals target, when either language is unknown, or
    /// when no route exists. Never fails.
    pub fn chain(&self, source: &str, target: &str) -> Chain {
        let Some(path) = self.index_path(source, target) else {
            return Vec::new();
        };

        path.windows(2)
            .filter_map(|pair| self.graph.edge_between(pair[0], pair[1]).cloned())
            .collect()
    }

    /// Every (source, target) pair with source != target that some chain
    /// connects, in node order.
    pub fn reachable_pairs(&self) -> impl Iterator<Item = (&LanguageToken, &LanguageToken)> + '_ {
        self.predecessors.iter().enumerate().flat_map(move |(source, row)| {
            row.iter()
                .enumerate()
                .filter(move |(target, pred)| *target != source && pred.is_some())
                .map(move |(target, _)| (self.graph.node(source), self.graph.node(target)))
        })
    }

    fn index_path(&self, source: &str, target: &str) -> Option<Vec<usize>> {
        let from = self.graph.node_index(source)?;
        let to = self.graph.node_index(target)?;
        let row = &self.predecessors[from];

        row[to]?;

        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = row[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Predecessor tree of a BFS rooted at `source`.
fn breadth_first(graph: &CapabilityGraph, source: usize) -> Vec<Option<usize>> {
    let mut predecessors = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();

    predecessors[source] = Some(source);
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        for edge in graph.neighbors(node) {
            if predecessors[edge.to].is_none() {
                predecessors[edge.to] = Some(node);
                queue.push_back(edge.to);
            }
        }
    }

    predecessors
}
