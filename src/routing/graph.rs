//! Capability graph: languages as nodes, models as directed edges.

use crate::error::{Result, RoutingError};
use crate::i18n::LanguageToken;
use crate::models::ModelEntry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::warn;

/// What to do when two models declare the same (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateDirectionPolicy {
    /// Fail the build with `RoutingError::DuplicateDirection`
    #[default]
    Reject,
    /// The later model replaces the earlier one on the existing edge
    LastWins,
}

impl std::str::FromStr for DuplicateDirectionPolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "last-wins" | "last_wins" => Ok(Self::LastWins),
            other => anyhow::bail!(
                "Invalid duplicate direction policy '{}'. Expected 'reject' or 'last-wins'",
                other
            ),
        }
    }
}

/// Directed graph of direct translation capabilities.
///
/// Nodes are numbered in order of first appearance (source before target for
/// each entry) and each adjacency list keeps edge insertion order. The router
/// relies on both orders for its tie-break.
#[derive(Debug, Clone, Default)]
pub struct CapabilityGraph {
    nodes: Vec<LanguageToken>,
    index: HashMap<LanguageToken, usize>,
    adjacency: Vec<Vec<Edge>>,
}

#[derive(Debug, Clone)]
pub(crate) struct Edge {
    pub(crate) to: usize,
    pub(crate) model: Arc<ModelEntry>,
}

impl CapabilityGraph {
    /// Build the graph from entries in input order.
    ///
    /// Model ids must be unique. Duplicate directions are handled per `policy`.
    pub fn build(entries: &[Arc<ModelEntry>], policy: DuplicateDirectionPolicy) -> Result<Self> {
        let mut graph = Self::default();
        let mut seen_ids: HashSet<&str> = HashSet::with_capacity(entries.len());

        for entry in entries {
            if !seen_ids.insert(entry.id.as_str()) {
                return Err(RoutingError::DuplicateModel(entry.id.clone()));
            }
            graph.add_edge(Arc::clone(entry), policy)?;
        }

        Ok(graph)
    }

    fn add_edge(&mut self, model: Arc<ModelEntry>, policy: DuplicateDirectionPolicy) -> Result<()> {
        let from = self.intern(&model.source);
        let to = self.intern(&model.target);

        if let Some(edge) = self.adjacency[from].iter_mut().find(|edge| edge.to == to) {
            match policy {
                DuplicateDirectionPolicy::Reject => {
                    return Err(RoutingError::DuplicateDirection {
                        existing: edge.model.id.clone(),
                        duplicate: model.id.clone(),
                        source_lang: model.source.to_string(),
                        target_lang: model.target.to_string(),
                    });
                }
                DuplicateDirectionPolicy::LastWins => {
                    warn!(
                        "Model '{}' replaces '{}' for {}->{}",
                        model.id, edge.model.id, model.source, model.target
                    );
                    edge.model = model;
                    return Ok(());
                }
            }
        }

        self.adjacency[from].push(Edge { to, model });
        Ok(())
    }

    fn intern(&mut self, token: &LanguageToken) -> usize {
        if let Some(&idx) = self.index.get(token) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(token.clone());
        self.index.insert(token.clone(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Number of language nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of direct edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Languages in order of first appearance.
    pub fn languages(&self) -> &[LanguageToken] {
        &self.nodes
    }

    pub(crate) fn node_index(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub(crate) fn node(&self, idx: usize) -> &LanguageToken {
        &self.nodes[idx]
    }

    pub(crate) fn neighbors(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }

    pub(crate) fn edge_between(&self, from: usize, to: usize) -> Option<&Arc<ModelEntry>> {
        self.adjacency[from]
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| &edge.model)
    }
}
