// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Association Network
// ─────────────────────────────────────────────────────────────────────
//! Directed, weighted graph over semantic identifiers with one-step
//! weighted-sum propagation.
//!
//! Storage is an adjacency map `source → (destination → weight)` plus a
//! reverse index for in-links. `evaluate` walks existing edges only:
//! cost is O(edges), never O(nodes²).
//!
//! Both maps are ordered by identifier index, so summation order is the
//! same on every run for a given graph.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cogxel_types::{
    CognitionError, CognitionResult, CogxelState, SemanticIdentifier, SemanticLabel,
};

use crate::registry::SemanticIdentifierMap;

/// One directed, weighted edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub source: SemanticIdentifier,
    pub destination: SemanticIdentifier,
    pub weight: f64,
}

/// Weighted association network (pattern recognizer).
///
/// Built once through `add_node`/`set_association`, then evaluated
/// read-only. Mutation takes `&mut self`, so evaluation can never
/// interleave with it.
#[derive(Debug, Clone)]
pub struct AssociationNetwork {
    registry: Arc<SemanticIdentifierMap>,
    nodes: BTreeSet<SemanticIdentifier>,
    outgoing: BTreeMap<SemanticIdentifier, BTreeMap<SemanticIdentifier, f64>>,
    incoming: BTreeMap<SemanticIdentifier, BTreeSet<SemanticIdentifier>>,
}

impl AssociationNetwork {
    /// Empty network resolving labels through `registry`.
    pub fn new(registry: Arc<SemanticIdentifierMap>) -> Self {
        Self {
            registry,
            nodes: BTreeSet::new(),
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }

    pub fn registry(&self) -> &Arc<SemanticIdentifierMap> {
        &self.registry
    }

    /// Register `label` as a node, even if it never gets an edge.
    pub fn add_node(&mut self, label: &SemanticLabel) -> SemanticIdentifier {
        let identifier = self.registry.add_label(label);
        self.nodes.insert(identifier.clone());
        identifier
    }

    /// Create or overwrite the edge `source → destination`.
    ///
    /// Both nodes are added if absent. Non-finite weights are rejected.
    pub fn set_association(
        &mut self,
        source: &SemanticLabel,
        destination: &SemanticLabel,
        weight: f64,
    ) -> CognitionResult<()> {
        if !weight.is_finite() {
            return Err(CognitionError::Numerical(format!(
                "association weight {source} -> {destination} must be finite, got {weight}"
            )));
        }
        let src = self.add_node(source);
        let dst = self.add_node(destination);
        self.incoming
            .entry(dst.clone())
            .or_default()
            .insert(src.clone());
        self.outgoing.entry(src).or_default().insert(dst, weight);
        Ok(())
    }

    /// Weight of `source → destination`; 0.0 when there is no edge.
    pub fn get_association(&self, source: &SemanticLabel, destination: &SemanticLabel) -> f64 {
        let (Some(src), Some(dst)) = (self.resolve(source), self.resolve(destination)) else {
            return 0.0;
        };
        self.outgoing
            .get(&src)
            .and_then(|edges| edges.get(&dst))
            .copied()
            .unwrap_or(0.0)
    }

    /// Drop the edge `source → destination`, returning its weight.
    pub fn remove_association(
        &mut self,
        source: &SemanticLabel,
        destination: &SemanticLabel,
    ) -> Option<f64> {
        let src = self.resolve(source)?;
        let dst = self.resolve(destination)?;
        let edges = self.outgoing.get_mut(&src)?;
        let weight = edges.remove(&dst)?;
        if edges.is_empty() {
            self.outgoing.remove(&src);
        }
        if let Some(sources) = self.incoming.get_mut(&dst) {
            sources.remove(&src);
            if sources.is_empty() {
                self.incoming.remove(&dst);
            }
        }
        Some(weight)
    }

    /// Remove a node and every edge touching it. The identifier stays
    /// registered; only this network forgets it.
    pub fn remove_node(&mut self, label: &SemanticLabel) -> bool {
        let Some(node) = self.resolve(label) else {
            return false;
        };
        if !self.nodes.remove(&node) {
            return false;
        }
        if let Some(destinations) = self.outgoing.remove(&node) {
            for dst in destinations.keys() {
                if let Some(sources) = self.incoming.get_mut(dst) {
                    sources.remove(&node);
                    if sources.is_empty() {
                        self.incoming.remove(dst);
                    }
                }
            }
        }
        if let Some(sources) = self.incoming.remove(&node) {
            for src in &sources {
                if let Some(edges) = self.outgoing.get_mut(src) {
                    edges.remove(&node);
                    if edges.is_empty() {
                        self.outgoing.remove(src);
                    }
                }
            }
        }
        true
    }

    pub fn is_node(&self, label: &SemanticLabel) -> bool {
        self.resolve(label).is_some()
    }

    /// Every node, in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &SemanticIdentifier> {
        self.nodes.iter()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_associations(&self) -> usize {
        self.outgoing.values().map(BTreeMap::len).sum()
    }

    /// Nodes with at least one out-edge.
    pub fn input_nodes(&self) -> impl Iterator<Item = &SemanticIdentifier> {
        self.outgoing.keys()
    }

    /// Nodes with at least one in-edge.
    pub fn output_nodes(&self) -> impl Iterator<Item = &SemanticIdentifier> {
        self.incoming.keys()
    }

    /// Out-edges of `label` as `(destination, weight)`.
    pub fn out_links(&self, label: &SemanticLabel) -> Vec<(SemanticIdentifier, f64)> {
        self.resolve(label)
            .and_then(|node| self.outgoing.get(&node))
            .map(|edges| edges.iter().map(|(d, w)| (d.clone(), *w)).collect())
            .unwrap_or_default()
    }

    /// In-edges of `label` as `(source, weight)`.
    pub fn in_links(&self, label: &SemanticLabel) -> Vec<(SemanticIdentifier, f64)> {
        let Some(node) = self.resolve(label) else {
            return Vec::new();
        };
        self.incoming
            .get(&node)
            .map(|sources| {
                sources
                    .iter()
                    .filter_map(|src| {
                        let weight = self.outgoing.get(src)?.get(&node)?;
                        Some((src.clone(), *weight))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Snapshot of every edge, ordered by (source, destination).
    pub fn associations(&self) -> Vec<Association> {
        self.outgoing
            .iter()
            .flat_map(|(src, edges)| {
                edges.iter().map(move |(dst, weight)| Association {
                    source: src.clone(),
                    destination: dst.clone(),
                    weight: *weight,
                })
            })
            .collect()
    }

    /// One-step propagation: `output[d] = Σ input[s] · w(s, d)`.
    ///
    /// Every edge destination appears in the output, at 0.0 when none of
    /// its sources are active. No clamping or normalisation.
    pub fn evaluate(&self, input: &CogxelState) -> CogxelState {
        let mut output = CogxelState::with_capacity(self.incoming.len());
        for dst in self.incoming.keys() {
            output.set_activation(dst, 0.0);
        }
        for (src, edges) in &self.outgoing {
            let activation = input.get_cogxel_activation(src);
            if activation == 0.0 {
                continue;
            }
            for (dst, weight) in edges {
                let sum = output.get_cogxel_activation(dst) + activation * weight;
                output.set_activation(dst, sum);
            }
        }
        output
    }

    fn resolve(&self, label: &SemanticLabel) -> Option<SemanticIdentifier> {
        self.registry
            .find_identifier(label)
            .filter(|identifier| self.nodes.contains(identifier))
    }
}
