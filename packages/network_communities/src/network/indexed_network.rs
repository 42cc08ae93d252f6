// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::collections::HashMap;

use super::identifier::Identifier;
use super::networks::NetworkDetails;
use super::records::{Link, Node};
use super::CompactNodeId;

/// A link with both endpoints resolved to node indices. An endpoint naming a node that is not in
/// the network resolves to `None`.
pub type ResolvedLink = (Option<CompactNodeId>, Option<CompactNodeId>);

/// An index-based view over borrowed node and link records, built once per detection run.
///
/// Endpoint references are resolved into node indices here and nowhere else. Nodes are indexed in
/// input order; a repeated node id is folded into its first occurrence. Links whose endpoints are
/// unknown stay in the link count (and so in `m` for every modularity term) but add no degree and
/// produce no neighbors.
///
/// Neighbors are stored per node in link order. A link from node `x` to node `y` appears as `y` in
/// the neighbors of `x` and as `x` in the neighbors of `y`; a self-loop appears once, while adding
/// two to the degree of its node.
#[derive(Debug)]
pub struct IndexedNetwork<'a> {
    nodes: Vec<&'a Node>,
    node_lookup: HashMap<&'a str, CompactNodeId>,
    links: Vec<ResolvedLink>,
    neighbors: Vec<Vec<CompactNodeId>>,
    degrees: Vec<usize>,
}

impl<'a> IndexedNetwork<'a> {
    pub fn new(
        nodes: &'a [Node],
        links: &'a [Link],
    ) -> IndexedNetwork<'a> {
        let mut identifier: Identifier<&'a str> = Identifier::with_capacity(nodes.len());
        let mut distinct_nodes: Vec<&'a Node> = Vec::with_capacity(nodes.len());
        for node in nodes {
            let next_index: CompactNodeId = identifier.len();
            if identifier.identify(node.id.as_str()) == next_index {
                distinct_nodes.push(node);
            }
        }
        let (node_lookup, _) = identifier.finish();

        let mut resolved_links: Vec<ResolvedLink> = Vec::with_capacity(links.len());
        let mut neighbors: Vec<Vec<CompactNodeId>> = vec![Vec::new(); distinct_nodes.len()];
        let mut degrees: Vec<usize> = vec![0; distinct_nodes.len()];

        for link in links {
            let source: Option<CompactNodeId> = node_lookup.get(link.source_id()).cloned();
            let target: Option<CompactNodeId> = node_lookup.get(link.target_id()).cloned();
            if let Some(source) = source {
                degrees[source] += 1;
            }
            if let Some(target) = target {
                degrees[target] += 1;
            }
            if let (Some(source), Some(target)) = (source, target) {
                neighbors[source].push(target);
                if source != target {
                    neighbors[target].push(source);
                }
            }
            resolved_links.push((source, target));
        }

        return IndexedNetwork {
            nodes: distinct_nodes,
            node_lookup,
            links: resolved_links,
            neighbors,
            degrees,
        };
    }

    pub fn node(
        &self,
        node: CompactNodeId,
    ) -> &'a Node {
        return self.nodes[node];
    }

    pub fn node_id(
        &self,
        node: CompactNodeId,
    ) -> &'a str {
        return self.nodes[node].id.as_str();
    }

    pub fn index_for(
        &self,
        id: &str,
    ) -> Option<CompactNodeId> {
        return self.node_lookup.get(id).cloned();
    }

    /// Number of link endpoints touching `node`, counting parallel links separately and a
    /// self-loop twice.
    pub fn degree(
        &self,
        node: CompactNodeId,
    ) -> usize {
        return self.degrees[node];
    }

    pub fn neighbors(
        &self,
        node: CompactNodeId,
    ) -> &[CompactNodeId] {
        return &self.neighbors[node];
    }

    pub fn links(&self) -> &[ResolvedLink] {
        return &self.links;
    }
}

impl<'a> NetworkDetails for IndexedNetwork<'a> {
    fn num_nodes(&self) -> usize {
        return self.nodes.len();
    }

    fn num_links(&self) -> usize {
        return self.links.len();
    }

    fn num_dangling_links(&self) -> usize {
        return self
            .links
            .iter()
            .filter(|(source, target)| source.is_none() || target.is_none())
            .count();
    }
}
