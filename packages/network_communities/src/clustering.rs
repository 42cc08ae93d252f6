// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Index;

use crate::network::prelude::*;

pub struct CommunityItem {
    pub node: CompactNodeId,
    pub community: CommunityId,
}

/// The membership listing of one community in a finished partition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommunityInfo {
    pub id: CommunityId,
    pub nodes: Vec<String>,
    pub size: usize,
}

/// A node to community assignment over the nodes of an `IndexedNetwork`.
///
/// Community ids are never renumbered: a run starts from `as_singletons`, nodes only ever move
/// into communities that already exist, and so every id stays below `next_community_id`. Ids of
/// communities that lost all their nodes are simply no longer used.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    next_community_id: CommunityId,
    node_to_community_mapping: Vec<CommunityId>,
}

impl Clustering {
    /// Every node in its own community, numbered after the node's index.
    pub fn as_singletons(num_nodes: usize) -> Clustering {
        let mut identity_mapping: Vec<CommunityId> = Vec::with_capacity(num_nodes);
        identity_mapping.extend(0..num_nodes);
        return Clustering {
            next_community_id: num_nodes,
            node_to_community_mapping: identity_mapping,
        };
    }

    /// Creates a clustering (with ZERO sanity checking) from an explicit mapping.
    pub fn as_defined(node_to_community_mapping: Vec<CommunityId>) -> Clustering {
        let next_community_id: CommunityId = node_to_community_mapping
            .iter()
            .max()
            .map(|largest| largest + 1)
            .unwrap_or(0);
        return Clustering {
            next_community_id,
            node_to_community_mapping,
        };
    }

    pub fn num_nodes(&self) -> usize {
        return self.node_to_community_mapping.len();
    }

    /// An upper bound (exclusive) on the community ids in use; sizes per-community tables.
    pub fn next_community_id(&self) -> CommunityId {
        return self.next_community_id;
    }

    pub fn update_community_at(
        &mut self,
        node: CompactNodeId,
        community: CommunityId,
    ) {
        self.node_to_community_mapping[node] = community;
        self.next_community_id = self.next_community_id.max(community + 1);
    }

    /// The distinct communities in use, in order of their first member node.
    pub fn communities_in_order(&self) -> Vec<CommunityId> {
        let mut seen: Vec<bool> = vec![false; self.next_community_id];
        let mut ordered: Vec<CommunityId> = Vec::new();
        for community in &self.node_to_community_mapping {
            if !seen[*community] {
                seen[*community] = true;
                ordered.push(*community);
            }
        }
        return ordered;
    }

    pub fn num_communities(&self) -> usize {
        return self.communities_in_order().len();
    }

    /// Inverts the assignment into one `CommunityInfo` per community in use, listing member ids
    /// in node order.
    pub fn community_info(
        &self,
        network: &IndexedNetwork,
    ) -> BTreeMap<CommunityId, CommunityInfo> {
        let mut community_info: BTreeMap<CommunityId, CommunityInfo> = BTreeMap::new();
        for item in self {
            let info: &mut CommunityInfo =
                community_info
                    .entry(item.community)
                    .or_insert_with(|| CommunityInfo {
                        id: item.community,
                        nodes: Vec::new(),
                        size: 0,
                    });
            info.nodes.push(network.node_id(item.node).into());
            info.size += 1;
        }
        return community_info;
    }

    /// The assignment keyed by node id.
    pub fn communities_by_id(
        &self,
        network: &IndexedNetwork,
    ) -> BTreeMap<String, CommunityId> {
        return self
            .into_iter()
            .map(|item| (network.node_id(item.node).to_string(), item.community))
            .collect();
    }
}

pub struct CommunityIterator<'a> {
    clustering: &'a Clustering,
    next_node: CompactNodeId,
}

impl<'a> Iterator for CommunityIterator<'a> {
    type Item = CommunityItem;

    fn next(&mut self) -> Option<Self::Item> {
        return if self.next_node == self.clustering.node_to_community_mapping.len() {
            None
        } else {
            let item = CommunityItem {
                node: self.next_node,
                community: self.clustering[self.next_node],
            };
            self.next_node += 1;
            Some(item)
        };
    }
}

impl<'a> IntoIterator for &'a Clustering {
    type Item = CommunityItem;
    type IntoIter = CommunityIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        return CommunityIterator {
            clustering: self,
            next_node: 0,
        };
    }
}

impl Index<CompactNodeId> for Clustering {
    type Output = CommunityId;

    fn index(
        &self,
        index: CompactNodeId,
    ) -> &Self::Output {
        &self.node_to_community_mapping[index]
    }
}
