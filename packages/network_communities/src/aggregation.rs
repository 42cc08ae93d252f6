// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::collections::{BTreeMap, HashMap};

use crate::clustering::Clustering;
#[allow(unused_imports)]
use crate::log;
use crate::network::prelude::*;

/// Super-nodes never get a smaller size than this, however small their members are.
pub const MINIMUM_SUPER_NODE_SIZE: f64 = 10_f64;
/// The size counted for a member node that has no usable size of its own.
pub const DEFAULT_MEMBER_SIZE: f64 = 1_f64;
pub const SUPER_NODE_KIND: &str = "community";
pub const SUPER_LINK_KIND: &str = "inter_community";

/// The id of the super-node standing in for `community`.
pub fn super_node_id(community: CommunityId) -> String {
    return format!("community_{}", community);
}

/// Collapses each community of `communities` into a super-node and the links between
/// communities into weighted super-links.
///
/// Nodes without an entry in `communities` are left out of every super-node, and their links are
/// dropped along with links that have a dangling endpoint.
pub fn aggregate_communities(
    nodes: &[Node],
    links: &[Link],
    communities: &BTreeMap<String, CommunityId>,
) -> Network {
    let network: IndexedNetwork = IndexedNetwork::new(nodes, links);
    return aggregate_with(&network, |node| {
        communities.get(network.node_id(node)).cloned()
    });
}

pub(crate) fn aggregate_clustering(
    network: &IndexedNetwork,
    clustering: &Clustering,
) -> Network {
    return aggregate_with(network, |node| Some(clustering[node]));
}

/// Super-nodes come out in order of each community's first member node. Every pair of
/// communities joined by at least one link gets exactly one super-link, oriented like the first
/// such link, whose `weight` is the number of links between the two communities. Links inside a
/// community are dropped.
fn aggregate_with<F>(
    network: &IndexedNetwork,
    community_of: F,
) -> Network
where
    F: Fn(CompactNodeId) -> Option<CommunityId>,
{
    let mut community_order: Vec<CommunityId> = Vec::new();
    let mut members_per_community: Vec<Vec<&Node>> = Vec::new();
    let mut super_node_index: HashMap<CommunityId, usize> = HashMap::new();

    for node in 0..network.num_nodes() {
        if let Some(community) = community_of(node) {
            let index: usize = *super_node_index.entry(community).or_insert_with(|| {
                community_order.push(community);
                members_per_community.push(Vec::new());
                members_per_community.len() - 1
            });
            members_per_community[index].push(network.node(node));
        }
    }

    let super_nodes: Vec<Node> = community_order
        .iter()
        .zip(members_per_community.iter())
        .map(|(community, members)| super_node(*community, members))
        .collect();

    let mut super_link_index: HashMap<(CommunityId, CommunityId), usize> = HashMap::new();
    let mut super_links: Vec<Link> = Vec::new();
    for (source, target) in network.links() {
        let (source_community, target_community) = match (source, target) {
            (Some(source), Some(target)) => match (community_of(*source), community_of(*target)) {
                (Some(source_community), Some(target_community)) => {
                    (source_community, target_community)
                }
                _ => continue,
            },
            _ => continue,
        };
        if source_community == target_community {
            continue;
        }

        let pair: (CommunityId, CommunityId) = (
            source_community.min(target_community),
            source_community.max(target_community),
        );
        match super_link_index.get(&pair) {
            Some(index) => {
                let weight: &mut f64 = super_links[*index].weight.get_or_insert(0_f64);
                *weight += 1_f64;
            }
            None => {
                super_link_index.insert(pair, super_links.len());
                super_links.push(super_link(source_community, target_community));
            }
        }
    }

    log!(
        "Aggregated {} nodes into {} super-nodes joined by {} super-links",
        network.num_nodes(),
        super_nodes.len(),
        super_links.len()
    );
    return Network::new(super_nodes, super_links);
}

fn super_node(
    community: CommunityId,
    members: &[&Node],
) -> Node {
    let total_size: f64 = members.iter().map(|member| member_size(member)).sum();
    let average_size: f64 = if members.is_empty() {
        0_f64
    } else {
        total_size / members.len() as f64
    };
    return Node {
        id: super_node_id(community),
        size: Some(average_size.max(MINIMUM_SUPER_NODE_SIZE)),
        name: Some(format!("Community {}", community)),
        kind: Some(SUPER_NODE_KIND.into()),
        members: members.iter().map(|member| (*member).clone()).collect(),
        community: Some(community),
    };
}

fn super_link(
    source_community: CommunityId,
    target_community: CommunityId,
) -> Link {
    return Link {
        source: Endpoint::node(&super_node_id(source_community)),
        target: Endpoint::node(&super_node_id(target_community)),
        kind: Some(SUPER_LINK_KIND.into()),
        weight: Some(1_f64),
    };
}

fn member_size(node: &Node) -> f64 {
    return match node.size {
        Some(size) if size != 0_f64 && !size.is_nan() => size,
        _ => DEFAULT_MEMBER_SIZE,
    };
}
