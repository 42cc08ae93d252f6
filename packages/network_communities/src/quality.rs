// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::collections::BTreeMap;

use crate::clustering::Clustering;
use crate::network::prelude::*;

/// Modularity of an explicit node id to community assignment.
///
/// Nodes missing from `communities`, like nodes named only by dangling links, belong to no
/// community and never make a link intra-community.
pub fn modularity(
    nodes: &[Node],
    links: &[Link],
    communities: &BTreeMap<String, CommunityId>,
) -> f64 {
    let network: IndexedNetwork = IndexedNetwork::new(nodes, links);
    return modularity_with(&network, |node| {
        communities.get(network.node_id(node)).cloned()
    });
}

/// Modularity of a clustering over the network it was computed on.
pub fn clustering_modularity(
    network: &IndexedNetwork,
    clustering: &Clustering,
) -> f64 {
    return modularity_with(network, |node| Some(clustering[node]));
}

/// Q = 1/(2m) * sum over intra-community links (u, v) of (1 - k_u * k_v / (2m)).
///
/// Every link counts once, in whichever direction it was written, so the sum runs over links
/// rather than over ordered node pairs. `m` includes dangling links. With no links at all the
/// modularity is 0.
pub fn modularity_with<F>(
    network: &IndexedNetwork,
    community_of: F,
) -> f64
where
    F: Fn(CompactNodeId) -> Option<CommunityId>,
{
    let num_links: usize = network.num_links();
    if num_links == 0 {
        return 0_f64;
    }
    let double_links: f64 = 2_f64 * num_links as f64;

    let mut quality: f64 = 0_f64;
    for (source, target) in network.links() {
        if let (Some(source), Some(target)) = (source, target) {
            let same_community: bool = match (community_of(*source), community_of(*target)) {
                (Some(source_community), Some(target_community)) => {
                    source_community == target_community
                }
                _ => false,
            };
            if same_community {
                let degree_product: f64 =
                    network.degree(*source) as f64 * network.degree(*target) as f64;
                quality += 1_f64 - degree_product / double_links;
            }
        }
    }

    return quality / double_links;
}
