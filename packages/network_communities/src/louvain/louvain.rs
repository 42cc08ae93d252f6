// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::clustering::{Clustering, CommunityInfo};
use crate::log;
use crate::network::prelude::*;
use crate::quality::clustering_modularity;

use super::local_moving::local_moving_pass;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// The outcome of one detection run.
///
/// `iterations` is the number of local moving passes performed, including the final pass that
/// moved nothing. A value equal to the iteration cap means the passes were still moving nodes
/// when the run stopped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommunityDetection {
    pub communities: BTreeMap<String, CommunityId>,
    pub modularity: f64,
    pub community_info: BTreeMap<CommunityId, CommunityInfo>,
    pub iterations: usize,
}

impl CommunityDetection {
    pub fn empty() -> CommunityDetection {
        return CommunityDetection {
            communities: BTreeMap::new(),
            modularity: 0_f64,
            community_info: BTreeMap::new(),
            iterations: 0,
        };
    }

    pub fn num_communities(&self) -> usize {
        return self.community_info.len();
    }

    pub(crate) fn from_clustering(
        network: &IndexedNetwork,
        clustering: &Clustering,
        iterations: usize,
    ) -> CommunityDetection {
        return CommunityDetection {
            communities: clustering.communities_by_id(network),
            modularity: clustering_modularity(network, clustering),
            community_info: clustering.community_info(network),
            iterations,
        };
    }
}

/// Partitions the network with the Louvain local moving phase.
///
/// Every node starts in its own community, numbered after its position in `nodes`. Passes of
/// `local_moving_pass` repeat until one moves no node or `max_iterations` passes (default 100)
/// have run. Nodes are visited in input order, so a given node and link order always produces
/// the same partition.
///
/// Links may reference ids that are not in `nodes`; such links add to the link count but never to
/// a node's degree. A network without nodes or without links returns without running any pass.
pub fn detect_communities(
    nodes: &[Node],
    links: &[Link],
    max_iterations: Option<usize>,
) -> CommunityDetection {
    let network: IndexedNetwork = IndexedNetwork::new(nodes, links);
    if network.num_nodes() == 0 {
        return CommunityDetection::empty();
    }
    let (clustering, iterations) = improve_clustering(&network, max_iterations);
    return CommunityDetection::from_clustering(&network, &clustering, iterations);
}

pub(crate) fn improve_clustering(
    network: &IndexedNetwork,
    max_iterations: Option<usize>,
) -> (Clustering, usize) {
    let max_iterations: usize = max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
    let mut clustering: Clustering = Clustering::as_singletons(network.num_nodes());

    if network.num_nodes() == 0 || network.num_links() == 0 {
        return (clustering, 0);
    }

    log!(
        "Running Louvain for at most {} iterations over a network with {} nodes and {} links ({} dangling)",
        max_iterations,
        network.num_nodes(),
        network.num_links(),
        network.num_dangling_links(),
    );

    let mut iterations: usize = 0;
    let mut changed: bool = true;
    while changed && iterations < max_iterations {
        changed = local_moving_pass(network, &mut clustering);
        iterations += 1;
    }

    if changed {
        log!(
            "Stopped after reaching the cap of {} iterations with {} communities",
            iterations,
            clustering.num_communities()
        );
    } else {
        log!(
            "Converged after {} iterations with {} communities",
            iterations,
            clustering.num_communities()
        );
    }
    return (clustering, iterations);
}
