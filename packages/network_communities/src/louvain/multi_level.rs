// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregation::aggregate_clustering;
use crate::clustering::CommunityInfo;
use crate::log;
use crate::network::prelude::*;

use super::louvain::{improve_clustering, CommunityDetection};

pub const DEFAULT_MAX_LEVELS: usize = 3;

/// The partition found at one level of a multi-level run, together with the graph it was computed
/// on: the input graph at level 0, and the super-graph aggregated from the previous level's
/// partition at every level after that.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommunityLevel {
    pub level: usize,
    pub communities: BTreeMap<String, CommunityId>,
    pub modularity: f64,
    pub community_info: BTreeMap<CommunityId, CommunityInfo>,
    pub iterations: usize,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl CommunityLevel {
    fn from_detection(
        level: usize,
        detection: CommunityDetection,
        network: Network,
    ) -> CommunityLevel {
        return CommunityLevel {
            level,
            communities: detection.communities,
            modularity: detection.modularity,
            community_info: detection.community_info,
            iterations: detection.iterations,
            nodes: network.nodes,
            links: network.links,
        };
    }

    pub fn num_communities(&self) -> usize {
        return self.community_info.len();
    }

    /// The partition of this level without the graph it was computed on.
    pub fn to_detection(&self) -> CommunityDetection {
        return CommunityDetection {
            communities: self.communities.clone(),
            modularity: self.modularity,
            community_info: self.community_info.clone(),
            iterations: self.iterations,
        };
    }
}

/// Runs detection on the input graph, then repeatedly aggregates the latest partition into a
/// super-graph and runs detection on that, for at most `max_levels` levels (default 3).
///
/// Stops early once a level ends with one community or none, since aggregating it would not
/// produce anything to partition. Each level runs with the default iteration cap.
pub fn detect_communities_multi_level(
    nodes: &[Node],
    links: &[Link],
    max_levels: Option<usize>,
) -> Vec<CommunityLevel> {
    return detect_levels(nodes, links, max_levels, None);
}

/// `detect_communities_multi_level` with every level capped at `max_iterations` local moving
/// passes instead of the default.
pub fn detect_levels(
    nodes: &[Node],
    links: &[Link],
    max_levels: Option<usize>,
    max_iterations: Option<usize>,
) -> Vec<CommunityLevel> {
    let max_levels: usize = max_levels.unwrap_or(DEFAULT_MAX_LEVELS);
    let mut levels: Vec<CommunityLevel> = Vec::with_capacity(max_levels);
    let mut current: Network = Network::new(nodes.to_vec(), links.to_vec());

    for level in 0..max_levels {
        let (detection, next) = {
            let network: IndexedNetwork = IndexedNetwork::new(&current.nodes, &current.links);
            if network.num_nodes() == 0 {
                (CommunityDetection::empty(), None)
            } else {
                let (clustering, iterations) = improve_clustering(&network, max_iterations);
                let detection: CommunityDetection =
                    CommunityDetection::from_clustering(&network, &clustering, iterations);
                let next: Option<Network> =
                    if detection.num_communities() > 1 && level + 1 < max_levels {
                        Some(aggregate_clustering(&network, &clustering))
                    } else {
                        None
                    };
                (detection, next)
            }
        };

        log!(
            "Level {}: {} communities with modularity {} after {} iterations",
            level,
            detection.num_communities(),
            detection.modularity,
            detection.iterations
        );
        levels.push(CommunityLevel::from_detection(level, detection, current));

        current = match next {
            Some(aggregated) => aggregated,
            None => break,
        };
    }
    return levels;
}
