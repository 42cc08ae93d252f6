// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::collections::{BTreeMap, HashMap};

use network_communities::log;
use network_communities::louvain::detect_communities as detect_communities_internal;
use network_communities::louvain::detect_communities_multi_level as detect_multi_level_internal;
use network_communities::louvain::{CommunityDetection, CommunityLevel};
use network_communities::network::prelude::*;
use network_communities::quality;

/// A node as passed from Python: its id and optional size.
pub type PyNode = (String, Option<f64>);
/// A link as passed from Python: source id and target id.
pub type PyLink = (String, String);

fn to_records(
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
) -> (Vec<Node>, Vec<Link>) {
    let nodes: Vec<Node> = nodes
        .into_iter()
        .map(|(id, size)| match size {
            Some(size) => Node::with_size(&id, size),
            None => Node::new(&id),
        })
        .collect();
    let links: Vec<Link> = links
        .into_iter()
        .map(|(source, target)| Link::new(&source, &target))
        .collect();
    log!(
        "Converted {} nodes and {} links from their Python representation",
        nodes.len(),
        links.len()
    );
    return (nodes, links);
}

pub fn detect_communities(
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
    max_iterations: usize,
) -> CommunityDetection {
    let (nodes, links) = to_records(nodes, links);
    return detect_communities_internal(&nodes, &links, Some(max_iterations));
}

pub fn detect_communities_multi_level(
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
    max_levels: usize,
) -> Vec<CommunityLevel> {
    let (nodes, links) = to_records(nodes, links);
    return detect_multi_level_internal(&nodes, &links, Some(max_levels));
}

pub fn modularity(
    nodes: Vec<PyNode>,
    links: Vec<PyLink>,
    communities: HashMap<String, CommunityId>,
) -> f64 {
    let (nodes, links) = to_records(nodes, links);
    let communities: BTreeMap<String, CommunityId> = communities.into_iter().collect();
    return quality::modularity(&nodes, &links, &communities);
}
