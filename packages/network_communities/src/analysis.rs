// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::louvain::CommunityDetection;
use crate::network::prelude::*;

/// The links running between two communities of a partition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommunityBridge {
    /// The two communities, lower id first.
    pub communities: (CommunityId, CommunityId),
    pub links: Vec<Link>,
}

/// Groups the links crossing between communities of `detection` by community pair, pairs in
/// ascending order and links in input order. Links touching a node the detection did not
/// assign are skipped.
pub fn community_bridges(
    links: &[Link],
    detection: &CommunityDetection,
) -> Vec<CommunityBridge> {
    let mut bridges: BTreeMap<(CommunityId, CommunityId), Vec<Link>> = BTreeMap::new();
    for link in links {
        let source_community: Option<&CommunityId> = detection.communities.get(link.source_id());
        let target_community: Option<&CommunityId> = detection.communities.get(link.target_id());
        if let (Some(source), Some(target)) = (source_community, target_community) {
            if source != target {
                bridges
                    .entry((*source.min(target), *source.max(target)))
                    .or_insert_with(Vec::new)
                    .push(link.clone());
            }
        }
    }
    return bridges
        .into_iter()
        .map(|(communities, links)| CommunityBridge { communities, links })
        .collect();
}
