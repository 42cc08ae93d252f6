// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::slice::Iter;

use crate::network::CommunityId;

/// The candidate communities for one node, in the order they were first seen, together with the
/// number of the node's links into each of them.
///
/// Lookups are indexed by community id, so the structure is sized once per pass and reset between
/// nodes by clearing only the entries that were touched.
pub struct NeighboringCommunities {
    neighboring_communities: Vec<CommunityId>,
    links_to_community: Vec<Option<usize>>,
}

impl NeighboringCommunities {
    pub fn with_capacity(num_communities: usize) -> NeighboringCommunities {
        return NeighboringCommunities {
            neighboring_communities: Vec::with_capacity(num_communities),
            links_to_community: vec![None; num_communities],
        };
    }

    pub fn reset(&mut self) {
        for community in &self.neighboring_communities {
            self.links_to_community[*community] = None;
        }
        self.neighboring_communities.clear();
    }

    /// Records one link from the node into `community`.
    pub fn increase_links_to(
        &mut self,
        community: CommunityId,
    ) {
        self.include(community);
        if let Some(links) = self.links_to_community[community].as_mut() {
            *links += 1;
        }
    }

    /// Adds `community` as a candidate without a link; a no-op when it is already a candidate.
    pub fn include(
        &mut self,
        community: CommunityId,
    ) {
        if self.links_to_community[community].is_none() {
            self.neighboring_communities.push(community);
            self.links_to_community[community] = Some(0);
        }
    }

    pub fn links_to(
        &self,
        community: CommunityId,
    ) -> usize {
        return self.links_to_community[community].unwrap_or(0);
    }

    pub fn iter(&self) -> Iter<CommunityId> {
        return self.neighboring_communities.iter();
    }
}
