// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::clustering::Clustering;
#[allow(unused_imports)]
use crate::log;
use crate::network::prelude::*;

use super::modularity_gain;
use super::neighboring_communities::NeighboringCommunities;

/// Per-community totals taken from a clustering at one moment: the summed degree of each
/// community's nodes and the number of links with both endpoints inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityDegrees {
    degrees: Vec<usize>,
    internal_links: Vec<usize>,
}

impl CommunityDegrees {
    pub fn snapshot(
        network: &IndexedNetwork,
        clustering: &Clustering,
    ) -> CommunityDegrees {
        let mut degrees: Vec<usize> = vec![0; clustering.next_community_id()];
        let mut internal_links: Vec<usize> = vec![0; clustering.next_community_id()];
        for item in clustering {
            degrees[item.community] += network.degree(item.node);
        }
        for (source, target) in network.links() {
            if let (Some(source), Some(target)) = (source, target) {
                if clustering[*source] == clustering[*target] {
                    internal_links[clustering[*source]] += 1;
                }
            }
        }
        return CommunityDegrees {
            degrees,
            internal_links,
        };
    }

    pub fn degree_of(
        &self,
        community: CommunityId,
    ) -> usize {
        return self.degrees.get(community).cloned().unwrap_or(0);
    }

    pub fn total_internal_links(&self) -> usize {
        return self.internal_links.iter().sum();
    }
}

/// Visits every node once, in index order, and moves it into the candidate community with the
/// largest strictly positive gain. Returns whether any node moved.
///
/// The candidates for a node are the communities of its neighbors, in link order, followed by its
/// own community. Only a strictly larger gain replaces the best so far, so the earliest candidate
/// wins a tie, and a node whose best gain is not positive stays put.
///
/// Community degrees are snapshotted once before the first node is visited and are not updated as
/// nodes move. Memberships are: a node visited later in the pass sees the moves made before it.
pub fn local_moving_pass(
    network: &IndexedNetwork,
    clustering: &mut Clustering,
) -> bool {
    let num_links: usize = network.num_links();
    if num_links == 0 {
        return false;
    }

    let community_degrees: CommunityDegrees = CommunityDegrees::snapshot(network, clustering);
    let mut neighboring: NeighboringCommunities =
        NeighboringCommunities::with_capacity(clustering.next_community_id());
    let mut moved: usize = 0;

    for node in 0..network.num_nodes() {
        let current_community: CommunityId = clustering[node];
        neighboring.reset();
        for neighbor in network.neighbors(node) {
            neighboring.increase_links_to(clustering[*neighbor]);
        }
        neighboring.include(current_community);

        let node_degree: usize = network.degree(node);
        let mut best_community: CommunityId = current_community;
        let mut best_gain: f64 = 0_f64;
        for community in neighboring.iter() {
            let gain: f64 = modularity_gain::calculate(
                neighboring.links_to(*community),
                node_degree,
                community_degrees.degree_of(*community),
                num_links,
            );
            if gain > best_gain {
                best_gain = gain;
                best_community = *community;
            }
        }

        if best_gain > 0_f64 && best_community != current_community {
            clustering.update_community_at(node, best_community);
            moved += 1;
        }
    }

    log!(
        "Local moving pass moved {} of {} nodes; {} links were intra-community at the start of the pass",
        moved,
        network.num_nodes(),
        community_degrees.total_internal_links()
    );
    return moved > 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> (Vec<Node>, Vec<Link>) {
        let nodes: Vec<Node> = ids.iter().map(|id| Node::new(id)).collect();
        let links: Vec<Link> = ids
            .windows(2)
            .map(|pair| Link::new(pair[0], pair[1]))
            .collect();
        return (nodes, links);
    }

    #[test]
    fn test_snapshot_sums_degrees_and_internal_links() {
        let (nodes, links) = path(&["a", "b", "c", "d"]);
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &links);
        let clustering: Clustering = Clustering::as_defined(vec![0, 0, 2, 2]);
        let snapshot: CommunityDegrees = CommunityDegrees::snapshot(&network, &clustering);
        assert_eq!(snapshot.degree_of(0), 3);
        assert_eq!(snapshot.degree_of(1), 0);
        assert_eq!(snapshot.degree_of(2), 3);
        assert_eq!(snapshot.degree_of(9), 0);
        assert_eq!(snapshot.total_internal_links(), 2);
    }

    #[test]
    fn test_pass_without_links_changes_nothing() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b")];
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &[]);
        let mut clustering: Clustering = Clustering::as_singletons(2);
        assert!(!local_moving_pass(&network, &mut clustering));
        assert_eq!(clustering, Clustering::as_singletons(2));
    }

    #[test]
    fn test_later_nodes_see_earlier_moves() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b"), Node::new("c")];
        let links: Vec<Link> = vec![
            Link::new("a", "b"),
            Link::new("b", "c"),
            Link::new("a", "c"),
        ];
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &links);
        let mut clustering: Clustering = Clustering::as_singletons(3);

        // a ties between b's and c's communities and takes the first seen, b's; b then already
        // sits with a; c finds both neighbors in community 1.
        assert!(local_moving_pass(&network, &mut clustering));
        assert_eq!(clustering, Clustering::as_defined(vec![1, 1, 1]));

        assert!(!local_moving_pass(&network, &mut clustering));
    }

    #[test]
    fn test_pass_uses_degree_snapshot_from_start_of_pass() {
        // every leaf is weighed against the singleton degree the hub's new community had when
        // the pass started, not against the degree it accumulates as leaves join
        let nodes: Vec<Node> = ["hub", "l1", "l2", "l3"]
            .iter()
            .map(|id| Node::new(id))
            .collect();
        let links: Vec<Link> = vec![
            Link::new("hub", "l1"),
            Link::new("hub", "l2"),
            Link::new("hub", "l3"),
        ];
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &links);
        let mut clustering: Clustering = Clustering::as_singletons(4);
        assert!(local_moving_pass(&network, &mut clustering));
        // hub joins l1 (first candidate); l1 stays; l2 and l3 follow the hub into community 1
        assert_eq!(clustering, Clustering::as_defined(vec![1, 1, 1, 1]));
    }
}
