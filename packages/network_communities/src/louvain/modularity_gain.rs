// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use super::local_moving::CommunityDegrees;
use crate::clustering::Clustering;
use crate::network::prelude::*;

/// The gain function used by the local moving passes.
#[allow(non_upper_case_globals)]
pub const calculate: fn(usize, usize, usize, usize) -> f64 = as_first_order_approximation;

/// `k_i_in / m - k_i * Σ_c / (2m²)`, where `k_i_in` counts the links between node i and
/// community c, `k_i` is the degree of node i and `Σ_c` the total degree of c.
///
/// Unlike the gain in the Louvain paper this does not take node i out of its current community
/// first: its own links and its own degree still count toward `k_i_in` and `Σ_c` when c is the
/// community it already belongs to. Partitions, tie breaks and iteration counts all follow from
/// this variant, so replacing it changes the results of every run.
pub fn as_first_order_approximation(
    links_to_community: usize,
    node_degree: usize,
    community_degree: usize,
    num_links: usize,
) -> f64 {
    if num_links == 0 {
        return 0_f64;
    }
    let m: f64 = num_links as f64;
    return links_to_community as f64 / m
        - (node_degree as f64 * community_degree as f64) / (2_f64 * m * m);
}

/// Gain of moving `node` into `community` against the current clustering, without moving it.
///
/// `k_i_in` is counted over the node's links: a link counts once when its other endpoint is
/// currently in `community`, and a self-loop counts once toward the node's own community.
pub fn modularity_gain(
    network: &IndexedNetwork,
    clustering: &Clustering,
    community_degrees: &CommunityDegrees,
    node: CompactNodeId,
    community: CommunityId,
) -> f64 {
    let links_to_community: usize = network
        .neighbors(node)
        .iter()
        .filter(|neighbor| clustering[**neighbor] == community)
        .count();
    return calculate(
        links_to_community,
        network.degree(node),
        community_degrees.degree_of(community),
        network.num_links(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_without_links_is_zero() {
        assert_eq!(as_first_order_approximation(0, 0, 0, 0), 0_f64);
    }

    #[test]
    fn test_gain_formula() {
        // m = 3, one link into a community of total degree 2, node degree 2
        let gain: f64 = as_first_order_approximation(1, 2, 2, 3);
        assert!((gain - (1_f64 / 3_f64 - 4_f64 / 18_f64)).abs() < 1e-12);
        // a community the node has no links to only ever loses
        assert!(as_first_order_approximation(0, 2, 2, 3) < 0_f64);
    }

    #[test]
    fn test_gain_counts_links_in_either_direction() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b"), Node::new("c")];
        let links: Vec<Link> = vec![
            Link::new("a", "b"),
            Link::new("c", "a"),
            Link::new("b", "c"),
        ];
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &links);
        let clustering: Clustering = Clustering::as_defined(vec![0, 1, 1]);
        let community_degrees: CommunityDegrees = CommunityDegrees::snapshot(&network, &clustering);

        // k_a_in = 2 (a-b written forward, c-a written backward), k_a = 2, Σ_1 = 4, m = 3
        let expected: f64 = 2_f64 / 3_f64 - 8_f64 / 18_f64;
        let gain: f64 = modularity_gain(&network, &clustering, &community_degrees, 0, 1);
        assert!((gain - expected).abs() < 1e-12);
    }

    #[test]
    fn test_gain_ignores_dangling_links() {
        let nodes: Vec<Node> = vec![Node::new("a"), Node::new("b")];
        let links: Vec<Link> = vec![Link::new("a", "b"), Link::new("a", "ghost")];
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &links);
        let clustering: Clustering = Clustering::as_singletons(2);
        let community_degrees: CommunityDegrees = CommunityDegrees::snapshot(&network, &clustering);

        // k_a_in = 1, k_a = 2, Σ_1 = 1, m = 2
        let expected: f64 = 1_f64 / 2_f64 - 2_f64 / 8_f64;
        let gain: f64 = modularity_gain(&network, &clustering, &community_degrees, 0, 1);
        assert!((gain - expected).abs() < 1e-12);
    }
}
