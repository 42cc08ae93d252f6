// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    use network_communities::aggregation::aggregate_communities;
    use network_communities::louvain::*;
    use network_communities::network::prelude::*;
    use network_communities::quality::modularity;

    fn network_of(
        ids: &[&str],
        edges: &[(&str, &str)],
    ) -> (Vec<Node>, Vec<Link>) {
        let nodes: Vec<Node> = ids.iter().map(|id| Node::new(id)).collect();
        let links: Vec<Link> = edges
            .iter()
            .map(|(source, target)| Link::new(source, target))
            .collect();
        return (nodes, links);
    }

    /// A simple random graph: no self-loops, no parallel links, and a few links to a node that
    /// does not exist.
    fn random_network(rng: &mut XorShiftRng) -> (Vec<Node>, Vec<Link>) {
        let num_nodes: usize = rng.gen_range(2..22);
        let num_links: usize = rng.gen_range(0..40);
        let nodes: Vec<Node> = (0..num_nodes)
            .map(|index| Node::with_size(&format!("n{}", index), rng.gen_range(1..30) as f64))
            .collect();
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut links: Vec<Link> = Vec::new();
        for _ in 0..num_links {
            let source: usize = rng.gen_range(0..num_nodes);
            if rng.gen_bool(0.05) {
                links.push(Link::new(&format!("n{}", source), "ghost"));
                continue;
            }
            let target: usize = rng.gen_range(0..num_nodes);
            if source != target && seen.insert((source.min(target), source.max(target))) {
                links.push(Link::new(&format!("n{}", source), &format!("n{}", target)));
            }
        }
        return (nodes, links);
    }

    fn demo_network() -> Network {
        return Network::load_from("tests/biotech_demo.json")
            .expect("The demo dataset should load as a network");
    }

    #[test]
    fn test_no_links_leaves_singletons() {
        let (nodes, links) = network_of(&["a", "b"], &[]);
        let detection: CommunityDetection = detect_communities(&nodes, &links, None);
        assert_eq!(detection.modularity, 0_f64);
        assert_eq!(detection.iterations, 0);
        assert_eq!(detection.num_communities(), 2);
        assert_eq!(detection.community_info[&0].nodes, vec!["a".to_string()]);
        assert_eq!(detection.community_info[&1].nodes, vec!["b".to_string()]);
    }

    #[test]
    fn test_triangle_converges_to_one_community() {
        let (nodes, links) = network_of(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("a", "c")]);
        let detection: CommunityDetection = detect_communities(&nodes, &links, None);
        assert_eq!(detection.num_communities(), 1);
        let info: &network_communities::clustering::CommunityInfo =
            detection.community_info.values().next().unwrap();
        assert_eq!(info.size, 3);
        assert_eq!(info.nodes, vec!["a", "b", "c"]);
        assert!(detection.modularity > 0_f64);
        assert!((detection.modularity - 1_f64 / 6_f64).abs() < 1e-12);
        assert_eq!(detection.iterations, 2);
    }

    #[test]
    fn test_dangling_link_is_tolerated() {
        let (nodes, links) = network_of(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "c"), ("a", "c"), ("a", "ghost")],
        );
        let network: IndexedNetwork = IndexedNetwork::new(&nodes, &links);
        assert_eq!(network.degree(0), 3);
        assert_eq!(network.degree(1), 2);
        assert_eq!(network.degree(2), 2);

        let detection: CommunityDetection = detect_communities(&nodes, &links, None);
        assert_eq!(detection.communities.len(), 3);
        assert!(!detection.communities.contains_key("ghost"));
        assert_eq!(detection.num_communities(), 1);
        // the dangling link still counts toward m
        assert!((detection.modularity - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_bridged_triangles_split_at_the_bridge() {
        let (nodes, links) = network_of(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("a", "c"),
                ("d", "e"),
                ("e", "f"),
                ("d", "f"),
                ("c", "d"),
            ],
        );
        let detection: CommunityDetection = detect_communities(&nodes, &links, None);
        assert_eq!(detection.num_communities(), 2);
        assert_eq!(detection.communities["a"], detection.communities["c"]);
        assert_eq!(detection.communities["d"], detection.communities["f"]);
        assert_ne!(detection.communities["c"], detection.communities["d"]);
        assert!((detection.modularity - 0.2653061224489796).abs() < 1e-12);
        assert_eq!(detection.iterations, 2);
    }

    #[test]
    fn test_demo_network_finds_clusters() {
        let network: Network = demo_network();
        let detection: CommunityDetection =
            detect_communities(&network.nodes, &network.links, None);
        assert!(detection.num_communities() >= 2);
        assert!(detection.modularity > 0_f64);

        assert_eq!(detection.num_communities(), 5);
        assert!((detection.modularity - 0.29306377383300464).abs() < 1e-12);
        // the greedy passes keep swapping a few nodes back and forth on this network
        assert_eq!(detection.iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(detection.communities["emory"], 19);
        assert_eq!(detection.communities["emoryHealthcare"], 19);
        assert_eq!(detection.communities["gatech"], 3);
        assert_eq!(detection.communities["atdc"], 3);
        assert_eq!(detection.community_info[&7].nodes, vec!["clearside"]);
    }

    #[test]
    fn test_demo_network_multi_level() {
        let network: Network = demo_network();
        let levels: Vec<CommunityLevel> =
            detect_communities_multi_level(&network.nodes, &network.links, Some(3));
        assert_eq!(levels.len(), 3);

        assert_eq!(levels[0].num_communities(), 5);
        assert_eq!(levels[0].nodes, network.nodes);

        let level_one: &CommunityLevel = &levels[1];
        let super_ids: Vec<&str> = level_one.nodes.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(
            super_ids,
            vec!["community_19", "community_3", "community_10", "community_20", "community_7"]
        );
        assert_eq!(level_one.nodes[0].size, Some(16.875));
        assert_eq!(level_one.nodes[0].members.len(), 8);
        let weights: Vec<(&str, &str, f64)> = level_one
            .links
            .iter()
            .map(|link| (link.source_id(), link.target_id(), link.weight.unwrap_or(0_f64)))
            .collect();
        assert_eq!(
            weights,
            vec![
                ("community_19", "community_20", 1_f64),
                ("community_3", "community_10", 3_f64),
                ("community_10", "community_20", 1_f64),
                ("community_19", "community_10", 2_f64),
                ("community_19", "community_3", 4_f64),
            ]
        );
        assert_eq!(level_one.num_communities(), 2);
        assert_eq!(level_one.iterations, 2);
        assert!((level_one.modularity - 0.17).abs() < 1e-12);

        let level_two: &CommunityLevel = &levels[2];
        assert_eq!(level_two.nodes.len(), 2);
        assert!(level_two.links.is_empty());
        assert_eq!(level_two.iterations, 0);
        assert_eq!(level_two.modularity, 0_f64);
    }

    #[test]
    fn test_cliques_merge_on_the_second_level() {
        let (nodes, links) = network_of(
            &["a", "b", "c", "d", "e", "f", "g", "h"],
            &[
                ("a", "b"),
                ("a", "c"),
                ("a", "d"),
                ("b", "c"),
                ("b", "d"),
                ("c", "d"),
                ("e", "f"),
                ("e", "g"),
                ("e", "h"),
                ("f", "g"),
                ("f", "h"),
                ("g", "h"),
                ("d", "e"),
            ],
        );
        let levels: Vec<CommunityLevel> = detect_communities_multi_level(&nodes, &links, None);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].num_communities(), 2);
        assert!((levels[0].modularity - 0.27514792899408286).abs() < 1e-12);
        assert_eq!(levels[1].nodes.len(), 2);
        assert_eq!(levels[1].links.len(), 1);
        assert_eq!(levels[1].links[0].weight, Some(1_f64));
        assert_eq!(levels[1].num_communities(), 1);
        assert!((levels[1].modularity - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let network: Network = demo_network();
        let first: CommunityDetection = detect_communities(&network.nodes, &network.links, None);
        let second: CommunityDetection =
            detect_communities(&network.nodes, &network.links, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_networks_keep_invariants() {
        let mut rng: XorShiftRng = XorShiftRng::seed_from_u64(1234);
        for _ in 0..200 {
            let (nodes, links) = random_network(&mut rng);
            let detection: CommunityDetection = detect_communities(&nodes, &links, None);

            assert_eq!(detection, detect_communities(&nodes, &links, None));
            assert!(detection.modularity > -1_f64 && detection.modularity <= 1_f64);
            assert!(detection.num_communities() <= nodes.len());
            assert!(detection.iterations <= DEFAULT_MAX_ITERATIONS);
            assert_eq!(detection.communities.len(), nodes.len());
            let assigned: usize = detection.community_info.values().map(|info| info.size).sum();
            assert_eq!(assigned, nodes.len());
            for (id, community) in &detection.communities {
                assert!(detection.community_info[community].nodes.contains(id));
            }
            assert!(
                (modularity(&nodes, &links, &detection.communities) - detection.modularity).abs()
                    < 1e-12
            );
        }
    }

    #[test]
    fn test_singleton_partition_is_not_positive() {
        let mut rng: XorShiftRng = XorShiftRng::seed_from_u64(99);
        for _ in 0..100 {
            let (nodes, links) = random_network(&mut rng);
            let singletons: BTreeMap<String, CommunityId> = nodes
                .iter()
                .enumerate()
                .map(|(index, node)| (node.id.clone(), index))
                .collect();
            assert!(modularity(&nodes, &links, &singletons) <= 0_f64);
        }
    }

    #[test]
    fn test_aggregation_preserves_communities_and_crossing_links() {
        let mut rng: XorShiftRng = XorShiftRng::seed_from_u64(2024);
        for _ in 0..200 {
            let (nodes, links) = random_network(&mut rng);
            let detection: CommunityDetection = detect_communities(&nodes, &links, None);
            let aggregated: Network = aggregate_communities(&nodes, &links, &detection.communities);
            assert_eq!(aggregated.nodes.len(), detection.num_communities());

            let crossing: usize = links
                .iter()
                .filter(|link| {
                    match (
                        detection.communities.get(link.source_id()),
                        detection.communities.get(link.target_id()),
                    ) {
                        (Some(source), Some(target)) => source != target,
                        _ => false,
                    }
                })
                .count();
            let total_weight: f64 = aggregated
                .links
                .iter()
                .map(|link| link.weight.unwrap_or(0_f64))
                .sum();
            assert_eq!(total_weight, crossing as f64);

            let levels: Vec<CommunityLevel> =
                detect_communities_multi_level(&nodes, &links, Some(2));
            if detection.num_communities() > 1 {
                assert_eq!(levels.len(), 2);
                assert_eq!(levels[1].nodes.len(), detection.num_communities());
            } else {
                assert_eq!(levels.len(), 1);
            }
        }
    }
}
