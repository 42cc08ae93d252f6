// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use network_communities::analysis::{community_bridges, CommunityBridge};
use network_communities::errors::NetworkError;
use network_communities::log;
use network_communities::louvain::{detect_levels, CommunityDetection, CommunityLevel};
use network_communities::network::prelude::*;
use network_communities::random_vector::{permute, random_permutation};

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::time::Instant;

use crate::args::{CliArgs, DatasetFormat};

pub fn communities(cli_args: &CliArgs) -> Result<(), NetworkError> {
    let start_instant: Instant = Instant::now();
    let mut network: Network = match cli_args.format {
        DatasetFormat::Json => Network::load_from(&cli_args.dataset)?,
        DatasetFormat::Edges => Network::load_edge_list(
            &cli_args.dataset,
            &cli_args.separator,
            cli_args.source_index,
            cli_args.target_index,
            cli_args.skip_first_line,
        )?,
    };
    println!(
        "Loaded {} nodes and {} links ({} dangling)",
        network.num_nodes(),
        network.num_links(),
        network.num_dangling_links()
    );

    if let Some(seed) = cli_args.seed {
        println!("Using {} for PRNG seed", seed);
        let mut rng: XorShiftRng = XorShiftRng::seed_from_u64(seed);
        let permutation: Vec<usize> = random_permutation(network.nodes.len(), &mut rng);
        network.nodes = permute(&network.nodes, &permutation);
        log!("Shuffled the order of {} nodes", network.nodes.len());
    }

    let loaded_file_instant: Instant = Instant::now();

    let levels: Vec<CommunityLevel> = detect_levels(
        &network.nodes,
        &network.links,
        Some(cli_args.max_levels),
        Some(cli_args.max_iterations),
    );

    let detection_completion_instant: Instant = Instant::now();
    for level in &levels {
        print_level(level, cli_args.max_iterations);
    }

    if let Some(first_level) = levels.first() {
        if cli_args.bridges {
            let detection: CommunityDetection = first_level.to_detection();
            for bridge in community_bridges(&network.links, &detection) {
                print_bridge(&bridge);
            }
        }

        println!("Output to {}", cli_args.output_path);
        let mut output_file: BufWriter<File> = BufWriter::new(File::create(&cli_args.output_path)?);
        if cli_args.output_path.ends_with(".json") {
            serde_json::to_writer_pretty(&mut output_file, &levels)?;
        } else {
            for node in &network.nodes {
                if let Some(community) = first_level.communities.get(&node.id) {
                    write!(output_file, "{},{}\n", node.id, community)?;
                }
            }
        }
        output_file.flush()?;
        log!("Wrote {} community assignments", first_level.communities.len());
    }

    let file_writer_instant: Instant = Instant::now();
    println!(
        "Time to load file: {:?}",
        loaded_file_instant.duration_since(start_instant)
    );
    println!(
        "Time to detect communities: {:?}",
        detection_completion_instant.duration_since(loaded_file_instant)
    );
    println!(
        "Time to output: {:?}",
        file_writer_instant.duration_since(detection_completion_instant)
    );
    println!(
        "Total time: {:?}",
        file_writer_instant.duration_since(start_instant)
    );
    return Ok(());
}

fn print_level(
    level: &CommunityLevel,
    max_iterations: usize,
) {
    println!("Level {}:", level.level);
    println!("  Communities: {}", level.num_communities());
    println!("  Modularity: {:.4}", level.modularity);
    if level.iterations >= max_iterations {
        println!(
            "  Iterations: {} (stopped at the iteration cap before converging)",
            level.iterations
        );
    } else {
        println!("  Iterations: {}", level.iterations);
    }
    for info in level.community_info.values() {
        println!("  Community {} ({} nodes): {}", info.id, info.size, info.nodes.join(", "));
    }
}

fn print_bridge(bridge: &CommunityBridge) {
    let (first, second) = bridge.communities;
    println!("Communities {} <-> {}:", first, second);
    for link in &bridge.links {
        match &link.kind {
            Some(kind) => println!("  {} <-> {} ({})", link.source_id(), link.target_id(), kind),
            None => println!("  {} <-> {}", link.source_id(), link.target_id()),
        }
    }
}
