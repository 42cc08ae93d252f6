// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::fs::File;
use std::io::{BufReader, Read};

use super::identifier::Identifier;
use super::network::Network;
use super::records::{Link, Node};
use crate::errors::NetworkError;
#[allow(unused_imports)]
use crate::log;

impl Network {
    /// Loads a dataset exported as a JSON object with `nodes` and `links` arrays. Link endpoints
    /// may be node ids or node objects. Fields the detection does not use are ignored.
    pub fn load_from(path: &str) -> Result<Network, NetworkError> {
        let contents: String = read_contents(path)?;
        let network: Network = Network::from_json(&contents)?;
        log!(
            "Loaded {} nodes and {} links from {}",
            network.nodes.len(),
            network.links.len(),
            path
        );
        return Ok(network);
    }

    pub fn from_json(contents: &str) -> Result<Network, NetworkError> {
        let network: Network = serde_json::from_str(contents)?;
        return Ok(network);
    }

    /// Loads a delimited edge list. Nodes are created in order of first appearance and carry no
    /// size; every line becomes one link, so repeated lines become parallel links.
    pub fn load_edge_list(
        path: &str,
        separator: &str,
        source_index: usize,
        target_index: usize,
        skip_first_line: bool,
    ) -> Result<Network, NetworkError> {
        let contents: String = read_contents(path)?;
        return Network::from_edge_list(
            &contents,
            separator,
            source_index,
            target_index,
            skip_first_line,
        );
    }

    pub fn from_edge_list(
        contents: &str,
        separator: &str,
        source_index: usize,
        target_index: usize,
        skip_first_line: bool,
    ) -> Result<Network, NetworkError> {
        let minimum_required_length: usize = source_index.max(target_index) + 1;
        let mut identifier: Identifier<String> = Identifier::new();
        let mut links: Vec<Link> = Vec::new();

        for (line_number, line) in contents.lines().enumerate() {
            if line.trim().is_empty() || (skip_first_line && line_number == 0) {
                continue;
            }
            let splits: Vec<&str> = line.split(separator).collect();
            if splits.len() < minimum_required_length {
                return Err(NetworkError::EdgeFileFormatError);
            }
            let source: &str = splits[source_index].trim();
            let target: &str = splits[target_index].trim();
            identifier.identify(source.into());
            identifier.identify(target.into());
            links.push(Link::new(source, target));
        }

        if links.is_empty() {
            return Err(NetworkError::EmptyEdgeFileError);
        }

        let (_, ordered_ids) = identifier.finish();
        let nodes: Vec<Node> = ordered_ids.iter().map(|id| Node::new(id)).collect();
        log!(
            "Parsed an edge list into {} nodes and {} links",
            nodes.len(),
            links.len()
        );
        return Ok(Network::new(nodes, links));
    }
}

fn read_contents(path: &str) -> Result<String, NetworkError> {
    let mut reader: BufReader<File> = BufReader::new(File::open(path)?);
    let mut contents: String = String::new();
    reader.read_to_string(&mut contents)?;
    return Ok(contents);
}
