// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::networks::NetworkDetails;
use super::records::{Link, Node};

/// A graph as the visualization and the datasets describe it: a list of node records and a list
/// of link records. Super-graphs produced by aggregation use the same shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Network {
    pub fn new(
        nodes: Vec<Node>,
        links: Vec<Link>,
    ) -> Network {
        return Network { nodes, links };
    }

    pub fn node(
        &self,
        id: &str,
    ) -> Option<&Node> {
        return self.nodes.iter().find(|node| node.id == id);
    }
}

impl NetworkDetails for Network {
    fn num_nodes(&self) -> usize {
        return self.nodes.len();
    }

    fn num_links(&self) -> usize {
        return self.links.len();
    }

    fn num_dangling_links(&self) -> usize {
        let known: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        return self
            .links
            .iter()
            .filter(|link| !known.contains(link.source_id()) || !known.contains(link.target_id()))
            .count();
    }
}
