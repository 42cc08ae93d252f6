// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;
use super::CommunityId;

/// An organization in the ecosystem network, or a super-node standing in for a whole community
/// once a partition has been aggregated.
///
/// Only `id` and `size` take part in community detection. The remaining fields are carried so a
/// dataset survives a load and save unchanged, and so super-nodes can be traced back to the
/// nodes they were built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The member nodes of a super-node, in the order they appeared in the aggregated graph.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Node>,
    /// The community a super-node was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityId>,
}

impl Node {
    pub fn new(id: &str) -> Node {
        return Node {
            id: id.into(),
            size: None,
            name: None,
            kind: None,
            members: Vec::new(),
            community: None,
        };
    }

    pub fn with_size(
        id: &str,
        size: f64,
    ) -> Node {
        let mut node: Node = Node::new(id);
        node.size = Some(size);
        return node;
    }

    pub fn kind(
        mut self,
        kind: &str,
    ) -> Node {
        self.kind = Some(kind.into());
        return self;
    }

    pub fn is_super_node(&self) -> bool {
        return self.community.is_some();
    }
}

/// A relationship between two organizations. Links are undirected for community detection and
/// every link counts once, regardless of `weight`; `weight` records how many original links a
/// super-link stands for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Link {
    pub fn new(
        source: &str,
        target: &str,
    ) -> Link {
        return Link {
            source: Endpoint::from(source),
            target: Endpoint::from(target),
            kind: None,
            weight: None,
        };
    }

    pub fn kind(
        mut self,
        kind: &str,
    ) -> Link {
        self.kind = Some(kind.into());
        return self;
    }

    pub fn source_id(&self) -> &str {
        return self.source.id();
    }

    pub fn target_id(&self) -> &str {
        return self.target.id();
    }
}
