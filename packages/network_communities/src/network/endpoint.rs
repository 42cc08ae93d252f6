// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One end of a link. Hand curated datasets refer to nodes by id, while links that have passed
/// through a layout engine or through community aggregation carry the node object itself; both
/// forms deserialize into an `Endpoint` and resolve to the same id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Id(String),
    Node { id: String },
}

impl Endpoint {
    /// The canonical node id this endpoint refers to, whichever form it was written in.
    pub fn id(&self) -> &str {
        return match self {
            Endpoint::Id(id) => id,
            Endpoint::Node { id } => id,
        };
    }

    pub fn node(id: &str) -> Endpoint {
        return Endpoint::Node { id: id.into() };
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        return Endpoint::Id(id.into());
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        return Endpoint::Id(id);
    }
}

impl fmt::Display for Endpoint {
    fn fmt(
        &self,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        return write!(formatter, "{}", self.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_forms_resolve_to_same_id() {
        let bare: Endpoint = serde_json::from_str("\"emory\"").unwrap();
        let object: Endpoint =
            serde_json::from_str("{\"id\": \"emory\", \"type\": \"university\", \"x\": 12.5}")
                .unwrap();
        assert_eq!(bare, Endpoint::Id("emory".into()));
        assert_eq!(object, Endpoint::node("emory"));
        assert_eq!(bare.id(), object.id());
    }

    #[test]
    fn test_node_endpoint_serializes_as_object() {
        let json: String = serde_json::to_string(&Endpoint::node("community_3")).unwrap();
        assert_eq!(json, "{\"id\":\"community_3\"}");
        let json: String = serde_json::to_string(&Endpoint::from("gatech")).unwrap();
        assert_eq!(json, "\"gatech\"");
    }
}
