// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

/// Index of a node inside an `IndexedNetwork`.
pub type CompactNodeId = usize;
/// Identifier of a community. A run starts with every node in the community numbered after its
/// index in the input, so ids are stable but not contiguous once nodes merge.
pub type CommunityId = usize;

pub use self::endpoint::Endpoint;
pub use self::indexed_network::{IndexedNetwork, ResolvedLink};
pub use self::network::Network;
pub use self::networks::NetworkDetails;
pub use self::records::{Link, Node};

pub mod prelude;

mod dataset;
mod endpoint;
mod identifier;
mod indexed_network;
mod network;
mod networks;
mod records;
