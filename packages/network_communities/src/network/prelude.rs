pub use super::{
    CommunityId, CompactNodeId, Endpoint, IndexedNetwork, Link, Network, NetworkDetails, Node,
};
