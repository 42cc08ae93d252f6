// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub use self::local_moving::{local_moving_pass, CommunityDegrees};
pub use self::louvain::{detect_communities, CommunityDetection, DEFAULT_MAX_ITERATIONS};
pub use self::modularity_gain::modularity_gain;
pub use self::multi_level::{
    detect_communities_multi_level, detect_levels, CommunityLevel, DEFAULT_MAX_LEVELS,
};

mod local_moving;
mod louvain;
mod modularity_gain;
mod multi_level;
mod neighboring_communities;
