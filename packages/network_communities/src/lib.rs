// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod aggregation;
pub mod analysis;
pub mod clustering;
pub mod errors;
pub mod louvain;
pub mod macros;
pub mod network;
pub mod quality;
pub mod random_vector;
