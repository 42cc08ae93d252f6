// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::convert::From;
use std::fmt;
use std::io;

/// Failures while loading a network dataset from disk. The detection algorithms themselves never
/// fail; they degrade to empty or zero results instead.
#[derive(Debug)]
pub enum NetworkError {
    EdgeFileFormatError,
    EmptyEdgeFileError,
    IoError(io::Error),
    JsonFormatError(serde_json::Error),
}

impl From<io::Error> for NetworkError {
    fn from(err: io::Error) -> NetworkError {
        NetworkError::IoError(err)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> NetworkError {
        NetworkError::JsonFormatError(err)
    }
}

impl fmt::Display for NetworkError {
    fn fmt(
        &self,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        return match self {
            NetworkError::EdgeFileFormatError => {
                write!(formatter, "edge list line has too few columns")
            }
            NetworkError::EmptyEdgeFileError => write!(formatter, "edge list contains no edges"),
            NetworkError::IoError(err) => write!(formatter, "unable to read dataset: {}", err),
            NetworkError::JsonFormatError(err) => {
                write!(formatter, "dataset is not valid network JSON: {}", err)
            }
        };
    }
}

impl std::error::Error for NetworkError {}
