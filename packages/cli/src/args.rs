// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::convert::TryFrom;
use std::fmt;

pub const DATASET: &str = "DATASET";
pub const OUTPUT: &str = "OUTPUT_PATH";
pub const FORMAT: &str = "format";
pub const SEPARATOR: &str = "separator";
pub const SOURCE_INDEX: &str = "source_index";
pub const TARGET_INDEX: &str = "target_index";
pub const HAS_HEADER: &str = "has_header";
pub const ITERATIONS: &str = "iterations";
pub const LEVELS: &str = "levels";
pub const SEED: &str = "seed";
pub const BRIDGES: &str = "bridges";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DatasetFormat {
    Json,
    Edges,
}

pub struct CliArgs {
    pub dataset: String,
    pub output_path: String,
    pub format: DatasetFormat,
    pub separator: String,
    pub source_index: usize,
    pub target_index: usize,
    pub skip_first_line: bool,
    pub max_iterations: usize,
    pub max_levels: usize,
    pub seed: Option<u64>,
    pub bridges: bool,
}

pub fn command() -> Command {
    return Command::new("communities_cli")
        .version("0.1.0")
        .about("Runs louvain community detection over an ecosystem dataset and outputs the communities")
        .arg(
            Arg::new(DATASET)
                .help("The dataset file, either a JSON export with nodes and links or an edge list")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(OUTPUT)
                .help("The output for the communities detected")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new(FORMAT)
                .long("format")
                .action(ArgAction::Set)
                .help("Whether the dataset is a JSON export or a delimited edge list")
                .value_parser(["json", "edges"])
                .default_value("json"),
        )
        .arg(
            Arg::new(SEPARATOR)
                .short('s')
                .help("The character to split the edge list on")
                .action(ArgAction::Set)
                .default_value(","),
        )
        .arg(
            Arg::new(SOURCE_INDEX)
                .long("source_index")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("0-based index of source column from edge file")
                .default_value("0"),
        )
        .arg(
            Arg::new(TARGET_INDEX)
                .long("target_index")
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("0-based index of target column from edge file")
                .default_value("1"),
        )
        .arg(
            Arg::new(HAS_HEADER)
                .long("has_header")
                .action(ArgAction::SetTrue)
                .help("Flag must be added if the edge file contains a header line"),
        )
        .arg(
            Arg::new(ITERATIONS)
                .short('i')
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("Maximum number of local moving passes per level")
                .default_value("100"),
        )
        .arg(
            Arg::new(LEVELS)
                .short('l')
                .action(ArgAction::Set)
                .value_parser(value_parser!(usize))
                .help("Number of levels to detect, aggregating each level's communities into the next")
                .default_value("1"),
        )
        .arg(
            Arg::new(SEED)
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64))
                .help("A seed value for shuffling the node order before detection"),
        )
        .arg(
            Arg::new(BRIDGES)
                .long("bridges")
                .action(ArgAction::SetTrue)
                .help("Print the links running between each pair of communities"),
        );
}

impl TryFrom<ArgMatches> for CliArgs {
    type Error = ParseCliError;

    fn try_from(matches: ArgMatches) -> Result<Self, Self::Error> {
        let dataset: &String = matches
            .get_one(DATASET)
            .ok_or(ParseCliError::RequiredValueError)?;
        let output: &String = matches
            .get_one(OUTPUT)
            .ok_or(ParseCliError::RequiredValueError)?;
        let format: DatasetFormat = match matches.get_one::<String>(FORMAT).map(|v| v.as_str()) {
            Some("json") => Ok(DatasetFormat::Json),
            Some("edges") => Ok(DatasetFormat::Edges),
            Some(_) => Err(ParseCliError::InvalidFormatError),
            None => Err(ParseCliError::RequiredValueError),
        }?;
        let separator: &String = matches
            .get_one(SEPARATOR)
            .ok_or(ParseCliError::RequiredValueError)?;
        let source_index: usize = *matches
            .get_one(SOURCE_INDEX)
            .ok_or(ParseCliError::RequiredValueError)?;
        let target_index: usize = *matches
            .get_one(TARGET_INDEX)
            .ok_or(ParseCliError::RequiredValueError)?;
        let max_iterations: usize = *matches
            .get_one(ITERATIONS)
            .ok_or(ParseCliError::RequiredValueError)?;
        let max_levels: usize = *matches
            .get_one(LEVELS)
            .ok_or(ParseCliError::RequiredValueError)?;
        if max_levels == 0 {
            return Err(ParseCliError::NoLevelsError);
        }
        let seed: Option<u64> = matches.get_one(SEED).cloned();
        let cli_args: CliArgs = CliArgs {
            dataset: dataset.clone(),
            output_path: output.clone(),
            format,
            separator: separator.clone(),
            source_index,
            target_index,
            skip_first_line: matches.get_flag(HAS_HEADER),
            max_iterations,
            max_levels,
            seed,
            bridges: matches.get_flag(BRIDGES),
        };
        return Ok(cli_args);
    }
}

#[derive(Debug, PartialEq)]
pub enum ParseCliError {
    RequiredValueError,
    InvalidFormatError,
    NoLevelsError,
}

impl fmt::Display for ParseCliError {
    fn fmt(
        &self,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        return match self {
            ParseCliError::RequiredValueError => write!(formatter, "a required value is missing"),
            ParseCliError::InvalidFormatError => {
                write!(formatter, "format must be either json or edges")
            }
            ParseCliError::NoLevelsError => write!(formatter, "at least one level is required"),
        };
    }
}
