// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::convert::TryFrom;

mod args;
mod communities;

use crate::args::*;

fn main() {
    let matches = command().get_matches();

    match CliArgs::try_from(matches) {
        Ok(cli_args) => {
            if let Err(err) = communities::communities(&cli_args) {
                println!("An error occurred when detecting communities: {}", err);
            }
        }
        Err(err) => println!("{}", err),
    }
}
