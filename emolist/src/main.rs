/*
 * emolist - main.rs
 *
 * Copyright 2024 The emolist contributors
 *
 * This file is part of emolist.
 *
 * emolist is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * emolist is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with emolist. If not, see <http://www.gnu.org/licenses/>.
 */

//! Command line client binary.
//!
//! The list itself is built by the `emolib` crate; this binary only reads
//! the configuration, sets up logging and writes the output.

use emolib::StderrLogger;
use emolist::{args::*, Result};

fn main() {
    let opt = Opt::from_args();
    ::std::process::exit(match run_app(opt) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run_app(opt: Opt) -> Result<()> {
    let logger = StderrLogger::new(opt.log_level());
    let config = opt.config()?;
    if let Some(path) = config.log_file.as_deref() {
        logger.change_log_dest(path)?;
    }
    log::debug!("log destination is {:?}", logger.destination());
    opt.execute(config)
}
