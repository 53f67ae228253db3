/*
 * emolist - subcommands.rs
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

//! Command line client subcommands.

use std::io::{BufWriter, Write};

use emolib::{error::ResultIntoError, pipeline};

use crate::{args::PathOrStdio, Config, Result};

pub fn generate(config: &Config, output: PathOrStdio) -> Result<()> {
    let n = match output {
        PathOrStdio::Stdio => {
            let stdout = std::io::stdout();
            let mut stdout = stdout.lock();
            pipeline::generate(config, &mut stdout)?
        }
        PathOrStdio::Path(path) => {
            let file = std::fs::File::create(&path)
                .chain_err_summary(|| format!("could not create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let n = pipeline::generate(config, &mut writer)?;
            writer
                .flush()
                .chain_err_summary(|| format!("could not write {}", path.display()))?;
            log::info!("wrote {}", path.display());
            n
        }
    };
    log::debug!("{} lines", n);
    Ok(())
}

pub fn print_config(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

pub fn print_cache_dir(config: &Config) -> Result<()> {
    match config.cache_dir.as_ref() {
        Some(dir) => println!("{}", dir.display()),
        None => println!(
            "none, a temporary directory in {} is used and removed afterwards",
            std::env::temp_dir().display()
        ),
    }
    Ok(())
}
