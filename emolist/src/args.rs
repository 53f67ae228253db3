/*
 * emolist - args.rs
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

//! Command line arguments.

use std::{ffi::OsStr, path::PathBuf};

use emolib::LogLevel;
pub use structopt::StructOpt;

use crate::{subcommands, Config, Error, ErrorKind, Result};

fn try_path_or_stdio(input: &OsStr) -> PathOrStdio {
    if input == "-" {
        PathOrStdio::Stdio
    } else {
        PathOrStdio::Path(PathBuf::from(input))
    }
}

/// `Pathbuf` or standard stream (`-` operand).
#[derive(Debug, Eq, PartialEq)]
pub enum PathOrStdio {
    /// Path
    Path(PathBuf),
    /// standard stream (`-` operand)
    Stdio,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "emolist", about = "annotated emoji list generator")]
pub struct Opt {
    /// use specified configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// URL of the Unicode emoji property table.
    #[structopt(long, value_name = "URL")]
    pub emoji_data: Option<String>,

    /// URL of the Unicode emoji sequence table.
    #[structopt(long, value_name = "URL")]
    pub emoji_sequences: Option<String>,

    /// URL of the Unicode emoji ZWJ sequence table.
    #[structopt(long, value_name = "URL")]
    pub emoji_zwj_sequences: Option<String>,

    /// URL of the CLDR common data zip archive.
    #[structopt(long, value_name = "URL")]
    pub cldr: Option<String>,

    /// keep downloaded files in this directory and reuse them on later runs.
    #[structopt(long, value_name = "PATH", parse(from_os_str))]
    pub cache_dir: Option<PathBuf>,

    /// keep downloaded files in `$XDG_CACHE_HOME/emolist`.
    #[structopt(long)]
    pub xdg_cache: bool,

    /// write the list to this file. Path `-` writes to standard output.
    #[structopt(
        short,
        long,
        value_name = "PATH",
        default_value = "-",
        parse(from_os_str = try_path_or_stdio)
    )]
    pub output: PathOrStdio,

    /// print more diagnostics on standard error; repeat for more.
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    #[structopt(subcommand)]
    pub subcommand: Option<SubCommand>,
}

#[derive(Debug, Eq, PartialEq, StructOpt)]
pub enum SubCommand {
    /// generate the emoji list (default).
    #[structopt(display_order = 1)]
    Generate,
    /// print the effective configuration as TOML and exit.
    PrintConfig,
    /// print the directory downloaded files are kept in and exit.
    PrintCacheDir,
}

impl Opt {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::default().raised(self.verbose)
    }

    /// Built-in defaults, overridden by the configuration file, then by the
    /// environment, then by command line flags.
    pub fn config(&self) -> Result<Config> {
        let mut config = match self.config.as_deref() {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        }
        .with_env();
        for (flag, field) in [
            (&self.emoji_data, &mut config.emoji_data),
            (&self.emoji_sequences, &mut config.emoji_sequences),
            (&self.emoji_zwj_sequences, &mut config.emoji_zwj_sequences),
            (&self.cldr, &mut config.cldr),
        ] {
            if let Some(url) = flag {
                field.clone_from(url);
            }
        }
        match (self.cache_dir.as_ref(), self.xdg_cache) {
            (Some(_), true) => {
                return Err(
                    Error::new("--cache-dir and --xdg-cache cannot be used together")
                        .set_kind(ErrorKind::Configuration),
                );
            }
            (Some(dir), false) => config.cache_dir = Some(dir.clone()),
            (None, true) => config.cache_dir = Some(Config::xdg_cache_dir()?),
            (None, false) => {}
        }
        Ok(config)
    }

    /// Run `self.subcommand`, or [`SubCommand::Generate`] if there is none.
    pub fn execute(self, config: Config) -> Result<()> {
        match self.subcommand.unwrap_or(SubCommand::Generate) {
            SubCommand::Generate => subcommands::generate(&config, self.output),
            SubCommand::PrintConfig => subcommands::print_config(&config),
            SubCommand::PrintCacheDir => subcommands::print_cache_dir(&config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let opt = Opt::from_iter_safe(["emolist"]).unwrap();
        assert_eq!(opt.output, PathOrStdio::Stdio);
        assert_eq!(opt.subcommand, None);
        assert_eq!(opt.log_level(), LogLevel::WARN);
    }

    #[test]
    fn test_args_flags_override_config() {
        let opt = Opt::from_iter_safe([
            "emolist",
            "-vv",
            "--cldr",
            "https://example.com/cldr-common-45.0.zip",
            "--cache-dir",
            "/tmp/emolist-cache",
            "-o",
            "emoji.txt",
            "print-config",
        ])
        .unwrap();
        assert_eq!(opt.log_level(), LogLevel::DEBUG);
        assert_eq!(opt.output, PathOrStdio::Path(PathBuf::from("emoji.txt")));
        assert_eq!(opt.subcommand, Some(SubCommand::PrintConfig));
        let config = opt.config().unwrap();
        assert_eq!(config.cldr, "https://example.com/cldr-common-45.0.zip");
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/emolist-cache")));
        assert_eq!(config.emoji_data, emolib::conf::DEFAULT_EMOJI_DATA);
    }

    #[test]
    fn test_args_cache_dir_conflict() {
        let opt =
            Opt::from_iter_safe(["emolist", "--cache-dir", "/tmp/x", "--xdg-cache"]).unwrap();
        assert_eq!(opt.config().unwrap_err().kind, ErrorKind::Configuration);
    }
}
