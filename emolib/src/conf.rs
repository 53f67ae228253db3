/*
 * emolib - configuration module.
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

//! Location of the source files and of the download cache.
//!
//! A configuration file is TOML; every key is optional:
//!
//! ```toml
//! emoji_data = "https://www.unicode.org/Public/16.0.0/ucd/emoji/emoji-data.txt"
//! emoji_sequences = "https://www.unicode.org/Public/emoji/16.0/emoji-sequences.txt"
//! emoji_zwj_sequences = "https://www.unicode.org/Public/emoji/16.0/emoji-zwj-sequences.txt"
//! cldr = "https://unicode.org/Public/cldr/46/cldr-common-46.0.zip"
//! cache_dir = "~/.cache/emolist"
//! ```

use std::path::{Path, PathBuf};

use crate::error::{ErrorKind, Result, ResultIntoError};

pub const DEFAULT_EMOJI_DATA: &str =
    "https://www.unicode.org/Public/16.0.0/ucd/emoji/emoji-data.txt";
pub const DEFAULT_EMOJI_SEQUENCES: &str =
    "https://www.unicode.org/Public/emoji/16.0/emoji-sequences.txt";
pub const DEFAULT_EMOJI_ZWJ_SEQUENCES: &str =
    "https://www.unicode.org/Public/emoji/16.0/emoji-zwj-sequences.txt";
pub const DEFAULT_CLDR: &str = "https://unicode.org/Public/cldr/46/cldr-common-46.0.zip";

/// Environment variable that overrides [`Config::cache_dir`].
pub const CACHE_DIR_ENV: &str = "EMOLIST_CACHE_DIR";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL of the emoji property table (`emoji-data.txt`).
    pub emoji_data: String,
    /// URL of the emoji sequence table (`emoji-sequences.txt`).
    pub emoji_sequences: String,
    /// URL of the emoji ZWJ sequence table (`emoji-zwj-sequences.txt`).
    pub emoji_zwj_sequences: String,
    /// URL of the CLDR `common` data archive.
    pub cldr: String,
    /// Directory for downloaded files. A temporary directory is used when
    /// unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
    /// Append log output to this file instead of standard error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emoji_data: DEFAULT_EMOJI_DATA.to_string(),
            emoji_sequences: DEFAULT_EMOJI_SEQUENCES.to_string(),
            emoji_zwj_sequences: DEFAULT_EMOJI_ZWJ_SEQUENCES.to_string(),
            cldr: DEFAULT_CLDR.to_string(),
            cache_dir: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("could not read configuration file {}", path.display()))
            .chain_err_kind(ErrorKind::Configuration)?;
        Self::from_toml_str(&s).chain_err_summary(|| {
            format!("could not parse configuration file {}", path.display())
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Apply [`CACHE_DIR_ENV`] if it is set and not empty.
    pub fn with_env(mut self) -> Self {
        if let Some(dir) = std::env::var_os(CACHE_DIR_ENV).filter(|d| !d.is_empty()) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// `$XDG_CACHE_HOME/emolist`, created if it does not exist.
    pub fn xdg_cache_dir() -> Result<PathBuf> {
        let dirs = xdg::BaseDirectories::with_prefix("emolist")?;
        let dir = dirs
            .create_cache_directory("")
            .chain_err_summary(|| "could not create XDG cache directory")?;
        // Drop the trailing separator left by joining an empty path.
        Ok(dir.components().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conf_defaults_from_empty_file() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_conf_partial_file() {
        let conf = Config::from_toml_str(
            r#"
cldr = "https://unicode.org/Public/cldr/45/cldr-common-45.0.zip"
cache_dir = "/var/cache/emolist"
"#,
        )
        .unwrap();
        assert_eq!(
            conf.cldr,
            "https://unicode.org/Public/cldr/45/cldr-common-45.0.zip"
        );
        assert_eq!(conf.cache_dir, Some(PathBuf::from("/var/cache/emolist")));
        assert_eq!(conf.emoji_data, DEFAULT_EMOJI_DATA);
    }

    #[test]
    fn test_conf_unknown_key() {
        let err = Config::from_toml_str("cache = true").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_conf_toml_roundtrip() {
        let conf = Config {
            cache_dir: Some(PathBuf::from("/tmp/emolist")),
            ..Config::default()
        };
        let s = conf.to_toml_string().unwrap();
        assert!(s.contains("emoji_zwj_sequences = "));
        assert_eq!(Config::from_toml_str(&s).unwrap(), conf);
    }

    #[test]
    fn test_conf_from_missing_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&tempdir.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
