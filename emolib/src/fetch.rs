/*
 * emolib - fetch module
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

//! Download source files through an on-disk cache.
//!
//! Cache entries are named after the last path segment of their URL. An entry
//! that exists is used as is; it is never revalidated against the server.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use isahc::{
    config::{Configurable, RedirectPolicy},
    http::Uri,
    HttpClient, ReadResponseExt,
};
use tempfile::TempDir;

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

/// The file name a URL is cached under.
pub fn url_basename(url: &str) -> Result<String> {
    let uri: Uri = url
        .parse()
        .chain_err_summary(|| format!("invalid URL {:?}", url))?;
    match uri.path().rsplit('/').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name.to_string()),
        _ => Err(
            Error::new(format!("URL {:?} does not name a file", url))
                .set_kind(ErrorKind::Configuration),
        ),
    }
}

#[derive(Debug)]
pub struct Fetcher {
    client: HttpClient,
    cache_dir: PathBuf,
    /// Removed along with its contents when the fetcher is dropped.
    temp_dir: Option<TempDir>,
}

impl Fetcher {
    /// Use `cache_dir`, creating it if needed, or a temporary directory that
    /// lives as long as the returned value.
    pub fn new(cache_dir: Option<&Path>) -> Result<Self> {
        let client = HttpClient::builder()
            .redirect_policy(RedirectPolicy::Follow)
            .build()?;
        let (cache_dir, temp_dir) = if let Some(dir) = cache_dir {
            std::fs::create_dir_all(dir).chain_err_summary(|| {
                format!("could not create cache directory {}", dir.display())
            })?;
            (dir.to_path_buf(), None)
        } else {
            let temp_dir = tempfile::Builder::new()
                .prefix("emolist")
                .tempdir()
                .chain_err_summary(|| "could not create temporary directory")?;
            (temp_dir.path().to_path_buf(), Some(temp_dir))
        };
        log::debug!("cache directory is {}", cache_dir.display());
        Ok(Self {
            client,
            cache_dir,
            temp_dir,
        })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Whether the cache directory is removed when `self` is dropped.
    pub fn is_temporary(&self) -> bool {
        self.temp_dir.is_some()
    }

    /// Path of the cache entry for `url`.
    pub fn cache_path(&self, url: &str) -> Result<PathBuf> {
        Ok(self.cache_dir.join(url_basename(url)?))
    }

    /// Open the cached copy of `url`, downloading it first if there is none.
    pub fn fetch(&self, url: &str) -> Result<File> {
        let path = self.cache_path(url)?;
        let cached = path
            .try_exists()
            .chain_err_summary(|| format!("could not access {}", path.display()))?;
        if cached {
            log::debug!("using cached {}", path.display());
        } else {
            self.download(url, &path)?;
        }
        File::open(&path).chain_err_summary(|| format!("could not open {}", path.display()))
    }

    fn download(&self, url: &str, path: &Path) -> Result<()> {
        log::info!("downloading {}", url);
        let mut response = self
            .client
            .get(url)
            .chain_err_summary(|| format!("get {:?}", url))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::new(format!("get {:?}: {}", url, status))
                .set_kind(ErrorKind::Network(status.into())));
        }
        // A partially written entry must never be mistaken for a complete
        // one, so write next to it and rename. The temporary file is removed
        // on every error path when it is dropped.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.cache_dir).chain_err_summary(|| {
            format!("could not create file in {}", self.cache_dir.display())
        })?;
        let bytes = response
            .copy_to(&mut tmp)
            .chain_err_summary(|| format!("could not download {:?}", url))?;
        tmp.flush()
            .chain_err_summary(|| format!("could not write {}", path.display()))?;
        tmp.persist(path)
            .map_err(|err| Error::from(err.error))
            .chain_err_summary(|| format!("could not write {}", path.display()))?;
        log::debug!("wrote {} bytes to {}", bytes, path.display());
        Ok(())
    }
}
