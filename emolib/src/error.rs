//
// emolist - error module
//
// Copyright 2024 The emolist contributors
//
// This file is part of emolist.
//
// emolist is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emolist is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emolist. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! An error object for `emolib`.
//!
//! Every fallible operation in the crate returns [`Result`]. The [`ErrorKind`]
//! of an [`Error`] tells a caller which of the failure classes happened:
//!
//! - [`ErrorKind::Network`]: a source file could not be downloaded.
//! - [`ErrorKind::ValueError`]: a table line, XML document or collation rule
//!   could not be understood.
//! - [`ErrorKind::MissingAnnotation`]: an emoji has no CLDR annotation.
//! - [`ErrorKind::OSError`]: the cache or output could not be written.

use std::{borrow::Cow, io, result, sync::Arc};

pub mod network;

pub use network::NetworkErrorKind;

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorKind {
    #[default]
    None,
    Bug,
    Configuration,
    ValueError,
    NotFound,
    MissingAnnotation,
    Network(NetworkErrorKind),
    OSError(io::ErrorKind),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::None => write!(fmt, "None"),
            Self::Bug => write!(fmt, "Bug, please report this!"),
            Self::Configuration => write!(fmt, "Configuration"),
            Self::ValueError => write!(fmt, "Invalid value"),
            Self::NotFound => write!(fmt, "Not found"),
            Self::MissingAnnotation => write!(fmt, "Missing annotation"),
            Self::Network(inner) => write!(fmt, "Network: {}", inner.as_str()),
            Self::OSError(inner) => write!(fmt, "OS error: {}", inner),
        }
    }
}

impl ErrorKind {
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::ValueError)
    }

    pub const fn is_missing_annotation(&self) -> bool {
        matches!(self, Self::MissingAnnotation)
    }

    pub const fn is_oserror(&self) -> bool {
        matches!(self, Self::OSError(_))
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Cow<'static, str>,
    pub details: Option<Cow<'static, str>>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for std::result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: msg.into(),
            details: None,
            source: None,
            kind: ErrorKind::None,
        }
    }

    /// Replaces the summary, pushing the previous one into the details so no
    /// context is lost.
    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let previous = std::mem::replace(&mut self.summary, summary.into());
        self.details = Some(match self.details.take() {
            Some(details) => format!("{previous}\n{details}").into(),
            None => previous,
        });
        self
    }

    pub fn set_details<M>(mut self, details: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.details = Some(details.into());
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(details) = self.details.as_ref() {
            if !details.trim().is_empty() {
                write!(f, "\n{}", details)?;
            }
        }
        if let Some(source) = self.source.as_ref() {
            let source = source.to_string();
            if source != self.summary {
                write!(f, "\nCaused by: {}", source)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(err: io::Error) -> Self {
        let kind = err.kind();
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::OSError(kind))
    }
}

impl From<std::num::ParseIntError> for Error {
    #[inline]
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::ValueError)
    }
}

impl From<isahc::Error> for Error {
    #[inline]
    fn from(err: isahc::Error) -> Self {
        let kind: NetworkErrorKind = err.kind().into();
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Network(kind))
    }
}

impl From<isahc::http::Error> for Error {
    #[inline]
    fn from(err: isahc::http::Error) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Network(NetworkErrorKind::InvalidRequest))
    }
}

impl From<isahc::http::uri::InvalidUri> for Error {
    #[inline]
    fn from(err: isahc::http::uri::InvalidUri) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Configuration)
    }
}

impl From<zip::result::ZipError> for Error {
    #[inline]
    fn from(err: zip::result::ZipError) -> Self {
        let kind = match err {
            zip::result::ZipError::FileNotFound => ErrorKind::NotFound,
            zip::result::ZipError::Io(ref err) => ErrorKind::OSError(err.kind()),
            _ => ErrorKind::ValueError,
        };
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(kind)
    }
}

impl From<quick_xml::DeError> for Error {
    #[inline]
    fn from(err: quick_xml::DeError) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::ValueError)
    }
}

impl From<toml::de::Error> for Error {
    #[inline]
    fn from(err: toml::de::Error) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Configuration)
    }
}

impl From<toml::ser::Error> for Error {
    #[inline]
    fn from(err: toml::ser::Error) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Bug)
    }
}

impl From<xdg::BaseDirectoriesError> for Error {
    #[inline]
    fn from(err: xdg::BaseDirectoriesError) -> Self {
        Self::new(err.to_string())
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Configuration)
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(kind: &str) -> Self {
        Self::new(kind.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(kind: String) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_chain_summary_keeps_context() {
        let res: std::result::Result<(), &str> = Err("unexpected end of file");
        let err = res
            .chain_err_summary(|| "Could not read CLDR archive")
            .unwrap_err();
        assert_eq!(err.summary, "Could not read CLDR archive");
        assert_eq!(err.details.as_deref(), Some("unexpected end of file"));
        assert_eq!(
            err.to_string(),
            "Could not read CLDR archive\nunexpected end of file"
        );
    }

    #[test]
    fn test_error_kind_from_io() {
        let err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(
            err.kind,
            ErrorKind::OSError(io::ErrorKind::PermissionDenied)
        );
        assert!(err.kind.is_oserror());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_chain_kind() {
        let res: std::result::Result<(), String> = Err("bad line".to_string());
        let err = res.chain_err_kind(ErrorKind::ValueError).unwrap_err();
        assert!(err.kind.is_value_error());
        assert_eq!(err.to_string(), "bad line");
    }
}
