/*
 * emolib - lib.rs
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

#![deny(
    rustdoc::redundant_explicit_links,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]
#![allow(clippy::option_if_let_else, clippy::missing_const_for_fn)]

//! A library for building annotated emoji lists from Unicode and CLDR data.
//!
//! The sources are the emoji tables of the Unicode Standard
//! ([`tables`]) and the CLDR `common` data archive ([`cldr`]), from which
//! English names and keywords ([`annotations`]) and the emoji sort order
//! ([`collation`]) are read. [`pipeline::generate`] ties them together:
//!
//! ```no_run
//! # fn main() -> emolib::Result<()> {
//! let config = emolib::Config::default();
//! let mut stdout = std::io::stdout().lock();
//! emolib::pipeline::generate(&config, &mut stdout)?;
//! # Ok(())
//! # }
//! ```
//!
//! Downloads go through [`fetch::Fetcher`], which keeps a copy of every
//! source file in a cache directory and never downloads a file twice.

#[macro_use]
extern crate serde_derive;
pub extern crate log;

pub mod annotations;
pub mod cldr;
pub mod collation;
pub mod conf;
pub mod emoji;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod tables;
pub mod utils;

pub use annotations::{Annotation, Annotations};
pub use collation::CollationTable;
pub use conf::Config;
pub use emoji::Emoji;
pub use error::{Error, ErrorKind, Result};
pub use utils::logging::{LogLevel, StderrLogger};
