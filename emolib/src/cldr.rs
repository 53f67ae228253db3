/*
 * emolib - CLDR archive
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

//! Access to the files of a CLDR `common` zip archive.

use std::io::{Read, Seek};

use zip::ZipArchive;

use crate::{
    annotations::Annotations,
    collation::CollationTable,
    error::{Result, ResultIntoError},
};

pub const ANNOTATIONS_PATH: &str = "common/annotations/en.xml";
pub const ANNOTATIONS_DERIVED_PATH: &str = "common/annotationsDerived/en.xml";
pub const ROOT_COLLATION_PATH: &str = "common/collation/root.xml";

pub struct CldrArchive<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> std::fmt::Debug for CldrArchive<R> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct(stringify!(CldrArchive))
            .field("len", &self.archive.len())
            .finish()
    }
}

impl<R: Read + Seek> CldrArchive<R> {
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).chain_err_summary(|| "could not read CLDR data")?;
        Ok(Self { archive })
    }

    /// Read a UTF-8 file of the archive.
    pub fn read_to_string(&mut self, name: &str) -> Result<String> {
        let mut file = self
            .archive
            .by_name(name)
            .chain_err_summary(|| format!("could not read CLDR data {}", name))?;
        let mut ret = String::new();
        file.read_to_string(&mut ret)
            .chain_err_summary(|| format!("could not read CLDR data {}", name))?;
        Ok(ret)
    }

    /// English annotations, with the derived annotations merged over the
    /// primary ones.
    pub fn annotations(&mut self) -> Result<Annotations> {
        let mut ret = Annotations::from_xml(&self.read_to_string(ANNOTATIONS_PATH)?)
            .chain_err_summary(|| format!("invalid CLDR data {}", ANNOTATIONS_PATH))?;
        let derived = Annotations::from_xml(&self.read_to_string(ANNOTATIONS_DERIVED_PATH)?)
            .chain_err_summary(|| format!("invalid CLDR data {}", ANNOTATIONS_DERIVED_PATH))?;
        log::debug!(
            "{} annotations, {} derived annotations",
            ret.len(),
            derived.len()
        );
        ret.merge(derived);
        Ok(ret)
    }

    pub fn collation(&mut self) -> Result<CollationTable> {
        let ret = CollationTable::from_root_xml(&self.read_to_string(ROOT_COLLATION_PATH)?)
            .chain_err_summary(|| format!("invalid CLDR data {}", ROOT_COLLATION_PATH))?;
        log::debug!("{} emoji collation keys", ret.len());
        Ok(ret)
    }
}
