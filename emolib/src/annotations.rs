/*
 * emolib - CLDR annotations
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

//! Names and keywords of emoji from CLDR annotation files
//! (`common/annotations/<locale>.xml` and
//! `common/annotationsDerived/<locale>.xml`).
//!
//! ```xml
//! <annotation cp="👍">+1 | hand | thumb | thumbs up | up</annotation>
//! <annotation cp="👍" type="tts">thumbs up</annotation>
//! ```
//!
//! CLDR removes every `U+FE0F` from `cp` values, so lookups must use
//! [`Emoji::unqualified`](crate::Emoji::unqualified) keys.

use std::{collections::HashMap, io::Read};

use crate::error::{Result, ResultIntoError};

/// `type` attribute value of the annotation that holds the emoji name.
pub const TTS: &str = "tts";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Annotation {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Annotation {
    /// Keywords that are not already part of the name.
    ///
    /// The check is a plain substring test: keyword `"up"` is dropped for name
    /// `"thumbs up"`, and so is `"thumb"`.
    pub fn extra_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(move |k| !self.name.contains(k))
    }

    /// The annotation field of an output line: the name followed by the
    /// remaining keywords, separated by spaces.
    pub fn render(&self) -> String {
        let mut ret = self.name.clone();
        for keyword in self.extra_keywords() {
            ret.push(' ');
            ret.push_str(keyword);
        }
        ret
    }
}

mod de {
    #[derive(Debug, Default, Deserialize)]
    pub struct Ldml {
        #[serde(default)]
        pub annotations: Annotations,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Annotations {
        #[serde(default, rename = "annotation")]
        pub list: Vec<Annotation>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Annotation {
        #[serde(rename = "@cp")]
        pub cp: String,
        #[serde(default, rename = "@type")]
        pub r#type: Option<String>,
        #[serde(default, rename = "$text")]
        pub text: String,
    }
}

/// Annotations keyed by the raw CLDR `cp` attribute.
#[derive(Clone, Debug, Default)]
pub struct Annotations {
    entries: HashMap<String, Annotation>,
}

impl Annotations {
    pub fn from_xml(xml: &str) -> Result<Self> {
        let ldml: de::Ldml = quick_xml::de::from_str(xml)
            .chain_err_summary(|| "could not parse CLDR annotations")?;
        let mut entries: HashMap<String, Annotation> = HashMap::default();
        for de::Annotation { cp, r#type, text } in ldml.annotations.list {
            let entry = entries.entry(cp).or_default();
            if r#type.as_deref() == Some(TTS) {
                entry.name = text;
            } else {
                entry.keywords = text
                    .split('|')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect();
            }
        }
        log::trace!("parsed {} annotation entries", entries.len());
        Ok(Self { entries })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut xml = String::new();
        reader
            .read_to_string(&mut xml)
            .chain_err_summary(|| "could not read CLDR annotations")?;
        Self::from_xml(&xml)
    }

    /// Insert all entries of `other`, replacing existing entries with the same
    /// key.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&Annotation> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
