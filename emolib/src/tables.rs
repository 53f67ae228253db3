/*
 * emolib - Unicode emoji data tables
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

//! Parsing of the semicolon delimited emoji tables published with the Unicode
//! Standard (`emoji-data.txt`, `emoji-sequences.txt`,
//! `emoji-zwj-sequences.txt`).
//!
//! Every non-comment line has the form
//!
//! ```text
//! 1F3FB..1F3FF  ; Emoji_Modifier   # 8.0  [5] (🏻..🏿)
//! 1F44D 1F3FB   ; RGI_Emoji_Modifier_Sequence ; thumbs up: light skin tone
//! ```

use std::{collections::HashSet, io::BufRead};

use crate::{
    emoji::Emoji,
    error::{Error, ErrorKind, Result, ResultIntoError},
};

/// Tag of the property that marks skin tone modifiers in `emoji-data.txt`.
pub const EMOJI_MODIFIER: &str = "Emoji_Modifier";

/// One parsed row of an emoji table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableLine {
    pub emojis: Vec<Emoji>,
    pub tag: String,
}

fn parse_codepoint(hex: &str, line: &str) -> Result<char> {
    let value = u32::from_str_radix(hex.trim(), 16)
        .chain_err_summary(|| format!("failed to parse line {:?}", line))
        .chain_err_kind(ErrorKind::ValueError)?;
    char::from_u32(value).ok_or_else(|| {
        Error::new(format!("failed to parse line {:?}", line))
            .set_details(format!("{:X} is not a Unicode scalar value", value))
            .set_kind(ErrorKind::ValueError)
    })
}

/// Parse one line of an emoji table.
///
/// Returns `Ok(None)` for lines that are empty once comments are removed.
pub fn parse_line(line: &str) -> Result<Option<TableLine>> {
    let content = line.split('#').next().unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(None);
    }
    let mut fields = content.splitn(3, ';');
    let (codepoints, tag) = match (fields.next(), fields.next()) {
        (Some(codepoints), Some(tag)) => (codepoints.trim(), tag.trim()),
        _ => {
            return Err(Error::new(format!("failed to parse line {:?}", line))
                .set_details("expected at least two `;` separated fields")
                .set_kind(ErrorKind::ValueError));
        }
    };
    let emojis = if let Some((start, end)) = codepoints.split_once("..") {
        let start = parse_codepoint(start, line)?;
        let end = parse_codepoint(end, line)?;
        (start..=end).map(Emoji::from).collect()
    } else {
        vec![Emoji::from_codepoints(
            codepoints
                .split_whitespace()
                .map(|cp| parse_codepoint(cp, line))
                .collect::<Result<Vec<char>>>()?,
        )]
    };
    Ok(Some(TableLine {
        emojis,
        tag: tag.to_string(),
    }))
}

/// Iterate over the parsed, non-blank lines of a table.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<TableLine>> {
    reader.lines().filter_map(|line| match line {
        Err(err) => Some(Err(Error::from(err).set_summary("could not read emoji table"))),
        Ok(line) => parse_line(&line).transpose(),
    })
}

/// Collect every emoji tagged [`EMOJI_MODIFIER`] in the property table.
pub fn modifiers<R: BufRead>(reader: R) -> Result<HashSet<Emoji>> {
    let mut ret = HashSet::default();
    for line in lines(reader) {
        let line = line?;
        if line.tag == EMOJI_MODIFIER {
            ret.extend(line.emojis);
        }
    }
    log::debug!("found {} emoji modifiers", ret.len());
    Ok(ret)
}

/// Every emoji listed in a sequence table, except standalone modifiers.
pub fn emojis_in<R: BufRead>(reader: R, modifiers: &HashSet<Emoji>) -> Result<Vec<Emoji>> {
    let mut ret = vec![];
    for line in lines(reader) {
        ret.extend(
            line?
                .emojis
                .into_iter()
                .filter(|emoji| !modifiers.contains(emoji)),
        );
    }
    Ok(ret)
}

/// Sequence emojis followed by ZWJ sequence emojis, without standalone
/// modifiers.
pub fn build_emoji_set<D, S, Z>(data: D, sequences: S, zwj_sequences: Z) -> Result<Vec<Emoji>>
where
    D: BufRead,
    S: BufRead,
    Z: BufRead,
{
    let modifiers = modifiers(data)?;
    let mut ret = emojis_in(sequences, &modifiers)?;
    let zwj = emojis_in(zwj_sequences, &modifiers)?;
    log::debug!(
        "found {} emoji sequences and {} ZWJ sequences",
        ret.len(),
        zwj.len()
    );
    ret.extend(zwj);
    Ok(ret)
}
