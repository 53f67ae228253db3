/*
 * emolib - pipeline module
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

//! Generation of the annotated emoji list.
//!
//! The list has one line per emoji:
//!
//! ```text
//! 👍 thumbs up +1 hand
//! ```
//!
//! that is the emoji, a space, and its [rendered](Annotation::render)
//! annotation. Lines are written as soon as they are produced; if an emoji
//! turns out to have no annotation, the lines before it have already been
//! written when the error is returned.

use std::io::{BufReader, Write};

use crate::{
    annotations::{Annotation, Annotations},
    cldr::CldrArchive,
    collation::CollationTable,
    conf::Config,
    emoji::Emoji,
    error::{Error, ErrorKind, Result, ResultIntoError},
    fetch::Fetcher,
    tables,
};

/// Sort by collation rank, then by codepoints.
pub fn sort_emojis(emojis: &mut [Emoji], collation: &CollationTable) {
    emojis.sort_by_cached_key(|e| (collation.order(e.as_str()), e.clone()));
}

/// Look up the annotation of `emoji` by its unqualified form.
pub fn annotation_of<'a>(emoji: &Emoji, annotations: &'a Annotations) -> Result<&'a Annotation> {
    annotations.get(&emoji.unqualified()).ok_or_else(|| {
        Error::new(format!("emoji {} has no annotation", emoji.quoted()))
            .set_details(format!("codepoints {}", emoji.codepoints()))
            .set_kind(ErrorKind::MissingAnnotation)
    })
}

/// Write one line per emoji, in the given order. Returns the number of lines
/// written.
pub fn write_list<W: Write>(
    emojis: &[Emoji],
    annotations: &Annotations,
    out: &mut W,
) -> Result<usize> {
    for emoji in emojis {
        let annotation = annotation_of(emoji, annotations)?;
        writeln!(out, "{} {}", emoji, annotation.render())
            .chain_err_summary(|| "could not write emoji list")?;
    }
    out.flush()
        .chain_err_summary(|| "could not write emoji list")?;
    Ok(emojis.len())
}

/// Download (or reuse) the Unicode tables and build the emoji set.
pub fn emoji_set(fetcher: &Fetcher, config: &Config) -> Result<Vec<Emoji>> {
    let modifiers = tables::modifiers(BufReader::new(fetcher.fetch(&config.emoji_data)?))
        .chain_err_summary(|| format!("invalid emoji data {}", config.emoji_data))?;
    let mut ret = tables::emojis_in(
        BufReader::new(fetcher.fetch(&config.emoji_sequences)?),
        &modifiers,
    )
    .chain_err_summary(|| format!("invalid emoji sequences {}", config.emoji_sequences))?;
    let zwj = tables::emojis_in(
        BufReader::new(fetcher.fetch(&config.emoji_zwj_sequences)?),
        &modifiers,
    )
    .chain_err_summary(|| {
        format!(
            "invalid emoji ZWJ sequences {}",
            config.emoji_zwj_sequences
        )
    })?;
    log::debug!(
        "{} emoji sequences, {} ZWJ sequences",
        ret.len(),
        zwj.len()
    );
    ret.extend(zwj);
    Ok(ret)
}

/// Run the whole pipeline and write the list to `out`. Returns the number of
/// lines written.
pub fn generate<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let fetcher = Fetcher::new(config.cache_dir.as_deref())?;
    let mut emojis = emoji_set(&fetcher, config)?;

    let mut cldr = CldrArchive::new(BufReader::new(fetcher.fetch(&config.cldr)?))?;
    let annotations = cldr.annotations()?;
    let collation = cldr.collation()?;
    drop(cldr);

    log::debug!("sorting {} emoji", emojis.len());
    sort_emojis(&mut emojis, &collation);
    let n = write_list(&emojis, &annotations, out)?;
    log::info!("wrote {} emoji", n);
    Ok(n)
}
