/*
 * emolib - emoji module
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

//! A single emoji, i.e. a sequence of one or more Unicode scalar values.

use std::{borrow::Cow, fmt};

/// `U+FE0F VARIATION SELECTOR-16`, which requests emoji presentation for the
/// preceding character.
pub const PRESENTATION_SELECTOR: char = '\u{FE0F}';

/// Remove every [`PRESENTATION_SELECTOR`] from `s`.
///
/// CLDR stores all annotation and collation keys without it, so fully
/// qualified and unqualified forms of an emoji resolve to the same key.
pub fn strip_presentation_selector(s: &str) -> Cow<'_, str> {
    if s.contains(PRESENTATION_SELECTOR) {
        Cow::Owned(s.chars().filter(|c| *c != PRESENTATION_SELECTOR).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Identity is the exact codepoint sequence, variation selectors included.
/// Ordering is lexical by codepoint, which for UTF-8 is the byte order.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Emoji(String);

impl Emoji {
    pub fn from_codepoints<I: IntoIterator<Item = char>>(codepoints: I) -> Self {
        Self(codepoints.into_iter().collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lookup key of this emoji in CLDR data.
    #[inline]
    pub fn unqualified(&self) -> Cow<'_, str> {
        strip_presentation_selector(&self.0)
    }

    /// Space separated uppercase hexadecimal codepoints, in the notation of
    /// the Unicode data tables.
    pub fn codepoints(&self) -> String {
        self.0
            .chars()
            .map(|c| format!("{:04X}", c as u32))
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Double quoted form for diagnostics. Invisible format characters, such
    /// as `U+200D ZERO WIDTH JOINER` or the tag characters of subdivision
    /// flags, are escaped as `\u200d` or `\U000e0067`.
    pub fn quoted(&self) -> String {
        use std::fmt::Write;

        let mut ret = String::with_capacity(self.0.len() + 2);
        ret.push('"');
        for c in self.0.chars() {
            match c {
                '"' | '\\' => {
                    ret.push('\\');
                    ret.push(c);
                }
                c if is_invisible(c) && (c as u32) <= 0xFFFF => {
                    _ = write!(ret, "\\u{:04x}", c as u32);
                }
                c if is_invisible(c) => {
                    _ = write!(ret, "\\U{:08x}", c as u32);
                }
                c => ret.push(c),
            }
        }
        ret.push('"');
        ret
    }
}

fn is_invisible(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{00AD}'
                | '\u{200B}'..='\u{200F}'
                | '\u{2028}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{FEFF}'
                | '\u{E0001}'
                | '\u{E0020}'..='\u{E007F}'
        )
}

impl fmt::Display for Emoji {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

impl From<char> for Emoji {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl From<&str> for Emoji {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Emoji {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Emoji {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Emoji {
    fn borrow(&self) -> &str {
        &self.0
    }
}
