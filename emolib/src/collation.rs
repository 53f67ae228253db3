/*
 * emolib - CLDR emoji collation
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

//! Emoji ordering derived from the `emoji` tailoring of the CLDR root
//! collation (`common/collation/root.xml`).
//!
//! The tailoring is an ICU rule string. Only the subset of the syntax that the
//! emoji tailoring uses is understood:
//!
//! - `# ...` comments and `& ...` resets are skipped,
//! - `<* abc` lists characters that each sort after the previous one,
//! - `< x << y = z` lists strings in order; the strength of the relation is
//!   not considered, every string simply gets the next rank.

use std::collections::HashMap;

use crate::{
    emoji::strip_presentation_selector,
    error::{Error, ErrorKind, Result, ResultIntoError},
};

/// Position of an emoji in the collation order.
pub type Rank = i64;

/// Rank of emoji for which no prefix is known. Sorts before every known rank.
pub const UNKNOWN_RANK: Rank = -1;

/// `type` attribute of the tailoring in `root.xml`.
pub const EMOJI_COLLATION: &str = "emoji";

mod de {
    #[derive(Debug, Default, Deserialize)]
    pub struct Ldml {
        #[serde(default)]
        pub collations: Collations,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Collations {
        #[serde(default, rename = "collation")]
        pub list: Vec<Collation>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Collation {
        #[serde(default, rename = "@type")]
        pub r#type: String,
        #[serde(default)]
        pub cr: String,
    }
}

/// Map from unqualified emoji strings to their [`Rank`].
#[derive(Clone, Debug, Default)]
pub struct CollationTable {
    ranks: HashMap<String, Rank>,
}

impl CollationTable {
    /// Build the table from the `emoji` tailoring of a CLDR root collation
    /// document.
    pub fn from_root_xml(xml: &str) -> Result<Self> {
        let ldml: de::Ldml = quick_xml::de::from_str(xml)
            .chain_err_summary(|| "could not parse CLDR collation data")?;
        let rules = ldml
            .collations
            .list
            .into_iter()
            .find(|c| c.r#type == EMOJI_COLLATION)
            .map(|c| c.cr)
            .filter(|cr| !cr.is_empty())
            .ok_or_else(|| {
                Error::new("no emoji collation found in CLDR collation data")
                    .set_kind(ErrorKind::ValueError)
            })?;
        Self::from_rules(&rules)
    }

    /// Build the table from a tailoring rule string.
    pub fn from_rules(rules: &str) -> Result<Self> {
        let mut ranks = HashMap::default();
        let mut count: Rank = 1;
        let mut assign = |key: &str| {
            let key = strip_presentation_selector(key);
            if !key.is_empty() {
                ranks.insert(key.into_owned(), count);
            }
            count += 1;
        };
        for line in rules.lines() {
            if line.trim().is_empty() || line.starts_with('#') || line.starts_with('&') {
                continue;
            }
            if let Some(chars) = line.strip_prefix("<*") {
                let mut buf = [0; 4];
                for c in chars.chars() {
                    assign(c.encode_utf8(&mut buf));
                }
            } else if let Some(tokens) = line.strip_prefix('<') {
                for token in tokens
                    .split(|c| matches!(c, ' ' | '<' | '=' | '\''))
                    .filter(|t| !t.is_empty())
                {
                    assign(token);
                }
            } else {
                return Err(Error::new(format!("unexpected line format {:?}", line))
                    .set_kind(ErrorKind::ValueError));
            }
        }
        log::trace!("collation table has {} keys", ranks.len());
        Ok(Self { ranks })
    }

    /// Exact lookup of an unqualified key.
    pub fn get(&self, key: &str) -> Option<Rank> {
        self.ranks.get(key).copied()
    }

    /// Rank of the longest prefix of `emoji`, counted in codepoints, that has
    /// an entry in the table. Presentation selectors are ignored.
    pub fn order(&self, emoji: &str) -> Rank {
        let mut prefix = emoji;
        while !prefix.is_empty() {
            if let Some(rank) = self.get(&strip_presentation_selector(prefix)) {
                return rank;
            }
            let last = prefix.chars().next_back().map_or(0, char::len_utf8);
            prefix = &prefix[..prefix.len() - last];
        }
        UNKNOWN_RANK
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &str = "
# START AUTOGENERATED EMOJI ORDER
& [last primary ignorable]<<*\u{1F3FB}\u{1F3FC}\u{1F3FD}\u{1F3FE}\u{1F3FF}
& [before 1]\u{FDD1}\u{20AC}
<\u{1F600}
<\u{1F603}
<*\u{1F44D}\u{1F44E}\u{1F44F}
<\u{2764}\u{FE0F}
<\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F468} = \u{1F491}
<<\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}<'x'
";

    #[test]
    fn test_collation_ranks_in_file_order() {
        let table = CollationTable::from_rules(RULES).unwrap();
        assert_eq!(table.get("\u{1F600}"), Some(1));
        assert_eq!(table.get("\u{1F603}"), Some(2));
        assert_eq!(table.get("\u{1F44D}"), Some(3));
        assert_eq!(table.get("\u{1F44E}"), Some(4));
        assert_eq!(table.get("\u{1F44F}"), Some(5));
        assert_eq!(table.get("\u{2764}"), Some(6));
        assert_eq!(table.get("\u{1F469}\u{200D}\u{2764}\u{200D}\u{1F468}"), Some(7));
        assert_eq!(table.get("\u{1F491}"), Some(8));
        assert_eq!(table.get("\u{1F3F3}\u{200D}\u{1F308}"), Some(9));
        assert_eq!(table.get("x"), Some(10));
        assert_eq!(table.len(), 10);
        // Reset lines assign nothing.
        assert_eq!(table.get("\u{1F3FB}"), None);
        assert_eq!(table.get("\u{20AC}"), None);
    }

    #[test]
    fn test_collation_star_line_is_consecutive() {
        let table = CollationTable::from_rules("<a\n<b\n<*xyz\n<c").unwrap();
        let n = table.get("x").unwrap();
        assert_eq!(n, 3);
        assert_eq!(table.get("y"), Some(n + 1));
        assert_eq!(table.get("z"), Some(n + 2));
        assert_eq!(table.get("c"), Some(n + 3));
    }

    #[test]
    fn test_collation_order_prefix() {
        let table = CollationTable::from_rules(RULES).unwrap();
        assert_eq!(table.order("\u{1F600}"), 1);
        // Fully qualified form of an unqualified key.
        assert_eq!(table.order("\u{2764}\u{FE0F}"), 6);
        // Unknown sequence falls back to its first codepoint.
        assert_eq!(table.order("\u{1F44D}\u{1F3FD}"), 3);
        assert_eq!(table.order("\u{2764}\u{FE0F}\u{200D}\u{1F525}"), 6);
        assert_eq!(table.order("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"), 9);
        assert_eq!(table.order("\u{1F642}"), UNKNOWN_RANK);
        assert_eq!(table.order(""), UNKNOWN_RANK);
    }

    #[test]
    fn test_collation_unexpected_line() {
        let err = CollationTable::from_rules("<a\nb\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
        assert!(err.to_string().contains("unexpected line format"));
    }

    #[test]
    fn test_collation_from_root_xml() {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
	<identity>
		<version number="$Revision$"/>
		<language type="root"/>
	</identity>
	<collations>
		<defaultCollation>standard</defaultCollation>
		<collation type="emoji">
			<cr><![CDATA[{rules}]]></cr>
		</collation>
		<collation type="standard">
			<cr><![CDATA[
&a<b
]]></cr>
		</collation>
	</collations>
</ldml>
"#,
            rules = RULES
        );
        let table = CollationTable::from_root_xml(&xml).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table.order("\u{1F44F}"), 5);
    }

    #[test]
    fn test_collation_missing_emoji_tailoring() {
        let xml = r#"<ldml><collations><collation type="standard"><cr><![CDATA[
&a<b
]]></cr></collation></collations></ldml>"#;
        let err = CollationTable::from_root_xml(xml).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
        assert!(err.to_string().contains("no emoji collation"));
    }
}
