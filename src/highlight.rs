use std::cmp::Reverse;

use regex::{Regex, RegexBuilder};

use crate::markup::Segment;

/// Spellings of the page owner's name as they show up in scholarly metadata.
pub const DEFAULT_VARIANTS: &[&str] = &[
    "Damaris Benny Daniel",
    "Damaris Benny",
    "Damaris Daniel",
    "D. Benny",
    "D Benny",
    "DB Daniel",
    "D B Daniel",
    "D. B. Daniel",
];

#[cfg(test)]
pub static DEFAULT_MATCHER: once_cell::sync::Lazy<NameMatcher> = once_cell::sync::Lazy::new(|| {
    NameMatcher::new(DEFAULT_VARIANTS).expect("escaped literals always compile")
});

/// Finds the page owner's name inside free-form author strings.
#[derive(Clone, Debug)]
pub struct NameMatcher {
    pattern: Option<Regex>,
}

impl NameMatcher {
    /// Build a matcher from name variants, treated as case-insensitive literals.
    ///
    /// Variants are tried longest first, so `"D. Benny"` wins over `"Benny"` wherever both could
    /// match at the same position. Blank variants are ignored; with none left the matcher never
    /// highlights anything.
    pub fn new<I, S>(variants: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut variants: Vec<String> = variants
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        if variants.is_empty() {
            return Ok(NameMatcher { pattern: None });
        }

        // Alternation is leftmost-first, so order decides which variant wins.
        variants.sort_by_key(|v| Reverse(v.chars().count()));

        let alternation = variants
            .iter()
            .map(|v| regex::escape(v))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;

        Ok(NameMatcher {
            pattern: Some(pattern),
        })
    }

    /// Partition `authors` into plain and highlighted runs.
    ///
    /// Highlighted runs carry the author string's own casing. Joining every segment's text gives
    /// back `authors` unchanged.
    pub fn highlight<'a>(&self, authors: &'a str) -> Vec<Segment<'a>> {
        if authors.is_empty() {
            return Vec::new();
        }
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(authors)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(authors) {
            if m.start() > last {
                segments.push(Segment::plain(&authors[last..m.start()]));
            }
            segments.push(Segment::strong(m.as_str()));
            last = m.end();
        }
        if last < authors.len() {
            segments.push(Segment::plain(&authors[last..]));
        }

        segments
    }
}
