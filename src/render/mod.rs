use crate::{
    fetcher::LoadState, highlight::NameMatcher, markup::Segment, publication::PublicationRecord,
};

pub mod html;
pub mod terminal;

pub const LOADING_MESSAGE: &str = "Loading publications...";
/// Shown both for an empty list and for a failed load.
pub const EMPTY_MESSAGE: &str = "No publications found or error loading data.";

/// What the publications section shows for a given [`LoadState`].
#[derive(Debug, PartialEq, Eq)]
pub enum Section<'a> {
    Loading,
    Empty,
    Units(Vec<Unit<'a>>),
}

/// One rendered publication.
#[derive(Debug, PartialEq, Eq)]
pub struct Unit<'a> {
    pub title: &'a str,
    pub link: Option<&'a str>,
    pub author: Vec<Segment<'a>>,
    pub year: Option<&'a str>,
    pub venue: Option<&'a str>,
}

impl<'a> Section<'a> {
    pub fn new(state: &'a LoadState, matcher: &NameMatcher) -> Self {
        match state {
            LoadState::Loading => Section::Loading,
            _ if state.records().is_empty() => Section::Empty,
            _ => Section::Units(
                state
                    .records()
                    .iter()
                    .map(|r| Unit::new(r, matcher))
                    .collect(),
            ),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    /// Units to list; empty unless the load produced records.
    pub fn units(&self) -> &[Unit<'a>] {
        match self {
            Section::Units(units) => units,
            Section::Loading | Section::Empty => &[],
        }
    }
}

impl<'a> Unit<'a> {
    pub fn new(record: &'a PublicationRecord, matcher: &NameMatcher) -> Self {
        Unit {
            title: &record.title,
            link: record.link.as_deref(),
            author: matcher.highlight(record.author.as_deref().unwrap_or_default()),
            year: record.publication_year.as_deref(),
            venue: record.publication_place.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fetcher::FetchError, highlight::DEFAULT_MATCHER};

    fn record(title: &str) -> PublicationRecord {
        PublicationRecord {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn loading_state_is_loading_section() {
        let state = LoadState::Loading;
        let section = Section::new(&state, &DEFAULT_MATCHER);
        assert!(section.is_loading());
        assert!(section.units().is_empty());
    }

    #[test]
    fn empty_and_failed_look_the_same() {
        let empty = LoadState::Loaded(Vec::new());
        let failed = LoadState::Failed(FetchError::Status {
            url: "https://example.org/publications.json".into(),
            status: 404,
        });
        assert_eq!(Section::new(&empty, &DEFAULT_MATCHER), Section::Empty);
        assert_eq!(Section::new(&failed, &DEFAULT_MATCHER), Section::Empty);
    }

    #[test]
    fn units_follow_record_order() {
        let state = LoadState::Loaded(vec![record("C"), record("A"), record("B")]);
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let titles: Vec<_> = section.units().iter().map(|u| u.title).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn unit_highlights_author_and_keeps_optional_fields() {
        let rec = PublicationRecord {
            title: "Plastics in Tissue".into(),
            link: Some("https://example.org/a".into()),
            author: Some("Damaris Benny, J. Doe".into()),
            publication_year: Some("2023".into()),
            publication_place: None,
        };
        let unit = Unit::new(&rec, &DEFAULT_MATCHER);
        assert_eq!(unit.link, Some("https://example.org/a"));
        assert_eq!(
            unit.author,
            vec![Segment::strong("Damaris Benny"), Segment::plain(", J. Doe")]
        );
        assert_eq!(unit.year, Some("2023"));
        assert_eq!(unit.venue, None);
    }

    #[test]
    fn missing_author_renders_nothing() {
        let rec = record("No authors");
        assert!(Unit::new(&rec, &DEFAULT_MATCHER).author.is_empty());
    }
}
