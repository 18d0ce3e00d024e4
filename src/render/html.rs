use askama::Template;

use crate::{
    markup::{Segment, parse_emphasis},
    profile::Profile,
    render::{EMPTY_MESSAGE, LOADING_MESSAGE, Section},
};

/// The publications section on its own, for embedding in another page.
#[derive(Template)]
#[template(path = "publications.html")]
pub struct PublicationsTemplate<'a> {
    pub section: &'a Section<'a>,
    pub loading_message: &'static str,
    pub empty_message: &'static str,
}

/// The whole profile page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub profile: &'a Profile,
    pub biography: Vec<Vec<Segment<'a>>>,
    pub section: &'a Section<'a>,
    pub loading_message: &'static str,
    pub empty_message: &'static str,
}

impl<'a> PublicationsTemplate<'a> {
    pub fn new(section: &'a Section<'a>) -> Self {
        PublicationsTemplate {
            section,
            loading_message: LOADING_MESSAGE,
            empty_message: EMPTY_MESSAGE,
        }
    }
}

impl<'a> PageTemplate<'a> {
    pub fn new(profile: &'a Profile, section: &'a Section<'a>) -> Self {
        PageTemplate {
            profile,
            biography: profile.biography.iter().map(|p| parse_emphasis(p)).collect(),
            section,
            loading_message: LOADING_MESSAGE,
            empty_message: EMPTY_MESSAGE,
        }
    }
}

pub fn render_fragment(section: &Section<'_>) -> anyhow::Result<String> {
    Ok(PublicationsTemplate::new(section).render()?)
}

pub fn render_page(profile: &Profile, section: &Section<'_>) -> anyhow::Result<String> {
    Ok(PageTemplate::new(profile, section).render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fetcher::LoadState, highlight::DEFAULT_MATCHER, publication::PublicationRecord,
    };

    fn scenario_a() -> LoadState {
        LoadState::Loaded(vec![PublicationRecord {
            title: "Plastics in Tissue".into(),
            link: Some("https://example.org/a".into()),
            author: Some("Damaris Benny, J. Doe".into()),
            publication_year: Some("2023".into()),
            publication_place: None,
        }])
    }

    #[test]
    fn fragment_renders_linked_unit() {
        let state = scenario_a();
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let html = render_fragment(&section).unwrap();

        assert_eq!(html.matches(r#"class="publication""#).count(), 1);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("Plastics in Tissue</a>"));
        assert!(html.contains("<strong>Damaris Benny</strong>, J. Doe"));
        assert!(html.contains(r#"<span class="year">2023</span>"#));
        assert!(!html.contains(r#"class="venue""#));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn fragment_renders_plain_title_without_link() {
        let state = LoadState::Loaded(vec![PublicationRecord {
            title: "Unlinked".into(),
            publication_place: Some("Toxicology Letters".into()),
            ..Default::default()
        }]);
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let html = render_fragment(&section).unwrap();

        assert!(!html.contains("<a "));
        assert!(html.contains("Unlinked"));
        assert!(html.contains(r#"<span class="venue">Toxicology Letters</span>"#));
        assert!(!html.contains(r#"class="year""#));
    }

    #[test]
    fn fragment_shows_placeholder_while_loading() {
        let state = LoadState::Loading;
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let html = render_fragment(&section).unwrap();
        assert!(html.contains(LOADING_MESSAGE));
        assert!(!html.contains(r#"class="publication""#));
    }

    #[test]
    fn fragment_shows_single_message_when_empty() {
        let state = LoadState::Loaded(Vec::new());
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let html = render_fragment(&section).unwrap();
        assert_eq!(html.matches(EMPTY_MESSAGE).count(), 1);
        assert!(!html.contains(r#"class="publication""#));
    }

    #[test]
    fn fields_are_escaped() {
        let state = LoadState::Loaded(vec![PublicationRecord {
            title: "<script>alert(1)</script>".into(),
            author: Some("D. Benny & <b>Co</b>".into()),
            ..Default::default()
        }]);
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let html = render_fragment(&section).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>D. Benny</strong> &amp; &lt;b&gt;Co&lt;"));
    }

    #[test]
    fn page_includes_profile_sections() {
        let state = scenario_a();
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let profile = Profile::default();
        let html = render_page(&profile, &section).unwrap();

        for id in ["home", "research", "publications", "roles", "contact"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing section {id}");
            assert!(html.contains(&format!(r##"href="#{id}""##)), "missing nav {id}");
        }
        assert!(html.contains("<strong>Postdoctoral Researcher</strong>"));
        assert!(html.contains("Microplastics &amp; Human Health"));
        assert!(html.contains("Lecturer in Environmental Toxicology"));
        assert!(html.contains("Automatically updated from Google Scholar."));
        assert!(html.contains("damarisbenny@gmail.com"));
        assert_eq!(html.matches(r#"class="publication""#).count(), 1);
    }

    #[test]
    fn page_skips_absent_links() {
        let state = LoadState::Loaded(Vec::new());
        let section = Section::new(&state, &DEFAULT_MATCHER);
        let profile = Profile {
            github: None,
            scholar: None,
            avatar: Some("avatar.jpg".into()),
            publications_note: None,
            ..Profile::default()
        };
        let html = render_page(&profile, &section).unwrap();
        assert!(!html.contains("github.com"));
        assert!(!html.contains("scholar.google"));
        assert!(html.contains(r#"class="avatar""#));
        assert!(html.contains(EMPTY_MESSAGE));
    }
}
