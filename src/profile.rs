use serde::{Deserialize, Serialize};

/// Everything on the page that is not the publications list.
///
/// Biography paragraphs may mark emphasis with `**bold**`; see [`crate::markup::parse_emphasis`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Lines shown under the name in the sidebar.
    pub role: Vec<String>,
    pub avatar: Option<String>,
    pub emails: Vec<String>,
    pub github: Option<String>,
    pub scholar: Option<String>,
    /// Shown above the publications list, e.g. where the data comes from.
    pub publications_note: Option<String>,
    pub biography: Vec<String>,
    pub service: Vec<String>,
    pub teaching: Vec<String>,
    pub research: Vec<Interest>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Damaris Benny".to_string(),
            role: vec![
                "Postdoctoral Researcher".to_string(),
                "Toxicology & Microplastics".to_string(),
            ],
            avatar: None,
            emails: vec![
                "Damaris.Daniel@uib.no".to_string(),
                "damarisbenny@gmail.com".to_string(),
            ],
            github: Some("https://github.com/damarisbenny".to_string()),
            scholar: Some(
                "https://scholar.google.com/citations?user=uZXXYEIAAAAJ&hl=en".to_string(),
            ),
            publications_note: Some("Automatically updated from Google Scholar.".to_string()),
            biography: vec![
                "I am a **Postdoctoral Researcher** at the **Department of Clinical Medicine, \
                 University of Bergen, Norway**."
                    .to_string(),
                "My research focuses on the intersection of **Toxicology** and \
                 **Microplastics**, specifically investigating their impact on human health. \
                 I am dedicated to understanding how environmental contaminants affect \
                 biological systems and contributing to the scientific understanding of plastic \
                 pollution."
                    .to_string(),
            ],
            service: vec![
                "Reviewer for international toxicology journals".to_string(),
                "Conference organization committee member".to_string(),
            ],
            teaching: vec![
                "Lecturer in Environmental Toxicology".to_string(),
                "Supervisor for Master's students".to_string(),
            ],
            research: vec![
                Interest {
                    title: "Microplastics & Human Health".to_string(),
                    description: "Investigating the presence, transport, and toxicological \
                                  effects of microplastics in human tissues and fluids."
                        .to_string(),
                },
                Interest {
                    title: "Toxicology".to_string(),
                    description: "Assessing the impacts of environmental pollutants on \
                                  cellular health and physiological functions."
                        .to_string(),
                },
            ],
        }
    }
}

impl Profile {
    /// Address used for the sidebar mail link.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Host and path of the code-hosting profile, for use as link text.
    pub fn github_label(&self) -> Option<&str> {
        let url = self.github.as_deref()?;
        Some(
            url.trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_end_matches('/'),
        )
    }
}
