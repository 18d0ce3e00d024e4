use serde::Deserialize;
use serde_json::{Map, Value};

/// One entry of `publications.json`.
///
/// Every key is optional. Elements are read leniently: a key holding the wrong JSON type counts
/// as missing, and an element that is not an object becomes a record with nothing in it, so one
/// bad entry never takes the rest of the list down with it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct PublicationRecord {
    pub title: String,
    pub link: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<String>,
    pub publication_place: Option<String>,
}

impl From<Value> for PublicationRecord {
    fn from(value: Value) -> Self {
        let Value::Object(obj) = value else {
            return PublicationRecord::default();
        };
        PublicationRecord {
            title: text_field(&obj, "title").unwrap_or_default(),
            link: text_field(&obj, "link"),
            author: text_field(&obj, "author"),
            publication_year: text_field(&obj, "publication_year"),
            publication_place: text_field(&obj, "publication_place"),
        }
    }
}

/// Read `key` as text. Numbers are accepted (years are often numeric); empty strings count as
/// absent.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match obj.get(key)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Parse a whole `publications.json` document. The top level must be an array.
pub fn parse_list(body: &str) -> serde_json::Result<Vec<PublicationRecord>> {
    serde_json::from_str(body)
}
