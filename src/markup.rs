use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Plain,
    Strong,
}

/// A contiguous run of text, either shown as-is or emphasised.
///
/// Rich text on the page is always an ordered list of these rather than raw markup, so nothing
/// coming from the data files is ever injected into the page unescaped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasis: Emphasis,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Segment {
            text,
            emphasis: Emphasis::Plain,
        }
    }

    pub fn strong(text: &'a str) -> Self {
        Segment {
            text,
            emphasis: Emphasis::Strong,
        }
    }

    pub fn is_strong(&self) -> bool {
        self.emphasis == Emphasis::Strong
    }
}

/// Split `text` on `**bold**` markers.
///
/// An opening `**` without a matching close is kept as literal text.
pub fn parse_emphasis(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let inner = &rest[open + 2..];
        let Some(close) = inner.find("**") else {
            break;
        };
        push(&mut segments, Segment::plain(&rest[..open]));
        push(&mut segments, Segment::strong(&inner[..close]));
        rest = &inner[close + 2..];
    }
    push(&mut segments, Segment::plain(rest));

    segments
}

fn push<'a>(segments: &mut Vec<Segment<'a>>, segment: Segment<'a>) {
    if !segment.text.is_empty() {
        segments.push(segment);
    }
}
