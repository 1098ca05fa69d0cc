//! Placeholder letter templates
//!
//! Templates use `{{ name }}` style placeholders. The set of placeholders is
//! fixed; a template naming anything else is rejected when it is loaded so
//! a typo fails the run before the first letter is written.

use crate::app::models::EnrichedRecord;
use crate::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Placeholders a template may use
pub const PLACEHOLDERS: &[&str] = &["id", "name", "zipcode", "phone", "registered_at", "legislators"];

const PLACEHOLDER_PATTERN: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";

/// Turns an enriched record into the text of its letter
pub trait LetterRenderer {
    fn render(&self, record: &EnrichedRecord) -> Result<String>;
}

impl<F> LetterRenderer for F
where
    F: Fn(&EnrichedRecord) -> Result<String>,
{
    fn render(&self, record: &EnrichedRecord) -> Result<String> {
        self(record)
    }
}

/// A record field a template can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Id,
    Name,
    Zipcode,
    Phone,
    RegisteredAt,
    Legislators,
}

impl Placeholder {
    /// Resolve a placeholder name as written in a template
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "zipcode" => Some(Self::Zipcode),
            "phone" => Some(Self::Phone),
            "registered_at" => Some(Self::RegisteredAt),
            "legislators" => Some(Self::Legislators),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Zipcode => "zipcode",
            Self::Phone => "phone",
            Self::RegisteredAt => "registered_at",
            Self::Legislators => "legislators",
        }
    }

    /// Unescaped value of this field for `record`
    fn value(self, record: &EnrichedRecord) -> String {
        match self {
            Self::Id => record.id.clone(),
            Self::Name => record.name.clone(),
            Self::Zipcode => record.zipcode.clone(),
            Self::Phone => record.phone.clone(),
            Self::RegisteredAt => record.registration_display(),
            Self::Legislators => record.legislators.display_text(),
        }
    }
}

/// Piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(Placeholder),
}

/// A parsed letter template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTemplate {
    segments: Vec<Segment>,
}

impl LetterTemplate {
    /// Parse template text, rejecting unknown placeholders
    pub fn parse(source: impl AsRef<str>) -> Result<Self> {
        let source = source.as_ref();
        let pattern = Regex::new(PLACEHOLDER_PATTERN)
            .map_err(|e| Error::template(format!("invalid placeholder pattern: {}", e)))?;

        let mut segments = Vec::new();
        let mut unknown = Vec::new();
        let mut last = 0;

        for caps in pattern.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(source[last..whole.start()].to_string()));
            }
            match Placeholder::from_name(name.as_str()) {
                Some(placeholder) => segments.push(Segment::Field(placeholder)),
                None => unknown.push(name.as_str()),
            }
            last = whole.end();
        }
        if last < source.len() {
            segments.push(Segment::Text(source[last..].to_string()));
        }

        if !unknown.is_empty() {
            return Err(Error::template(format!(
                "unknown placeholder(s): {} (expected one of: {})",
                unknown.join(", "),
                PLACEHOLDERS.join(", ")
            )));
        }

        Ok(Self { segments })
    }

    /// Load and parse a template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read template {}", path.display()), e)
        })?;
        debug!("Loaded letter template from {}", path.display());
        Self::parse(source)
    }

    /// Placeholders used by this template, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(placeholder) => Some(placeholder.name()),
                Segment::Text(_) => None,
            })
            .collect()
    }
}

impl LetterRenderer for LetterTemplate {
    fn render(&self, record: &EnrichedRecord) -> Result<String> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => rendered.push_str(text),
                Segment::Field(placeholder) => {
                    rendered.push_str(&escape_html(&placeholder.value(record)))
                }
            }
        }
        Ok(rendered)
    }
}

/// Escape text for inclusion in an HTML letter
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{Legislator, LookupOutcome};
    use crate::constants::LEGISLATOR_FALLBACK_MESSAGE;
    use chrono::NaiveDate;

    fn record(legislators: LookupOutcome) -> EnrichedRecord {
        EnrichedRecord {
            id: "1".to_string(),
            name: "Allison".to_string(),
            zipcode: "20010".to_string(),
            phone: "6154385000".to_string(),
            registered_at: NaiveDate::from_ymd_opt(2008, 11, 12)
                .and_then(|d| d.and_hms_opt(10, 47, 0)),
            legislators,
            document: String::new(),
        }
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let template = LetterTemplate::parse(
            "<p>Dear {{name}} (#{{ id }}),</p><p>{{legislators}}</p><p>{{registered_at}}</p>",
        )
        .unwrap();

        let letter = template
            .render(&record(LookupOutcome::Found(vec![
                Legislator::new("Eleanor Norton"),
            ])))
            .unwrap();

        assert_eq!(
            letter,
            "<p>Dear Allison (#1),</p><p>Eleanor Norton</p><p>November 12, 2008 at 10:47</p>"
        );
    }

    #[test]
    fn test_render_fallback_message() {
        let template = LetterTemplate::parse("{{legislators}}").unwrap();
        let letter = template.render(&record(LookupOutcome::fallback())).unwrap();
        assert_eq!(letter, LEGISLATOR_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_render_escapes_values() {
        let template = LetterTemplate::parse("Dear {{name}}").unwrap();
        let mut rec = record(LookupOutcome::Found(Vec::new()));
        rec.name = "<b>Tom & Jerry</b>".to_string();

        assert_eq!(
            template.render(&rec).unwrap(),
            "Dear &lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
    }

    #[test]
    fn test_unknown_placeholder_rejected() {
        let result = LetterTemplate::parse("Dear {{name}}, your {{ticket_number}}");
        match result {
            Err(Error::Template { message }) => assert!(message.contains("ticket_number")),
            other => panic!("expected template error, got {:?}", other),
        }
    }

    #[test]
    fn test_placeholders_listed_in_order() {
        let template = LetterTemplate::parse("{{zipcode}} {{phone}} {{zipcode}}").unwrap();
        assert_eq!(template.placeholders(), vec!["zipcode", "phone", "zipcode"]);
    }

    #[test]
    fn test_text_without_placeholders_is_unchanged() {
        let template = LetterTemplate::parse("Thank you for coming! { not a placeholder }").unwrap();
        let letter = template.render(&record(LookupOutcome::fallback())).unwrap();
        assert_eq!(letter, "Thank you for coming! { not a placeholder }");
    }

    #[test]
    fn test_render_invalid_date_marker() {
        let template = LetterTemplate::parse("Registered: {{registered_at}}").unwrap();
        let mut rec = record(LookupOutcome::fallback());
        rec.registered_at = None;

        assert_eq!(
            template.render(&rec).unwrap(),
            "Registered: Invalid date information"
        );
    }

    #[test]
    fn test_every_listed_placeholder_resolves() {
        for name in PLACEHOLDERS {
            let placeholder = Placeholder::from_name(name).unwrap();
            assert_eq!(placeholder.name(), *name);
        }
        assert_eq!(Placeholder::from_name("ticket_number"), None);
    }

    #[test]
    fn test_adjacent_placeholders_and_trailing_text() {
        let template = LetterTemplate::parse("{{id}}{{zipcode}} end").unwrap();
        let letter = template.render(&record(LookupOutcome::fallback())).unwrap();
        assert_eq!(letter, "120010 end");
    }
}
