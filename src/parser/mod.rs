//! Feed parser.
//!
//! Converts the JSON item feed into [`ContentItem`]s. Two document shapes are
//! accepted:
//!
//! - a bare array of items, and
//! - the content API response envelope,
//!   `[{"data": {"features": [...], "headline": "..."}}]`.
//!
//! Individual items that cannot be read are skipped with a warning, so one bad
//! entry never hides the rest of the feed. Only a document that is not JSON,
//! or not an array, is an error.

use crate::model::{ContentItem, ParseError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Key marking a response envelope entry.
const ENVELOPE_KEY: &str = "data";

/// Parsed feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feed {
    /// Envelope headline, when the feed came wrapped in one.
    pub headline: Option<String>,
    /// Items in feed order.
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponse {
    data: Option<RawResponseData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResponseData {
    features: Vec<Value>,
    headline: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawItem {
    #[serde(rename = "type")]
    content_type: Option<String>,
    id: Option<RawId>,
    headline: Option<String>,
    published_date: Option<Value>,
    #[serde(rename = "abstractimage")]
    abstract_image: Option<RawImage>,
    content_classification: Option<String>,
    surfaceable: Vec<RawSurfaceable>,
    seo: Option<RawSeo>,
}

/// Item ids arrive as strings or numbers depending on the content type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawImage {
    filename: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSurfaceable {
    #[serde(rename = "type")]
    feature_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSeo {
    pageurl: Option<String>,
}

/// Parse a feed document.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] when `raw` is not valid JSON and
/// [`ParseError::UnexpectedShape`] when its top level is not an array.
pub fn parse_feed(raw: &str) -> Result<Feed, ParseError> {
    let document: Value = serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })?;

    let entries = match document {
        Value::Array(entries) => entries,
        other => {
            return Err(ParseError::UnexpectedShape {
                found: json_type(&other),
            })
        }
    };

    let (headline, raw_items) = if is_envelope(&entries) {
        unwrap_envelope(entries)
    } else {
        (None, entries)
    };

    let total = raw_items.len();
    let items: Vec<ContentItem> = raw_items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| parse_item(index, value))
        .collect();

    debug!(
        entries = total,
        items = items.len(),
        skipped = total - items.len(),
        "Parsed feed"
    );

    Ok(Feed { headline, items })
}

fn is_envelope(entries: &[Value]) -> bool {
    entries
        .first()
        .and_then(Value::as_object)
        .is_some_and(|object| object.contains_key(ENVELOPE_KEY))
}

/// Only the first response of an envelope carries features.
fn unwrap_envelope(entries: Vec<Value>) -> (Option<String>, Vec<Value>) {
    let Some(first) = entries.into_iter().next() else {
        return (None, Vec::new());
    };
    match serde_json::from_value::<RawResponse>(first) {
        Ok(RawResponse { data: Some(data) }) => (data.headline, data.features),
        Ok(RawResponse { data: None }) => (None, Vec::new()),
        Err(e) => {
            warn!(error = %e, "Malformed response envelope, treating feed as empty");
            (None, Vec::new())
        }
    }
}

/// Parse one feed entry. Returns `None` (after logging) for unreadable entries.
pub fn parse_item(index: usize, value: Value) -> Option<ContentItem> {
    let raw: RawItem = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(index, error = %e, "Skipping malformed feed item");
            return None;
        }
    };

    let published_date = raw
        .published_date
        .and_then(|value| match parse_published_date(&value) {
            Some(date) => Some(date),
            None => {
                let err = ParseError::InvalidTimestamp {
                    index,
                    raw: value.to_string(),
                };
                warn!("{}", err);
                None
            }
        });

    Some(ContentItem {
        content_type: raw.content_type.unwrap_or_default(),
        id: raw.id.map(RawId::into_string).unwrap_or_default(),
        headline: raw.headline.unwrap_or_default(),
        published_date,
        abstract_image: raw.abstract_image.and_then(|image| image.filename),
        content_classification: raw.content_classification,
        feature_type: raw
            .surfaceable
            .into_iter()
            .next()
            .and_then(|surfaceable| surfaceable.feature_type),
        seo_slug: raw.seo.and_then(|seo| seo.pageurl),
    })
}

/// Accepts RFC 3339 strings and epoch milliseconds. `null` is treated as
/// absent by serde before reaching here.
fn parse_published_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        Value::Number(number) => number.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
