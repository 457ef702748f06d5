//! Content items shown in a category grid.
//!
//! Items are owned by the caller and never mutated by the layout core; the
//! planner only borrows slices of them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Content type (and surfaceable feature type) that marks an item as video.
const VIDEO_CONTENT_TYPE: &str = "clip";

/// One story, clip, or gallery in the feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Content type, used both for video detection and for link building.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Identifier within its content type.
    pub id: String,
    /// Headline shown inside or below the thumbnail.
    pub headline: String,
    /// Publish time, when the feed carried a parseable one.
    pub published_date: Option<DateTime<Utc>>,
    /// Filename (URL) of the abstract image.
    pub abstract_image: Option<String>,
    /// Classification label rendered as a pill.
    pub content_classification: Option<String>,
    /// Type of the first surfaceable feature, if any.
    pub feature_type: Option<String>,
    /// SEO slug appended to item links.
    pub seo_slug: Option<String>,
}

impl ContentItem {
    /// Create an item with identity and headline; other fields empty.
    pub fn new(
        content_type: impl Into<String>,
        id: impl Into<String>,
        headline: impl Into<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            id: id.into(),
            headline: headline.into(),
            ..Default::default()
        }
    }

    /// Set the publish date.
    pub fn with_published_date(mut self, date: DateTime<Utc>) -> Self {
        self.published_date = Some(date);
        self
    }

    /// Set the abstract image filename.
    pub fn with_image(mut self, filename: impl Into<String>) -> Self {
        self.abstract_image = Some(filename.into());
        self
    }

    /// Set the classification (pill) label.
    pub fn with_classification(mut self, label: impl Into<String>) -> Self {
        self.content_classification = Some(label.into());
        self
    }

    /// Set the surfaceable feature type.
    pub fn with_feature_type(mut self, feature_type: impl Into<String>) -> Self {
        self.feature_type = Some(feature_type.into());
        self
    }

    /// Set the SEO slug.
    pub fn with_seo_slug(mut self, slug: impl Into<String>) -> Self {
        self.seo_slug = Some(slug.into());
        self
    }

    /// Whether the item is a video clip, either by its own type or by its
    /// surfaceable feature type.
    pub fn is_video(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(VIDEO_CONTENT_TYPE)
            || self
                .feature_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(VIDEO_CONTENT_TYPE))
    }

    /// Image filename, treating an empty string as absent.
    pub fn image(&self) -> Option<&str> {
        self.abstract_image.as_deref().filter(|f| !f.is_empty())
    }
}
