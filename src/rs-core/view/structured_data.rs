use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::{EmbedConfig, StreamMetadata};

/// schema.org `VideoObject` describing the live stream.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoObject {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: String,
    thumbnail_url: String,
    upload_date: String,
    content_url: String,
    embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<Person>,
}

#[derive(Debug, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    url: String,
}

impl VideoObject {
    pub(crate) fn new(
        config: &EmbedConfig,
        metadata: &StreamMetadata,
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            context: "https://schema.org",
            kind: "VideoObject",
            name: metadata.name_for(config.channel()),
            description: metadata.description_for(config.channel()),
            thumbnail_url: config.thumbnail_url(),
            upload_date: upload_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            content_url: config.channel_url(),
            embed_url: config.embed_url(),
            publisher: metadata.publisher.as_ref().map(|p| Person {
                kind: "Person",
                name: p.name.clone(),
                url: p.url.clone(),
            }),
        }
    }

    /// Serialize to the JSON-LD text put in the `application/ld+json` script element.
    pub(crate) fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
