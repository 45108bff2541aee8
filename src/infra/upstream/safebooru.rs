//! Safebooru tag-search client. The service replies with an XML document:
//! a `<posts count="N">` root holding one `<post .../>` element per result,
//! attributes only. A well-formed zero-count document is a valid empty
//! result, distinct from a parse failure.

use async_trait::async_trait;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::debug;

use crate::domain::{entities::ArtworkEntry, tag::ArtworkTag};

use super::{ArtworkGateway, UpstreamError, query};

pub struct SafebooruClient {
    client: reqwest::Client,
    base_url: String,
}

impl SafebooruClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ArtworkGateway for SafebooruClient {
    async fn artwork(&self, tag: &ArtworkTag, limit: u32) -> Result<Vec<ArtworkEntry>, UpstreamError> {
        let url = format!("{}{}", self.base_url, query::artwork_path(tag, limit));
        debug!(target = "aniview::upstream::safebooru", url = %url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(UpstreamError::from_reqwest)?;
        parse_posts(&body)
    }
}

/// Parse a post-index XML document into artwork entries.
pub fn parse_posts(xml: &[u8]) -> Result<Vec<ArtworkEntry>, UpstreamError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut posts = Vec::new();
    let mut buf = Vec::new();
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                match element.name().as_ref() {
                    b"posts" => saw_root = true,
                    b"post" => posts.push(post_from_attributes(&element)?),
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(UpstreamError::Parse(format!("xml error: {err}"))),
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(UpstreamError::Parse("missing <posts> root element".to_string()));
    }

    Ok(posts)
}

fn post_from_attributes(element: &BytesStart<'_>) -> Result<ArtworkEntry, UpstreamError> {
    let mut file_url = None;
    let mut tags = None;
    let mut created_at = None;

    for attribute in element.attributes() {
        let attribute =
            attribute.map_err(|err| UpstreamError::Parse(format!("bad attribute: {err}")))?;
        let value = attribute
            .unescape_value()
            .map_err(|err| UpstreamError::Parse(format!("bad attribute value: {err}")))?
            .into_owned();

        match attribute.key.as_ref() {
            b"file_url" => file_url = Some(value),
            b"tags" => tags = Some(value),
            b"created_at" => created_at = Some(value),
            _ => {}
        }
    }

    Ok(ArtworkEntry {
        file_url: file_url
            .ok_or_else(|| UpstreamError::Parse("post missing file_url".to_string()))?,
        tags: tags.unwrap_or_default(),
        created_at: created_at.unwrap_or_default(),
    })
}
