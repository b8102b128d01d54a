//! Typed client for the headless CMS.
//!
//! Content lives in Strapi, which wraps every collection in a
//! `{"data": [{"id": .., "attributes": {..}}]}` envelope. The client
//! flattens that envelope into the shared domain types and tags every
//! payload with where it came from: `live` on a successful fetch, `fixture`
//! when the CMS was unreachable and the built-in catalogue stood in. The
//! listing endpoints never fail outward; degradation is a tag, not an error.

use log::warn;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use common::model::content::ContentSource;
use common::model::post::BlogPost;
use common::model::syllabus::{Level, Syllabus};
use common::model::timetable::{ExamSlot, Timetable};
use common::responses::ContentList;

use crate::config::CmsSettings;
use crate::fixtures;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
enum CmsError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("CMS returned status {0}")]
    Status(u16),
}

#[derive(Deserialize)]
struct Envelope<A> {
    data: Vec<Entry<A>>,
}

#[derive(Deserialize)]
struct Entry<A> {
    id: u32,
    attributes: A,
}

#[derive(Deserialize)]
struct SyllabusAttributes {
    level: Level,
    title: String,
    description: String,
    #[serde(rename = "fileKey")]
    file_key: String,
    version: String,
    #[serde(rename = "updatedAt")]
    updated_at: String,
}

#[derive(Deserialize)]
struct PostAttributes {
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

#[derive(Deserialize)]
struct TimetableAttributes {
    #[serde(rename = "examSession")]
    exam_session: String,
    #[serde(rename = "registrationDeadline")]
    registration_deadline: String,
    subjects: Vec<ExamSlot>,
}

pub struct ContentClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ContentClient {
    pub fn new(settings: CmsSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token,
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub async fn syllabi(&self) -> ContentList<Syllabus> {
        match self.fetch_list("/api/syllabi?populate=*", syllabus_record).await {
            Ok(data) => ContentList {
                data,
                source: ContentSource::Live,
            },
            Err(err) => {
                warn!("CMS syllabus fetch failed, serving fixtures: {err}");
                ContentList {
                    data: fixtures::syllabi(),
                    source: ContentSource::Fixture,
                }
            }
        }
    }

    pub async fn syllabus_by_level(&self, level: Level) -> (Option<Syllabus>, ContentSource) {
        let path = format!("/api/syllabi?filters[level][$eq]={level}&populate=*");
        match self.fetch_list(&path, syllabus_record).await {
            Ok(data) => (data.into_iter().next(), ContentSource::Live),
            Err(err) => {
                warn!("CMS syllabus lookup failed, searching fixtures: {err}");
                let hit = fixtures::syllabi().into_iter().find(|s| s.level == level);
                (hit, ContentSource::Fixture)
            }
        }
    }

    pub async fn posts(&self, page: u32, page_size: u32) -> ContentList<BlogPost> {
        let path = format!(
            "/api/blog-posts?pagination[page]={page}&pagination[pageSize]={page_size}&sort=publishedAt:desc"
        );
        match self.fetch_list(&path, post_record).await {
            Ok(data) => ContentList {
                data,
                source: ContentSource::Live,
            },
            Err(err) => {
                warn!("CMS post fetch failed, serving fixtures: {err}");
                ContentList {
                    data: fixtures::posts(),
                    source: ContentSource::Fixture,
                }
            }
        }
    }

    pub async fn post_by_slug(&self, slug: &str) -> (Option<BlogPost>, ContentSource) {
        let path = format!("/api/blog-posts?filters[slug][$eq]={}", percent_encode(slug));
        match self.fetch_list(&path, post_record).await {
            Ok(data) => (data.into_iter().next(), ContentSource::Live),
            Err(err) => {
                warn!("CMS post lookup failed, searching fixtures: {err}");
                let hit = fixtures::posts().into_iter().find(|p| p.slug == slug);
                (hit, ContentSource::Fixture)
            }
        }
    }

    pub async fn timetables(&self, session: Option<&str>) -> ContentList<Timetable> {
        let path = match session {
            Some(session) => format!(
                "/api/timetables?filters[examSession][$eq]={}",
                percent_encode(session)
            ),
            None => "/api/timetables".to_string(),
        };
        match self.fetch_list(&path, timetable_record).await {
            Ok(data) => ContentList {
                data,
                source: ContentSource::Live,
            },
            Err(err) => {
                warn!("CMS timetable fetch failed, serving fixtures: {err}");
                let mut data = fixtures::timetables();
                if let Some(session) = session {
                    data.retain(|t| t.exam_session == session);
                }
                ContentList {
                    data,
                    source: ContentSource::Fixture,
                }
            }
        }
    }

    async fn fetch_list<A, T>(
        &self,
        path_and_query: &str,
        record: fn(Entry<A>) -> T,
    ) -> Result<Vec<T>, CmsError>
    where
        A: DeserializeOwned,
    {
        let mut request = self.http.get(format!("{}{}", self.base_url, path_and_query));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(CmsError::Status(response.status().as_u16()));
        }
        let envelope: Envelope<A> = response.json().await?;
        Ok(envelope.data.into_iter().map(record).collect())
    }
}

fn syllabus_record(entry: Entry<SyllabusAttributes>) -> Syllabus {
    Syllabus {
        id: entry.id,
        level: entry.attributes.level,
        title: entry.attributes.title,
        description: entry.attributes.description,
        file_key: entry.attributes.file_key,
        version: entry.attributes.version,
        updated_at: entry.attributes.updated_at,
    }
}

fn post_record(entry: Entry<PostAttributes>) -> BlogPost {
    BlogPost {
        id: entry.id,
        title: entry.attributes.title,
        slug: entry.attributes.slug,
        excerpt: entry.attributes.excerpt,
        content: entry.attributes.content,
        published_at: entry.attributes.published_at,
    }
}

fn timetable_record(entry: Entry<TimetableAttributes>) -> Timetable {
    Timetable {
        id: entry.id,
        exam_session: entry.attributes.exam_session,
        registration_deadline: entry.attributes.registration_deadline,
        subjects: entry.attributes.subjects,
    }
}

/// Minimal query-component encoding for filter values placed in Strapi URLs.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Settings pointing at a port nothing listens on; fetches fail fast
    /// with a connection refused.
    fn unreachable() -> CmsSettings {
        CmsSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            token: None,
        }
    }

    #[test]
    fn strapi_envelope_flattens_into_domain_types() {
        let payload = r#"{
            "data": [{
                "id": 42,
                "attributes": {
                    "level": "f5",
                    "title": "Performance Management (PM)",
                    "description": "Advanced management accounting.",
                    "fileKey": "syllabus/f5-performance-management.pdf",
                    "version": "2024-2025",
                    "updatedAt": "2024-09-01"
                }
            }]
        }"#;
        let envelope: Envelope<SyllabusAttributes> = serde_json::from_str(payload).unwrap();
        let records: Vec<Syllabus> = envelope.data.into_iter().map(syllabus_record).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 42);
        assert_eq!(records[0].level, Level::F5);
        assert_eq!(records[0].file_key, "syllabus/f5-performance-management.pdf");
    }

    #[actix_web::test]
    async fn unreachable_cms_serves_tagged_fixtures() {
        let client = ContentClient::new(unreachable());

        let list = client.syllabi().await;
        assert_eq!(list.source, ContentSource::Fixture);
        assert_eq!(list.data.len(), 7);

        let (hit, source) = client.syllabus_by_level(Level::F1).await;
        assert_eq!(source, ContentSource::Fixture);
        assert!(hit.is_some());

        let (miss, _) = client.syllabus_by_level(Level::F9).await;
        assert!(miss.is_none());
    }

    #[actix_web::test]
    async fn timetable_fallback_honors_session_filter() {
        let client = ContentClient::new(unreachable());
        let list = client.timetables(Some("June 2026")).await;
        assert_eq!(list.source, ContentSource::Fixture);
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].exam_session, "June 2026");
    }

    #[test]
    fn filter_values_are_query_encoded() {
        assert_eq!(percent_encode("June 2026"), "June%202026");
        assert_eq!(percent_encode("plain-slug"), "plain-slug");
    }
}
