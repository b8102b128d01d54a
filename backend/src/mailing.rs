//! Mailing-platform forwarding for captured leads.
//!
//! Mailchimp is tried first, ConvertKit second; the first platform that
//! accepts the contact wins. Both platforms report an already-subscribed
//! contact as an error on the wire, which this module folds into success so
//! repeat submissions stay idempotent. Callers treat any returned error as
//! non-fatal: a lead is never lost just because a third party was down.

use std::time::Duration;

use log::warn;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;

use common::model::lead::Lead;

use crate::config::{ConvertKitSettings, MailchimpSettings};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Tag attached to every forwarded contact so campaigns can segment on it.
const ATTRIBUTION_TAG: &str = "ACCA Syllabus Download";

#[derive(Debug, Error)]
pub enum MailingError {
    #[error("no mailing platform is configured")]
    NotConfigured,
    #[error("mailing platform unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    #[error("mailing platform rejected the contact: {0}")]
    Rejected(String),
}

pub struct MailingList {
    mailchimp: Option<MailchimpSettings>,
    convertkit: Option<ConvertKitSettings>,
    http: Client,
}

impl MailingList {
    pub fn new(
        mailchimp: Option<MailchimpSettings>,
        convertkit: Option<ConvertKitSettings>,
    ) -> Self {
        Self {
            mailchimp,
            convertkit,
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Forwards the lead to the first platform that accepts it and returns
    /// that platform's name. Per-platform failures are logged here; only the
    /// last one is returned when every platform fails.
    pub async fn add_contact(&self, lead: &Lead) -> Result<&'static str, MailingError> {
        let mut last_error = MailingError::NotConfigured;

        if let Some(settings) = &self.mailchimp {
            match self.add_to_mailchimp(settings, lead).await {
                Ok(()) => return Ok("Mailchimp"),
                Err(err) => {
                    warn!("Mailchimp forwarding failed: {err}");
                    last_error = err;
                }
            }
        }

        if let Some(settings) = &self.convertkit {
            match self.add_to_convertkit(settings, lead).await {
                Ok(()) => return Ok("ConvertKit"),
                Err(err) => {
                    warn!("ConvertKit forwarding failed: {err}");
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    async fn add_to_mailchimp(
        &self,
        settings: &MailchimpSettings,
        lead: &Lead,
    ) -> Result<(), MailingError> {
        let url = format!(
            "https://{}.api.mailchimp.com/3.0/lists/{}/members",
            settings.server, settings.list_id
        );
        let (first_name, last_name) = split_name(&lead.name);
        let mut tags = vec![ATTRIBUTION_TAG.to_string()];
        if let Some(source) = &lead.source {
            tags.push(source.clone());
        }

        let response = self
            .http
            .post(&url)
            .bearer_auth(&settings.api_key)
            .json(&json!({
                "email_address": lead.email,
                "status": "subscribed",
                "merge_fields": {
                    "FNAME": first_name,
                    "LNAME": last_name,
                    "PHONE": lead.phone.clone().unwrap_or_default(),
                },
                "tags": tags,
            }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        if mailchimp_says_duplicate(&body) {
            return Ok(());
        }
        Err(MailingError::Rejected(mailchimp_rejection(&body, status)))
    }

    async fn add_to_convertkit(
        &self,
        settings: &ConvertKitSettings,
        lead: &Lead,
    ) -> Result<(), MailingError> {
        let url = format!(
            "https://api.convertkit.com/v3/forms/{}/subscribe",
            settings.form_id
        );

        let response = self
            .http
            .post(&url)
            .json(&json!({
                "api_key": settings.api_key,
                "email": lead.email,
                "first_name": split_name(&lead.name).0,
                "fields": { "phone": lead.phone.clone().unwrap_or_default() },
            }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        if convertkit_says_duplicate(&body) {
            return Ok(());
        }
        Err(MailingError::Rejected(format!(
            "ConvertKit returned status {status}"
        )))
    }
}

/// Mailchimp merge fields want a first/last split; everything after the
/// first space counts as the last name.
fn split_name(name: &str) -> (String, String) {
    match name.trim().split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

/// Mailchimp reports a duplicate contact as a 400 with title `Member Exists`.
fn mailchimp_says_duplicate(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("title").and_then(Value::as_str).map(String::from))
        .as_deref()
        == Some("Member Exists")
}

fn mailchimp_rejection(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| format!("Mailchimp returned status {status}"))
}

/// ConvertKit has no dedicated duplicate status; it mentions it in the
/// error message instead.
fn convertkit_says_duplicate(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .map(|message| message.to_lowercase().contains("already subscribed"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_splits_on_first_space_only() {
        assert_eq!(
            split_name("Ada Lovelace King"),
            ("Ada".to_string(), "Lovelace King".to_string())
        );
        assert_eq!(split_name("Ada"), ("Ada".to_string(), String::new()));
        assert_eq!(split_name("  Ada  "), ("Ada".to_string(), String::new()));
    }

    #[test]
    fn member_exists_counts_as_success() {
        let body = r#"{"title":"Member Exists","status":400,"detail":"x is already a list member"}"#;
        assert!(mailchimp_says_duplicate(body));
        assert!(!mailchimp_says_duplicate(r#"{"title":"Invalid Resource"}"#));
        assert!(!mailchimp_says_duplicate("not json"));
    }

    #[test]
    fn mailchimp_rejection_prefers_detail() {
        let body = r#"{"title":"Invalid Resource","detail":"Please provide a valid email"}"#;
        assert_eq!(
            mailchimp_rejection(body, StatusCode::BAD_REQUEST),
            "Please provide a valid email"
        );
        assert_eq!(
            mailchimp_rejection("", StatusCode::BAD_GATEWAY),
            "Mailchimp returned status 502 Bad Gateway"
        );
    }

    #[test]
    fn already_subscribed_counts_as_success() {
        let body = r#"{"message":"Subscriber already subscribed to this form"}"#;
        assert!(convertkit_says_duplicate(body));
        assert!(!convertkit_says_duplicate(r#"{"message":"invalid api key"}"#));
    }

    #[actix_web::test]
    async fn no_platform_yields_not_configured() {
        let list = MailingList::new(None, None);
        let lead = Lead {
            email: "student@example.com".to_string(),
            name: "Test Student".to_string(),
            phone: None,
            consent: true,
            source: None,
        };
        assert!(matches!(
            list.add_contact(&lead).await,
            Err(MailingError::NotConfigured)
        ));
    }
}
