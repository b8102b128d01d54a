//! Environment-driven configuration.
//!
//! Collaborator credentials (object store, mailing platforms) are grouped:
//! a group is either complete or treated as absent. A partially set group is
//! logged and dropped so the server still starts and degrades gracefully
//! instead of failing half-configured at the first request.

use std::env;

use log::warn;

/// Site identity used by the sitemap and page copy.
#[derive(Clone)]
pub struct SiteConfig {
    pub name: String,
    pub url: String,
}

/// S3-compatible bucket credentials (Cloudflare R2 in production).
#[derive(Clone)]
pub struct StorageSettings {
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
}

#[derive(Clone)]
pub struct MailchimpSettings {
    pub api_key: String,
    /// Datacenter prefix of the account, e.g. `us21`.
    pub server: String,
    pub list_id: String,
}

#[derive(Clone)]
pub struct ConvertKitSettings {
    pub api_key: String,
    pub form_id: String,
}

#[derive(Clone)]
pub struct CmsSettings {
    pub base_url: String,
    pub token: Option<String>,
}

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub production: bool,
    pub site: SiteConfig,
    pub storage: Option<StorageSettings>,
    pub mailchimp: Option<MailchimpSettings>,
    pub convertkit: Option<ConvertKitSettings>,
    pub cms: CmsSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match var("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT is not a valid port number, using 8080");
                8080
            }),
            None => 8080,
        };

        AppConfig {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            production: var("APP_ENV").as_deref() == Some("production"),
            site: SiteConfig {
                name: var("SITE_NAME").unwrap_or_else(|| "ACCA Study Hub".to_string()),
                url: var("SITE_URL").unwrap_or_else(|| "https://acca-study-hub.com".to_string()),
            },
            storage: storage_group(
                var("R2_ENDPOINT"),
                var("R2_ACCESS_KEY_ID"),
                var("R2_SECRET_ACCESS_KEY"),
                var("R2_BUCKET_NAME"),
            ),
            mailchimp: mailchimp_group(
                var("MAILCHIMP_API_KEY"),
                var("MAILCHIMP_SERVER"),
                var("MAILCHIMP_LIST_ID"),
            ),
            convertkit: convertkit_group(var("CONVERTKIT_API_KEY"), var("CONVERTKIT_FORM_ID")),
            cms: CmsSettings {
                base_url: var("STRAPI_URL").unwrap_or_else(|| "http://localhost:1337".to_string()),
                token: var("STRAPI_API_TOKEN"),
            },
        }
    }
}

/// Reads a variable, treating the empty string as unset.
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn storage_group(
    endpoint: Option<String>,
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    bucket: Option<String>,
) -> Option<StorageSettings> {
    match (endpoint, access_key_id, secret_access_key, bucket) {
        (Some(endpoint), Some(access_key_id), Some(secret_access_key), Some(bucket)) => {
            Some(StorageSettings {
                endpoint,
                access_key_id,
                secret_access_key,
                bucket,
            })
        }
        (None, None, None, None) => None,
        _ => {
            warn!("object store credentials are incomplete, downloads will use placeholder URLs");
            None
        }
    }
}

fn mailchimp_group(
    api_key: Option<String>,
    server: Option<String>,
    list_id: Option<String>,
) -> Option<MailchimpSettings> {
    match (api_key, server, list_id) {
        (Some(api_key), Some(server), Some(list_id)) => Some(MailchimpSettings {
            api_key,
            server,
            list_id,
        }),
        (None, None, None) => None,
        _ => {
            warn!("Mailchimp settings are incomplete, skipping this platform");
            None
        }
    }
}

fn convertkit_group(api_key: Option<String>, form_id: Option<String>) -> Option<ConvertKitSettings> {
    match (api_key, form_id) {
        (Some(api_key), Some(form_id)) => Some(ConvertKitSettings { api_key, form_id }),
        (None, None) => None,
        _ => {
            warn!("ConvertKit settings are incomplete, skipping this platform");
            None
        }
    }
}
