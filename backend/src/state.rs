//! Shared application state handed to every handler via `web::Data`.

use crate::cms::ContentClient;
use crate::config::{AppConfig, SiteConfig};
use crate::mailing::MailingList;
use crate::storage::ObjectStore;

pub struct AppState {
    pub site: SiteConfig,
    /// Controls the `Secure` attribute on the gate cookie.
    pub production: bool,
    pub storage: ObjectStore,
    pub mailing: MailingList,
    pub content: ContentClient,
}

impl AppState {
    /// Builds all collaborators from the resolved configuration. Absent
    /// credential groups become inert collaborators rather than startup
    /// failures.
    pub fn new(config: AppConfig) -> Self {
        Self {
            site: config.site,
            production: config.production,
            storage: ObjectStore::new(config.storage),
            mailing: MailingList::new(config.mailchimp, config.convertkit),
            content: ContentClient::new(config.cms),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state(
    storage: Option<crate::config::StorageSettings>,
) -> actix_web::web::Data<AppState> {
    use crate::config::CmsSettings;

    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        production: false,
        site: SiteConfig {
            name: "ACCA Study Hub".to_string(),
            url: "https://acca-study-hub.test".to_string(),
        },
        storage,
        mailchimp: None,
        convertkit: None,
        // Port nothing listens on, so content calls exercise the fixture
        // fallback instead of hanging on a real CMS.
        cms: CmsSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            token: None,
        },
    };
    actix_web::web::Data::new(AppState::new(config))
}
