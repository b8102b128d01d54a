//! Sitemap generation.
//!
//! Static pages carry today's date; syllabus and blog entries carry their
//! own update timestamps so crawlers revisit what actually changed. Content
//! comes through the same CMS client as the JSON endpoints, fixture
//! fallback included, so the sitemap never 500s on a CMS outage.

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::debug;

use common::model::post::BlogPost;
use common::model::syllabus::Syllabus;

use crate::state::AppState;

/// Path, change frequency and priority of the fixed pages.
const STATIC_PAGES: [(&str, &str, &str); 5] = [
    ("", "weekly", "1.0"),
    ("/syllabus", "monthly", "0.9"),
    ("/blog", "weekly", "0.8"),
    ("/timetables", "weekly", "0.8"),
    ("/about", "monthly", "0.6"),
];

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    let syllabi = state.content.syllabi().await;
    let posts = state.content.posts(1, 100).await;
    debug!(
        "sitemap built from {} syllabi ({}) and {} posts ({})",
        syllabi.data.len(),
        syllabi.source,
        posts.data.len(),
        posts.source
    );

    let xml = build_sitemap(&state.site.url, &syllabi.data, &posts.data);
    HttpResponse::Ok()
        .content_type("application/xml")
        .body(xml)
}

fn build_sitemap(base_url: &str, syllabi: &[Syllabus], posts: &[BlogPost]) -> String {
    let base_url = base_url.trim_end_matches('/');
    let today = Utc::now().format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for (path, freq, priority) in STATIC_PAGES {
        push_url(&mut xml, &format!("{base_url}{path}"), &today, freq, priority);
    }
    for syllabus in syllabi {
        push_url(
            &mut xml,
            &format!("{base_url}/syllabus/{}", syllabus.level),
            date_part(&syllabus.updated_at),
            "monthly",
            "0.85",
        );
    }
    for post in posts {
        push_url(
            &mut xml,
            &format!("{base_url}/blog/{}", post.slug),
            date_part(&post.published_at),
            "monthly",
            "0.7",
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    xml.push_str(&format!(
        "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
         <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>\n"
    ));
}

/// Timestamps from the CMS are RFC 3339; sitemaps only want the date.
fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn sitemap_lists_static_pages_and_content() {
        let syllabi = fixtures::syllabi();
        let posts = fixtures::posts();
        let xml = build_sitemap("https://acca-study-hub.test/", &syllabi, &posts);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.ends_with("</urlset>\n"));
        // Trailing slash on the base URL must not double up.
        assert!(xml.contains("<loc>https://acca-study-hub.test</loc>"));
        assert!(xml.contains("<loc>https://acca-study-hub.test/syllabus/f1</loc>"));
        assert!(xml.contains("<loc>https://acca-study-hub.test/blog/how-to-pass-acca-f1</loc>"));
        assert!(!xml.contains(".test//"));

        let urls = xml.matches("<url>").count();
        assert_eq!(urls, STATIC_PAGES.len() + syllabi.len() + posts.len());
    }

    #[test]
    fn timestamps_are_reduced_to_dates() {
        assert_eq!(date_part("2024-09-01T10:30:00Z"), "2024-09-01");
        assert_eq!(date_part("2024-09-01"), "2024-09-01");
    }
}
