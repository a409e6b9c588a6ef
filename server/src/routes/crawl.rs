//! `robots.txt` and `sitemap.xml`.
//!
//! The sitemap is the only place the SEO landing page is advertised; it is
//! not linked from any page.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use rental_client::app::indexed_paths;

use super::SiteState;

#[cfg(test)]
#[path = "crawl_test.rs"]
mod crawl_test;

/// `GET /robots.txt` — allow everything and point at the sitemap.
pub async fn robots(State(site): State<SiteState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], robots_body(&site.origin))
}

/// `GET /sitemap.xml` — every statically rendered page.
pub async fn sitemap(State(site): State<SiteState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], sitemap_body(&site.origin, &indexed_paths()))
}

pub fn robots_body(origin: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {origin}/sitemap.xml\n")
}

pub fn sitemap_body(origin: &str, paths: &[String]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        out.push_str("  <url><loc>");
        out.push_str(&xml_escape(&format!("{origin}{path}")));
        out.push_str("</loc></url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
