use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use tower::ServiceExt;

async fn get_body(path: &str) -> (StatusCode, Option<String>, String) {
    let app = site_routes(SiteState::new("https://phongtot.vn"));
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, _, _) = get_body("/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn robots_is_plain_text() {
    let (status, content_type, body) = get_body("/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert!(body.contains("Sitemap: https://phongtot.vn/sitemap.xml"));
}

#[tokio::test]
async fn sitemap_serves_every_indexed_page() {
    let (status, content_type, body) = get_body("/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml; charset=utf-8"));
    for path in rental_client::app::indexed_paths() {
        assert!(body.contains(&format!("<loc>https://phongtot.vn{path}</loc>")), "missing {path}");
    }
}

#[tokio::test]
async fn unknown_site_route_is_not_found() {
    let (status, _, _) = get_body("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn site_state_keeps_origin() {
    assert_eq!(&*SiteState::new("https://a.vn").origin, "https://a.vn");
}

#[test]
fn site_context_provides_configured_origin() {
    let provide = site_context(SiteOrigin::new("https://phongtot.vn/"));
    Owner::new().with(|| {
        provide();
        let origin = use_context::<SiteOrigin>();
        assert_eq!(origin.as_ref().map(SiteOrigin::as_str), Some("https://phongtot.vn"));
        assert_eq!(
            origin.map(|o| o.page_url("/about")).as_deref(),
            Some("https://phongtot.vn/about")
        );
    });
}
