//! Header navigation and footer shared by every route.
//!
//! The SEO landing page is absent from both link lists.

#[cfg(test)]
#[path = "site_chrome_test.rs"]
mod site_chrome_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::SITE_NAME;
use crate::content::room::SAMPLE_ROOM;

/// Header links as `(label, href)`, in display order.
pub fn header_links() -> Vec<(&'static str, String)> {
    vec![
        ("Phòng nổi bật", format!("/rooms/{}", SAMPLE_ROOM.id)),
        ("Về chúng tôi", "/about".to_owned()),
        ("Thông tin", "/information".to_owned()),
        ("Hỗ trợ", "/support".to_owned()),
    ]
}

/// Footer links as `(label, href)`.
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Danh sách phòng", "/rooms"),
    ("Liên hệ", "/contact"),
    ("Câu hỏi thường gặp", "/support"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <A href="/about" attr:class="site-header__brand">{SITE_NAME}</A>
                <nav class="site-header__nav">
                    {header_links()
                        .into_iter()
                        .map(|(label, href)| view! { <A href=href>{label}</A> })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{format!("© {SITE_NAME}. Nền tảng cho thuê phòng trực tuyến.")}</p>
                <nav class="site-footer__nav">
                    {FOOTER_LINKS.iter().map(|&(label, href)| view! { <a href=href>{label}</a> }).collect_view()}
                </nav>
            </div>
        </footer>
    }
}
