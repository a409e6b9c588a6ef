//! Root application component with routing and the SSR shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::site_chrome::{SiteFooter, SiteHeader};
use crate::content::SITE_NAME;
use crate::content::room::SAMPLE_ROOM;
use crate::pages::{
    about::AboutPage, information::InformationPage, landing::LandingPage, room_detail::RoomDetailPage,
    support::SupportPage,
};

/// Path of the search-engine landing page. Routed and listed in the sitemap,
/// never linked from navigation.
pub const LANDING_PATH: &str = "/thue-phong";

/// Every statically rendered page that crawlers should index.
pub fn indexed_paths() -> Vec<String> {
    vec![
        "/about".to_owned(),
        "/information".to_owned(),
        "/support".to_owned(),
        format!("/rooms/{}", SAMPLE_ROOM.id),
        LANDING_PATH.to_owned(),
    ]
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/rental-site.css"/>
        <Title text=SITE_NAME/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found container">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/about"/> }/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("information") view=InformationPage/>
                    <Route path=StaticSegment("support") view=SupportPage/>
                    <Route path=(StaticSegment("rooms"), ParamSegment("id")) view=RoomDetailPage/>
                    <Route path=StaticSegment("thue-phong") view=LandingPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
