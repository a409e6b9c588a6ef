//! Document head tags and JSON-LD for a listing page.
//!
//! DESIGN
//! ======
//! The tag set comes from `seo::head_tags`; this component renders it
//! one-for-one into the head through `leptos_meta`, so SSR output carries the
//! full set for crawlers that do not run WASM.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};

use crate::seo::{self, JSON_LD_TYPE, MetaKey, SeoFields};
use crate::util::browser::current_page_url;

/// Title, description/keywords, canonical, Open Graph, Twitter card and a
/// schema.org `Place` block.
#[component]
pub fn SeoHead(fields: SeoFields) -> impl IntoView {
    let tags = seo::head_tags(&fields, current_page_url().as_deref());

    view! {
        <Title text=tags.title/>
        <Link rel="canonical" href=tags.canonical/>
        {tags
            .meta
            .into_iter()
            .map(|tag| match tag.key {
                MetaKey::Name(name) => view! { <Meta name=name content=tag.content/> }.into_any(),
                MetaKey::Property(property) => view! { <Meta property=property content=tag.content/> }.into_any(),
            })
            .collect_view()}
        <Script type_=JSON_LD_TYPE>{tags.json_ld}</Script>
    }
}
