//! Search-engine landing page for "thuê phòng" queries.
//!
//! Not linked from the header or footer. It exists so crawlers find a
//! keyword-focused page; the server lists it in `sitemap.xml`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::SITE_NAME;
use crate::content::landing::{FEATURES, KEYWORDS, PRICING, TESTIMONIALS};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=format!("Thuê phòng trọ, căn hộ mini giá tốt | {SITE_NAME}")/>
        <Meta
            name="description"
            content="Tìm phòng trọ, căn hộ mini đã xác minh, liên hệ trực tiếp chủ nhà, không mất phí môi giới."
        />
        <Meta name="keywords" content=KEYWORDS.join(", ")/>
        <div class="landing-page">
            <section class="page-hero page-hero--landing">
                <div class="container">
                    <h1 class="page-hero__title">"Thuê phòng dễ dàng, an tâm mỗi ngày"</h1>
                    <p class="page-hero__lead">
                        "Hàng nghìn phòng trọ và căn hộ mini đã được xác minh, cập nhật mỗi ngày."
                    </p>
                    <div class="cta__actions">
                        <a href="/rooms" class="btn btn-primary">"Tìm phòng ngay"</a>
                        <a href="/contact" class="btn btn-secondary">"Đăng tin cho thuê"</a>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="container card-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <article class="card">
                                    <span class="card__icon">{feature.icon}</span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="pricing">
                <div class="container">
                    <h2>"Bảng giá đăng tin"</h2>
                    <div class="pricing__grid">
                        {PRICING
                            .iter()
                            .map(|tier| {
                                view! {
                                    <article class="pricing__tier" class:pricing__tier--highlighted=tier.highlighted>
                                        <h3>{tier.name}</h3>
                                        <p class="pricing__price">
                                            {tier.price}
                                            <span class="pricing__period">{tier.period}</span>
                                        </p>
                                        <ul>
                                            {tier.perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
                                        </ul>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="container card-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="card testimonial">
                                    <p>{t.quote}</p>
                                    <footer>
                                        <strong>{t.author}</strong>
                                        " · "
                                        {t.role}
                                    </footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
