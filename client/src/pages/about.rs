//! About page: mission, headline stats, values, history and team.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::SITE_NAME;
use crate::content::about::{self, TEAM, TIMELINE, VALUES};
use crate::util::browser::scroll_to_top;

#[component]
pub fn AboutPage() -> impl IntoView {
    // Client-side navigation keeps the previous scroll offset otherwise.
    Effect::new(scroll_to_top);

    let stats = about::stats(TEAM, TIMELINE);

    view! {
        <Title text=format!("Về chúng tôi | {SITE_NAME}")/>
        <Meta
            name="description"
            content="Câu chuyện, giá trị cốt lõi và đội ngũ đứng sau nền tảng cho thuê phòng trực tuyến."
        />
        <div class="about-page">
            <section class="page-hero">
                <div class="container">
                    <h1 class="page-hero__title">"Kết nối người thuê và chủ nhà, minh bạch và nhanh chóng"</h1>
                    <p class="page-hero__lead">
                        "Chúng tôi xây dựng nền tảng giúp mọi người tìm được nơi ở phù hợp "
                        "mà không phải lo lắng về tin ảo hay phí môi giới."
                    </p>
                </div>
            </section>

            <section class="stats">
                <div class="container stats__grid">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <span class="stat__value">{stat.value}</span>
                                    <span class="stat__label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="values">
                <div class="container">
                    <h2>"Giá trị cốt lõi"</h2>
                    <div class="card-grid">
                        {VALUES
                            .iter()
                            .map(|value| {
                                view! {
                                    <article class="card">
                                        <span class="card__icon">{value.icon}</span>
                                        <h3>{value.title}</h3>
                                        <p>{value.description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="timeline">
                <div class="container">
                    <h2>"Hành trình phát triển"</h2>
                    <ol class="timeline__list">
                        {TIMELINE
                            .iter()
                            .map(|milestone| {
                                view! {
                                    <li class="timeline__item">
                                        <span class="timeline__year">{milestone.year}</span>
                                        <div>
                                            <h3>{milestone.title}</h3>
                                            <p>{milestone.description}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section class="team">
                <div class="container">
                    <h2>"Đội ngũ"</h2>
                    <div class="card-grid">
                        {TEAM
                            .iter()
                            .map(|member| {
                                view! {
                                    <article class="card team__member">
                                        <img class="team__avatar" src=member.avatar alt=member.name loading="lazy"/>
                                        <h3>{member.name}</h3>
                                        <p class="team__role">{member.role}</p>
                                        <p>{member.bio}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>"Sẵn sàng tìm phòng?"</h2>
                    <div class="cta__actions">
                        <a href="/rooms" class="btn btn-primary">"Xem phòng"</a>
                        <a href="/contact" class="btn btn-secondary">"Liên hệ"</a>
                    </div>
                </div>
            </section>
        </div>
    }
}
