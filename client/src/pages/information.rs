//! Information page: contact channels, platform facts and policy links.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::SITE_NAME;
use crate::content::information::{CONTACTS, POLICIES, SYSTEM_INFO};

#[component]
pub fn InformationPage() -> impl IntoView {
    view! {
        <Title text=format!("Thông tin | {SITE_NAME}")/>
        <Meta name="description" content="Thông tin liên hệ, giờ làm việc và chính sách của nền tảng."/>
        <div class="information-page container">
            <h1>"Thông tin"</h1>

            <section class="information-page__contacts">
                <h2>"Liên hệ"</h2>
                <ul class="contact-list">
                    {CONTACTS
                        .iter()
                        .map(|channel| {
                            let value = match channel.href {
                                Some(href) => view! { <a href=href>{channel.value}</a> }.into_any(),
                                None => view! { <span>{channel.value}</span> }.into_any(),
                            };
                            view! {
                                <li class="contact-list__item">
                                    <span class="contact-list__icon">{channel.icon}</span>
                                    <span class="contact-list__label">{channel.label}</span>
                                    {value}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="information-page__system">
                <h2>"Về hệ thống"</h2>
                <dl class="info-table">
                    {SYSTEM_INFO
                        .iter()
                        .map(|row| {
                            view! {
                                <dt>{row.label}</dt>
                                <dd>{row.value}</dd>
                            }
                        })
                        .collect_view()}
                </dl>
            </section>

            <section class="information-page__policies">
                <h2>"Chính sách"</h2>
                <ul>
                    {POLICIES
                        .iter()
                        .map(|&(label, href)| view! { <li><a href=href>{label}</a></li> })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
