//! Support page with a searchable FAQ list.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::SITE_NAME;
use crate::content::faq::{FAQS, FaqEntry};
use crate::state::faq_search::filter_faqs;

pub const NO_RESULTS_MESSAGE: &str = "Không tìm thấy câu hỏi phù hợp.";

#[component]
pub fn SupportPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    // Recomputed on every keystroke.
    let visible = move || query.with(|q| filter_faqs(FAQS, q).copied().collect::<Vec<FaqEntry>>());

    view! {
        <Title text=format!("Hỗ trợ | {SITE_NAME}")/>
        <Meta name="description" content="Câu hỏi thường gặp về thuê phòng, đăng tin và tài khoản."/>
        <div class="support-page container">
            <h1>"Trung tâm hỗ trợ"</h1>
            <input
                class="support-page__search"
                type="search"
                placeholder="Tìm kiếm câu hỏi..."
                aria-label="Tìm kiếm câu hỏi"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="support-page__empty">{NO_RESULTS_MESSAGE}</p> }
            >
                <ul class="faq-list">
                    <For
                        each=visible
                        key=|entry| entry.question
                        children=|entry: FaqEntry| {
                            view! {
                                <li class="faq-list__item">
                                    <details>
                                        <summary class="faq-list__question">{entry.question}</summary>
                                        <p class="faq-list__answer">{entry.answer}</p>
                                    </details>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <section class="support-page__contact">
                <h2>"Vẫn cần trợ giúp?"</h2>
                <p>"Đội ngũ hỗ trợ sẵn sàng từ 08:00 đến 21:00 mỗi ngày."</p>
                <a href="/contact" class="btn btn-primary">"Liên hệ hỗ trợ"</a>
            </section>
        </div>
    }
}
