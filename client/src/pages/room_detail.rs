//! Room detail page for the sample listing.

use leptos::prelude::*;

use crate::components::image_carousel::ImageCarousel;
use crate::components::seo_head::SeoHead;
use crate::content::room::SAMPLE_ROOM;
use crate::seo::SeoFields;
use crate::util::browser::history_back;
use crate::util::format::{format_area, format_price};

/// Renders the fixed sample room whatever the `:id` segment says.
#[component]
pub fn RoomDetailPage() -> impl IntoView {
    let room = SAMPLE_ROOM;
    let address = format!("{}, {}, {}", room.address.street, room.address.locality, room.address.region);

    view! {
        <SeoHead fields=SeoFields::from(&room)/>
        <div class="room-page container">
            <button class="room-page__back" type="button" on:click=move |_| history_back()>
                "← Quay lại"
            </button>

            <div class="room-page__layout">
                <ImageCarousel images=room.images alt=room.title/>

                <aside class="room-page__summary">
                    <h1 class="room-page__title">{room.title}</h1>
                    <p class="room-page__address">{address}</p>
                    <p class="room-page__price">
                        {format_price(room.price, room.currency)}
                        <span class="room-page__period">"/tháng"</span>
                    </p>
                    <p class="room-page__area">"Diện tích: " {format_area(room.area)}</p>
                    <div class="room-page__actions">
                        <a href="/contact" class="btn btn-primary">"Liên hệ chủ nhà"</a>
                        <a href="/rooms" class="btn btn-secondary">"Xem phòng khác"</a>
                    </div>
                </aside>
            </div>

            <section class="room-page__description">
                <h2>"Mô tả"</h2>
                <p>{room.description}</p>
            </section>

            <section class="room-page__amenities">
                <h2>"Tiện ích"</h2>
                <ul class="amenity-list">
                    {room.amenities.iter().map(|name| view! { <li class="amenity-list__item">{*name}</li> }).collect_view()}
                </ul>
            </section>
        </div>
    }
}
