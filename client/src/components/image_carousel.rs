//! Room photo gallery with previous/next controls and thumbnails.

use leptos::prelude::*;

use crate::seo::DEFAULT_IMAGE;
use crate::state::carousel::Carousel;

/// Shows one image at a time. The index lives in the component, so it resets
/// to the first image whenever the gallery is remounted.
#[component]
pub fn ImageCarousel(images: &'static [&'static str], #[prop(into)] alt: String) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let has_many = images.len() > 1;
    let current = move || carousel.with(|c| c.current(images).copied().unwrap_or(DEFAULT_IMAGE));
    let counter = move || {
        carousel.with(|c| if c.is_empty() { "0 / 0".to_owned() } else { format!("{} / {}", c.index() + 1, c.len()) })
    };

    view! {
        <div class="carousel">
            <div class="carousel__frame">
                <img class="carousel__image" src=current alt=alt/>
                <Show when=move || has_many>
                    <button
                        class="carousel__nav carousel__nav--prev"
                        aria-label="Ảnh trước"
                        on:click=move |_| carousel.update(Carousel::retreat)
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel__nav carousel__nav--next"
                        aria-label="Ảnh tiếp theo"
                        on:click=move |_| carousel.update(Carousel::advance)
                    >
                        "›"
                    </button>
                </Show>
                <span class="carousel__counter">{counter}</span>
            </div>
            <div class="carousel__thumbs">
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <button
                                class="carousel__thumb"
                                class:carousel__thumb--active=move || carousel.with(|c| c.index() == i)
                                aria-label=format!("Ảnh {}", i + 1)
                                on:click=move |_| carousel.update(|c| c.select(i))
                            >
                                <img src=*src alt="" loading="lazy"/>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
