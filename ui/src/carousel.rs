//! Media carousel for the project modal.

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;
use api::Media;
use dioxus::prelude::*;

/// Cursor into an ordered media list, always in `[0, len)`.
///
/// `next`/`prev` wrap modularly; with one or zero entries the index is
/// pinned at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselIndex {
    index: usize,
    len: usize,
}

impl CarouselIndex {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 1 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

/// Image carousel over a project's ordered media.
///
/// Callers should key this by project id so switching projects remounts
/// it with a fresh cursor.
#[component]
pub fn Carousel(media: Vec<Media>) -> Element {
    let len = media.len();
    let mut cursor = use_signal(move || CarouselIndex::new(len));

    if media.is_empty() {
        return rsx! {
            div { class: "carousel carousel--empty" }
        };
    }

    // Clamp in case the media list shrank under a live cursor.
    let shown = cursor.read().index().min(len - 1);
    let slide = &media[shown];

    rsx! {
        div {
            class: "carousel",
            if len > 1 {
                button {
                    class: "carousel-arrow carousel-arrow--prev",
                    onclick: move |_| cursor.write().prev(),
                    Icon { icon: FaChevronLeft, width: 16, height: 16 }
                }
            }
            img {
                class: "carousel-slide",
                src: "{slide.url}",
                alt: "media {shown + 1} of {len}",
            }
            if len > 1 {
                button {
                    class: "carousel-arrow carousel-arrow--next",
                    onclick: move |_| cursor.write().next(),
                    Icon { icon: FaChevronRight, width: 16, height: 16 }
                }
                div {
                    class: "carousel-dots",
                    for i in 0..len {
                        span {
                            key: "{i}",
                            class: if i == shown { "carousel-dot carousel-dot--active" } else { "carousel-dot" },
                        }
                    }
                }
            }
        }
    }
}
