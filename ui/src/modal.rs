//! Modal overlay and the project detail modal.

use crate::carousel::Carousel;
use crate::icons::{FaGlobe, FaXmark};
use crate::Icon;
use api::Project;
use dioxus::prelude::*;

/// Single-slot selection behind a modal: at most one item is selected
/// at a time, a new selection replaces the current one (last click
/// wins), and closing clears it.
///
/// Pages keep one of these in a signal and render one modal for
/// `current()`, which rules out stacked modals.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSelection<T> {
    current: Option<T>,
}

impl<T> Default for ModalSelection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> ModalSelection<T> {
    pub fn select(&mut self, item: T) {
        self.current = Some(item);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`; clicks inside do not
/// propagate to the backdrop handler.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Detail view for a selected project: media carousel, description,
/// tags, and the external link when the project has one.
///
/// The page owns the selection (a [`ModalSelection<Project>`] signal)
/// and renders one `ProjectModal` for whatever is current.
#[component]
pub fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            article {
                class: "project-modal",
                button {
                    class: "project-modal-close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
                Carousel { key: "{project.id}", media: project.media.clone() }
                div {
                    class: "project-modal-body",
                    h2 { "{project.title}" }
                    if let Some(user) = &project.user {
                        p { class: "project-modal-owner", "by {user.username}" }
                    }
                    p { class: "project-modal-description", "{project.description}" }
                    div {
                        class: "tag-list",
                        for tag in &project.tags {
                            span { key: "{tag.id}", class: "tag-chip", "{tag.name}" }
                        }
                    }
                    if let Some(url) = &project.url {
                        a {
                            class: "project-modal-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener",
                            Icon { icon: FaGlobe, width: 14, height: 14 }
                            "Visit project"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_the_previous_selection() {
        let mut selection = ModalSelection::default();
        assert!(!selection.is_open());

        selection.select("first");
        assert_eq!(selection.current(), Some(&"first"));

        // A click on another card swaps the modal, it never stacks.
        selection.select("second");
        assert_eq!(selection.current(), Some(&"second"));
        assert!(selection.is_open());
    }

    #[test]
    fn closing_clears_the_selection() {
        let mut selection = ModalSelection::default();
        selection.select(7);

        selection.close();
        assert_eq!(selection.current(), None);
        assert!(!selection.is_open());
    }
}
