//! Cards and empty states for the listing pages.

use crate::icons::{FaLocationDot, FaMagnifyingGlass, FaUser};
use crate::profession::ProfessionBadge;
use crate::Icon;
use api::{Project, User};
use dioxus::prelude::*;

const SKILLS_SHOWN: usize = 4;

/// Uniform substitute for raised errors and empty result sets
/// ("No projects found", "User profile not found", ...).
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaMagnifyingGlass, width: 24, height: 24 }
            p { "{message}" }
        }
    }
}

/// Listing card for a public profile. Navigation is the caller's job;
/// the card only reports the click.
#[component]
pub fn UserCard(user: User, on_select: EventHandler<()>) -> Element {
    let extra_skills = user.skills.len().saturating_sub(SKILLS_SHOWN);

    rsx! {
        div {
            class: "user-card",
            onclick: move |_| on_select.call(()),
            if let Some(picture) = &user.profile_picture {
                img { class: "user-card-avatar", src: "{picture}", alt: "{user.username}" }
            } else {
                div {
                    class: "user-card-avatar user-card-avatar--placeholder",
                    Icon { icon: FaUser, width: 24, height: 24 }
                }
            }
            h3 { class: "user-card-name", "{user.username}" }
            ProfessionBadge { profession: user.profession.clone() }
            if let Some(country) = &user.country_origin {
                span {
                    class: "user-card-country",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    "{country}"
                }
            }
            div {
                class: "skill-list",
                for skill in user.skills.iter().take(SKILLS_SHOWN) {
                    span { key: "{skill}", class: "skill-chip", "{skill}" }
                }
                if extra_skills > 0 {
                    span { class: "skill-chip skill-chip--more", "+{extra_skills}" }
                }
            }
        }
    }
}

/// Listing card for a project. Clicking it selects the project (the page
/// opens the modal).
#[component]
pub fn ProjectCard(project: Project, on_select: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "project-card",
            onclick: move |_| on_select.call(()),
            img {
                class: "project-card-thumbnail",
                src: "{project.thumbnail}",
                alt: "{project.title}",
            }
            div {
                class: "project-card-body",
                h3 { class: "project-card-title", "{project.title}" }
                if let Some(user) = &project.user {
                    p { class: "project-card-owner", "by {user.username}" }
                }
                div {
                    class: "tag-list",
                    for tag in &project.tags {
                        span { key: "{tag.id}", class: "tag-chip", "{tag.name}" }
                    }
                }
            }
        }
    }
}
