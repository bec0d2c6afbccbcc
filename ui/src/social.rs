//! Social link row for the public profile page.

use crate::icons::{FaDribbble, FaGithub, FaGlobe, FaInstagram, FaLinkedin};
use crate::Icon;
use api::SocialLinks;
use dioxus::prelude::*;

/// Icon links to a user's external profiles. Renders nothing when the
/// user has no links at all.
#[component]
pub fn SocialLinksRow(links: SocialLinks) -> Element {
    if links.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "social-links",
            if let Some(url) = &links.github {
                a { class: "social-link", href: "{url}", target: "_blank", rel: "noopener",
                    Icon { icon: FaGithub, width: 18, height: 18 }
                }
            }
            if let Some(url) = &links.linkedin {
                a { class: "social-link", href: "{url}", target: "_blank", rel: "noopener",
                    Icon { icon: FaLinkedin, width: 18, height: 18 }
                }
            }
            if let Some(url) = &links.instagram {
                a { class: "social-link", href: "{url}", target: "_blank", rel: "noopener",
                    Icon { icon: FaInstagram, width: 18, height: 18 }
                }
            }
            if let Some(url) = &links.dribbble {
                a { class: "social-link", href: "{url}", target: "_blank", rel: "noopener",
                    Icon { icon: FaDribbble, width: 18, height: 18 }
                }
            }
            if let Some(url) = &links.website {
                a { class: "social-link", href: "{url}", target: "_blank", rel: "noopener",
                    Icon { icon: FaGlobe, width: 18, height: 18 }
                }
            }
        }
    }
}
