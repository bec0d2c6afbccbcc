//! Profession display dispatch.
//!
//! The API stores `profession` as a free-form string; the UI maps it onto
//! a closed set of display descriptors (icon + accent class + label) with
//! an explicit fallback for anything unrecognized.

use crate::icons::{FaBullhorn, FaCamera, FaCode, FaMusic, FaPalette, FaPenNib, FaUser};
use crate::Icon;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profession {
    Developer,
    Designer,
    Photographer,
    Marketer,
    Writer,
    Musician,
    /// Fallback for unrecognized or missing professions.
    Other,
}

impl Profession {
    /// Case-insensitive parse of the free-form field.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "developer" | "software developer" | "software engineer" | "engineer" => {
                Profession::Developer
            }
            "designer" | "ui/ux designer" | "graphic designer" | "product designer" => {
                Profession::Designer
            }
            "photographer" => Profession::Photographer,
            "marketer" | "marketing" | "digital marketer" => Profession::Marketer,
            "writer" | "copywriter" | "content writer" => Profession::Writer,
            "musician" | "music producer" => Profession::Musician,
            _ => Profession::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Profession::Developer => "Developer",
            Profession::Designer => "Designer",
            Profession::Photographer => "Photographer",
            Profession::Marketer => "Marketer",
            Profession::Writer => "Writer",
            Profession::Musician => "Musician",
            Profession::Other => "Creative",
        }
    }

    /// CSS accent class for the badge.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Profession::Developer => "profession--developer",
            Profession::Designer => "profession--designer",
            Profession::Photographer => "profession--photographer",
            Profession::Marketer => "profession--marketer",
            Profession::Writer => "profession--writer",
            Profession::Musician => "profession--musician",
            Profession::Other => "profession--other",
        }
    }

    pub fn icon(&self) -> Element {
        match self {
            Profession::Developer => rsx! { Icon { icon: FaCode, width: 12, height: 12 } },
            Profession::Designer => rsx! { Icon { icon: FaPalette, width: 12, height: 12 } },
            Profession::Photographer => rsx! { Icon { icon: FaCamera, width: 12, height: 12 } },
            Profession::Marketer => rsx! { Icon { icon: FaBullhorn, width: 12, height: 12 } },
            Profession::Writer => rsx! { Icon { icon: FaPenNib, width: 12, height: 12 } },
            Profession::Musician => rsx! { Icon { icon: FaMusic, width: 12, height: 12 } },
            Profession::Other => rsx! { Icon { icon: FaUser, width: 12, height: 12 } },
        }
    }
}

/// Badge rendering a user's profession. Shows the raw label when present
/// so "UI/UX Designer" is not flattened to "Designer"; the icon and
/// accent come from the parsed category.
#[component]
pub fn ProfessionBadge(profession: Option<String>) -> Element {
    let raw = profession.unwrap_or_default();
    let parsed = Profession::parse(&raw);
    let label = if raw.trim().is_empty() {
        parsed.label().to_string()
    } else {
        raw
    };

    rsx! {
        span {
            class: "profession-badge {parsed.accent_class()}",
            {parsed.icon()}
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_professions_case_insensitively() {
        assert_eq!(Profession::parse("Developer"), Profession::Developer);
        assert_eq!(Profession::parse("  software engineer "), Profession::Developer);
        assert_eq!(Profession::parse("UI/UX Designer"), Profession::Designer);
        assert_eq!(Profession::parse("PHOTOGRAPHER"), Profession::Photographer);
    }

    #[test]
    fn unknown_values_fall_back_to_other() {
        assert_eq!(Profession::parse("astronaut"), Profession::Other);
        assert_eq!(Profession::parse(""), Profession::Other);
        assert_eq!(Profession::Other.label(), "Creative");
    }
}
