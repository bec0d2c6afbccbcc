use dioxus::prelude::*;

use api::{ApiClient, Project};
use ui::{
    icons::FaLocationDot, EmptyState, Icon, ModalSelection, ProfessionBadge, ProjectCard,
    ProjectModal, SocialLinksRow,
};

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Projects,
    About,
}

/// Public profile page at `/u/:friendly_id`.
///
/// Profile and showcase load concurrently; neither fetch may assume the
/// other finished first, so each section renders its own loading state.
#[component]
pub fn Profile(friendly_id: String) -> Element {
    let client = use_context::<ApiClient>();
    let showcase_client = client.clone();
    let showcase_id = friendly_id.clone();

    let profile = use_resource(use_reactive((&friendly_id,), move |(friendly_id,)| {
        let client = client.clone();
        async move { client.get_user_profile(&friendly_id).await }
    }));
    let showcase = use_resource(use_reactive((&showcase_id,), move |(friendly_id,)| {
        let client = showcase_client.clone();
        async move { client.get_user_projects(&friendly_id).await }
    }));

    let mut tab = use_signal(|| ProfileTab::Projects);
    let mut selected = use_signal(ModalSelection::<Project>::default);
    let open_project = selected.read().current().cloned();

    rsx! {
        section {
            class: "profile-page",
            match &*profile.read() {
                None => rsx! {
                    div { class: "loading-placeholder", "Loading profile..." }
                },
                Some(None) => rsx! {
                    EmptyState { message: "User profile not found".to_string() }
                },
                Some(Some(user)) => rsx! {
                    header {
                        class: "profile-header",
                        if let Some(picture) = &user.profile_picture {
                            img { class: "profile-avatar", src: "{picture}", alt: "{user.username}" }
                        }
                        h1 { "{user.username}" }
                        ProfessionBadge { profession: user.profession.clone() }
                        if let Some(country) = &user.country_origin {
                            span {
                                class: "profile-country",
                                Icon { icon: FaLocationDot, width: 14, height: 14 }
                                "{country}"
                            }
                        }
                        SocialLinksRow { links: user.social_links.clone() }
                    }
                    nav {
                        class: "profile-tabs",
                        button {
                            class: if tab() == ProfileTab::Projects { "profile-tab profile-tab--active" } else { "profile-tab" },
                            onclick: move |_| tab.set(ProfileTab::Projects),
                            "Projects"
                        }
                        button {
                            class: if tab() == ProfileTab::About { "profile-tab profile-tab--active" } else { "profile-tab" },
                            onclick: move |_| tab.set(ProfileTab::About),
                            "About"
                        }
                    }
                    match tab() {
                        ProfileTab::Projects => rsx! {
                            match &*showcase.read() {
                                None => rsx! {
                                    div { class: "loading-placeholder", "Loading projects..." }
                                },
                                Some(result) => {
                                    let projects = result.as_ref().map(|s| s.projects.clone()).unwrap_or_default();
                                    rsx! {
                                        if projects.is_empty() {
                                            EmptyState { message: "No projects found".to_string() }
                                        } else {
                                            div {
                                                class: "card-grid",
                                                for project in projects {
                                                    ProjectCard {
                                                        key: "{project.id}",
                                                        project: project.clone(),
                                                        on_select: move |_| selected.write().select(project.clone()),
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        ProfileTab::About => rsx! {
                            div {
                                class: "profile-about",
                                if let Some(bio) = &user.bio {
                                    p { class: "profile-bio", "{bio}" }
                                } else {
                                    p { class: "profile-bio profile-bio--empty", "This member has not written a bio yet." }
                                }
                                if let Some(age) = user.age {
                                    p { class: "profile-age", "Age: {age}" }
                                }
                                div {
                                    class: "skill-list",
                                    for skill in &user.skills {
                                        span { key: "{skill}", class: "skill-chip", "{skill}" }
                                    }
                                }
                            }
                        },
                    }
                },
            }
            if let Some(project) = open_project {
                ProjectModal {
                    project,
                    on_close: move |_| selected.write().close(),
                }
            }
            Link {
                class: "profile-back-link",
                to: Route::Users { params: crate::query::ListQuery::first_page() },
                "Back to members"
            }
        }
    }
}
