//! Subtree-scoped render-failure containment.

use dioxus::prelude::*;

/// Catches render-time failures thrown by descendants and swaps the
/// subtree for a static fallback for the remainder of the mount. There
/// is no retry; a route change remounts the boundary and clears it.
#[component]
pub fn AppErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                tracing::error!("render failure, showing fallback: {:?}", errors.errors());
                rsx! {
                    div {
                        class: "error-fallback",
                        h2 { "Something went wrong" }
                        p { "This section failed to render. Try another page or reload." }
                    }
                }
            },
            {children}
        }
    }
}
