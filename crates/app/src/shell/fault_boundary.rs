//! Fault-isolation boundary
//!
//! Wraps Dioxus' `ErrorBoundary`: a descendant that fails its render is
//! replaced by [`ErrorFallback`] and the failure stops here. A failure is either
//! an `Err` returned from a render or, on native targets, a panic (Dioxus runs
//! each render under `catch_unwind`). On wasm32 a panic aborts the module.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_history::{history, History};
use scenedeck_domain::BuildMode;

/// Path the shell returns to when the user retries after a failure.
pub const RECOVERY_PATH: &str = "/";

/// Catches render failures from everything beneath it.
///
/// No automatic retry happens; the fallback offers a manual "Try again".
#[component]
pub fn FaultBoundary(build_mode: BuildMode, children: Element) -> Element {
    let history = use_hook(history);

    rsx! {
        div {
            class: "fault-boundary",
            "data-layer": "fault-boundary",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| {
                    let details = errors
                        .error()
                        .map(|error| error.to_string())
                        .unwrap_or_default();
                    let recovery = Recovery {
                        errors,
                        history: history.clone(),
                    };

                    #[cfg(test)]
                    tests::publish(&recovery);

                    rsx! {
                        ErrorFallback {
                            build_mode,
                            details,
                            on_retry: move |_| recovery.retry(),
                        }
                    }
                },
                {children}
            }
        }
    }
}

/// What "Try again" does for a contained failure.
///
/// The route that failed would most likely fail again, so the shell goes back
/// to [`RECOVERY_PATH`] before the subtree is rebuilt.
#[derive(Clone)]
pub struct Recovery {
    errors: ErrorContext,
    history: Rc<dyn History>,
}

impl Recovery {
    pub fn retry(&self) {
        tracing::info!(path = RECOVERY_PATH, "Retrying after contained render failure");
        self.history.replace(RECOVERY_PATH.to_string());
        self.errors.clear_errors();
    }
}

/// Props for ErrorFallback
#[derive(Props, Clone, PartialEq)]
pub struct ErrorFallbackProps {
    pub build_mode: BuildMode,
    /// Captured error details, only shown in development builds
    pub details: String,
    pub on_retry: EventHandler<()>,
}

#[component]
pub fn ErrorFallback(props: ErrorFallbackProps) -> Element {
    let details = props.details.clone();
    use_hook(move || {
        tracing::error!(%details, "Render failure contained by fault boundary");
    });

    rsx! {
        div {
            class: "error-fallback",
            role: "alert",
            "data-layer": "error-fallback",

            h2 { "Something went wrong" }
            p {
                "This part of SceneDeck failed to render. The rest of the application is still running."
            }

            if props.build_mode.is_development() {
                pre {
                    class: "error-details",
                    "{props.details}"
                }
            }

            button {
                class: "retry-button",
                onclick: move |_| props.on_retry.call(()),
                "Try again"
            }
        }
    }
}
