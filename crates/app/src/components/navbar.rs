//! Navigation bar
//!
//! Title, section links, theme toggle and the current notice.

use dioxus::prelude::*;
use scenedeck_domain::{Notice, NoticeLevel};

use crate::routes::Route;
use crate::state::use_app_state;

/// Navbar entries in display order
fn nav_links() -> [(Route, &'static str); 3] {
    [
        (Route::HomeRoute {}, "Home"),
        (Route::SceneListRoute {}, "Scenes"),
        (Route::AboutRoute {}, "About"),
    ]
}

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Error => "notice notice-error",
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut app = use_app_state();
    let route = use_route::<Route>();

    let title = app.title.read().clone();
    let next_theme = app.theme.read().toggled();
    let notice = app.notice.read().clone();

    let current = route.section();
    let links = nav_links().map(|(target, label)| {
        let class = if target.section() == current {
            "nav-link active"
        } else {
            "nav-link"
        };
        (target, label, class)
    });

    rsx! {
        nav {
            class: "navbar",
            "data-layer": "navbar",

            span { class: "navbar-title", "{title}" }

            ul {
                class: "navbar-links",
                for (target, label, class) in links {
                    li {
                        key: "{label}",
                        Link {
                            class,
                            to: target,
                            "{label}"
                        }
                    }
                }
            }

            button {
                class: "theme-toggle",
                onclick: move |_| app.toggle_theme(),
                "{next_theme} theme"
            }

            if let Some(notice) = notice {
                NoticeBanner { notice }
            }
        }
    }
}

#[component]
fn NoticeBanner(notice: Notice) -> Element {
    let mut app = use_app_state();

    rsx! {
        div {
            class: notice_class(notice.level),
            role: "status",
            span { "{notice.message}" }
            button {
                class: "notice-dismiss",
                onclick: move |_| app.clear_notice(),
                "×"
            }
        }
    }
}
