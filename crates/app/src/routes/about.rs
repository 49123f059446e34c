use dioxus::prelude::*;
use scenedeck_domain::BuildMode;

#[component]
pub fn AboutRoute() -> Element {
    let build_mode = use_context::<BuildMode>();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        section {
            class: "page page-about",
            h1 { "About" }
            dl {
                dt { "Version" }
                dd { "{version}" }
                dt { "Build" }
                dd { "{build_mode}" }
            }
        }
    }
}
