//! SceneDeck - composition root binary.

use scenedeck_app::ShellConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let dotenv_failures = scenedeck_app::config::load_dotenv_from_repo_root();

    scenedeck_app::logging::init();

    #[cfg(not(target_arch = "wasm32"))]
    for failure in dotenv_failures {
        tracing::warn!(
            path = %failure.path.display(),
            error = %failure.error,
            "Failed to load dotenv file"
        );
    }

    // Build mode is fixed from here on; the shell only ever receives it by value.
    let config = ShellConfig::from_env();
    tracing::info!(
        build_mode = %config.build_mode,
        title = %config.title,
        "Starting SceneDeck"
    );

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title(config.title.clone());
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder.with_context(config).launch(scenedeck_app::app);
}
