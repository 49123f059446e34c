use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use dioxus_history::{History, MemoryHistory};
use scenedeck_domain::{BuildMode, Notice, SceneId, Theme};

use super::fault_boundary::tests::RecoverySlot;
use super::*;
use crate::lifecycle::{
    MockProviderObserver, ProviderKind, ProviderObserver, SharedObserver, TracingObserver,
};
use crate::state::{
    use_app_state, use_scene_state, AppSeed, AppState, AppStateProvider, SceneStateProvider,
};

// =============================================================================
// Harness
// =============================================================================

fn shell_dom(build_mode: BuildMode, seed: AppSeed, path: &str, observer: SharedObserver) -> VirtualDom {
    let props = ApplicationShellProps::builder()
        .build_mode(build_mode)
        .seed(seed)
        .build();
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));

    VirtualDom::new_with_props(ApplicationShell, props)
        .with_root_context(history)
        .with_root_context(observer)
}

/// Initial build, then one pass over scopes dirtied by it (error boundaries
/// switch to their fallback on that pass).
fn render(dom: &mut VirtualDom) -> String {
    dom.rebuild_in_place();
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}

fn render_shell(build_mode: BuildMode, path: &str) -> String {
    let mut dom = shell_dom(
        build_mode,
        AppSeed::default(),
        path,
        Arc::new(TracingObserver),
    );
    render(&mut dom)
}

fn layer_marker(layer: &str) -> String {
    format!("data-layer=\"{layer}\"")
}

fn layer_count(html: &str, layer: &str) -> usize {
    html.matches(&layer_marker(layer)).count()
}

fn layer_position(html: &str, layer: &str) -> usize {
    html.find(&layer_marker(layer))
        .unwrap_or_else(|| panic!("layer {layer} missing from {html}"))
}

#[derive(Default)]
struct CountingObserver {
    mounts: Mutex<Vec<ProviderKind>>,
    releases: Mutex<Vec<ProviderKind>>,
}

impl CountingObserver {
    fn mounts_of(&self, kind: ProviderKind) -> usize {
        self.mounts
            .lock()
            .expect("mounts lock")
            .iter()
            .filter(|k| **k == kind)
            .count()
    }

    fn releases_of(&self, kind: ProviderKind) -> usize {
        self.releases
            .lock()
            .expect("releases lock")
            .iter()
            .filter(|k| **k == kind)
            .count()
    }
}

impl ProviderObserver for CountingObserver {
    fn on_mount(&self, kind: ProviderKind) {
        self.mounts.lock().expect("mounts lock").push(kind);
    }

    fn on_release(&self, kind: ProviderKind) {
        self.releases.lock().expect("releases lock").push(kind);
    }
}

// =============================================================================
// Debug panel inclusion
// =============================================================================

#[test]
fn development_build_renders_exactly_one_debug_panel() {
    for path in ["/", "/scenes", "/about", "/no/such/page"] {
        let html = render_shell(BuildMode::Development, path);
        assert_eq!(layer_count(&html, "debug-panel"), 1, "path {path}: {html}");
    }
}

#[test]
fn production_build_renders_no_debug_panel() {
    for path in ["/", "/scenes", "/about", "/no/such/page"] {
        let html = render_shell(BuildMode::Production, path);
        assert_eq!(layer_count(&html, "debug-panel"), 0, "path {path}");
        assert!(!html.contains("debug-panel"), "path {path}: {html}");
        assert_eq!(layer_count(&html, "navbar"), 1);
    }
}

// =============================================================================
// Nesting order
// =============================================================================

#[test]
fn layers_nest_in_fixed_order() {
    let html = render_shell(BuildMode::Development, "/");

    let order = [
        "fault-boundary",
        "app-state",
        "scene-state",
        "frame",
        "navbar",
        "content",
        "debug-panel",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|layer| layer_position(&html, layer))
        .collect();

    assert!(
        positions.windows(2).all(|pair| pair[0] < pair[1]),
        "unexpected layer order {positions:?} in {html}"
    );
    for layer in order {
        assert_eq!(layer_count(&html, layer), 1, "layer {layer}");
    }
}

#[test]
fn routed_page_renders_inside_content() {
    let html = render_shell(BuildMode::Production, "/about");
    let content = layer_position(&html, "content");
    let page = html.find("page-about").expect("about page rendered");
    assert!(content < page);
    assert!(html.contains("production"));
}

#[test]
fn seed_theme_is_applied_to_frame() {
    let seed = AppSeed {
        title: "Stage Left".to_string(),
        theme: Theme::Light,
    };
    let mut dom = shell_dom(BuildMode::Production, seed, "/", Arc::new(TracingObserver));
    let html = render(&mut dom);

    assert!(html.contains("theme-light"));
    assert!(html.contains("Stage Left"));
}

// =============================================================================
// Fault containment
// =============================================================================

#[test]
fn malformed_scene_id_is_contained_by_boundary() {
    let html = render_shell(BuildMode::Production, "/scenes/not-a-uuid");

    assert_eq!(layer_count(&html, "fault-boundary"), 1);
    assert_eq!(layer_count(&html, "error-fallback"), 1);
    assert_eq!(layer_count(&html, "frame"), 0);
    assert!(html.contains("Something went wrong"));
    assert!(!html.contains("error-details"));
}

#[test]
fn development_fallback_shows_error_details() {
    let html = render_shell(BuildMode::Development, "/scenes/not-a-uuid");

    assert_eq!(layer_count(&html, "error-fallback"), 1);
    assert!(html.contains("error-details"));
    assert!(html.contains("Invalid scene id"), "{html}");
    assert!(!html.contains("ErrorContext"), "{html}");
}

#[component]
fn PanicsOnRender() -> Element {
    panic!("scene renderer exploded");
}

#[test]
fn panicking_descendant_is_contained_by_boundary() {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path("/"));
    let mut dom = VirtualDom::new(|| {
        rsx! {
            FaultBoundary {
                build_mode: BuildMode::Development,
                PanicsOnRender {}
            }
        }
    })
    .with_root_context(history);
    let html = render(&mut dom);

    assert_eq!(layer_count(&html, "fault-boundary"), 1);
    assert_eq!(layer_count(&html, "error-fallback"), 1);
    assert!(html.contains("error-details"));
}

#[test]
fn unknown_scene_renders_inline_not_found() {
    let path = format!("/scenes/{}", SceneId::new());
    let html = render_shell(BuildMode::Production, &path);

    assert_eq!(layer_count(&html, "error-fallback"), 0);
    assert_eq!(layer_count(&html, "navbar"), 1);
    assert!(html.contains("Scene not found"));
}

#[test]
fn unknown_path_renders_not_found_page() {
    let html = render_shell(BuildMode::Production, "/no/such/page");

    assert_eq!(layer_count(&html, "error-fallback"), 0);
    assert!(html.contains("Page not found"));
    assert!(html.contains("/no/such/page"));
}

#[test]
fn app_state_failure_never_mounts_scene_state() {
    // Neither provider may report a mount or a release.
    let mut observer = MockProviderObserver::new();
    observer.expect_on_mount().never();
    observer.expect_on_release().never();

    let seed = AppSeed {
        title: "   ".to_string(),
        theme: Theme::Dark,
    };
    let mut dom = shell_dom(BuildMode::Development, seed, "/", Arc::new(observer));
    let html = render(&mut dom);

    assert_eq!(layer_count(&html, "error-fallback"), 1);
    assert_eq!(layer_count(&html, "app-state"), 0);
    assert_eq!(layer_count(&html, "scene-state"), 0);
    assert_eq!(layer_count(&html, "debug-panel"), 0);

    drop(dom);
}

// =============================================================================
// Retry after a contained failure
// =============================================================================

/// Fires the fallback's "Try again" action and processes the re-render.
fn retry(dom: &mut VirtualDom, slot: &RecoverySlot) -> String {
    let recovery = slot.borrow().clone().expect("fallback published its recovery");
    dom.in_runtime(|| recovery.retry());
    dom.render_immediate(&mut NoOpMutations);
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}

#[test]
fn retry_returns_to_home_and_remounts_providers() {
    let observer = Arc::new(CountingObserver::default());
    let slot = RecoverySlot::default();
    let mut dom = shell_dom(
        BuildMode::Production,
        AppSeed::default(),
        "/scenes/not-a-uuid",
        observer.clone() as SharedObserver,
    )
    .with_root_context(slot.clone());

    let html = render(&mut dom);
    assert_eq!(layer_count(&html, "error-fallback"), 1);

    let html = retry(&mut dom, &slot);
    assert_eq!(layer_count(&html, "error-fallback"), 0, "{html}");
    assert_eq!(layer_count(&html, "frame"), 1, "{html}");
    assert!(html.contains("page-home"), "{html}");

    // The failed cycle has been released; the new one is still live.
    for kind in [ProviderKind::AppState, ProviderKind::SceneState] {
        assert_eq!(
            observer.mounts_of(kind),
            observer.releases_of(kind) + 1,
            "{kind:?} before drop"
        );
    }

    drop(dom);

    for kind in [ProviderKind::AppState, ProviderKind::SceneState] {
        assert_eq!(
            observer.mounts_of(kind),
            observer.releases_of(kind),
            "{kind:?} after drop"
        );
    }
}

// =============================================================================
// Provider lifecycle
// =============================================================================

#[test]
fn mount_cycle_releases_each_provider_once() {
    let observer = Arc::new(CountingObserver::default());
    let mut dom = shell_dom(
        BuildMode::Development,
        AppSeed::default(),
        "/scenes",
        observer.clone() as SharedObserver,
    );
    render(&mut dom);

    for kind in [ProviderKind::AppState, ProviderKind::SceneState] {
        assert_eq!(observer.mounts_of(kind), 1, "{kind:?} mounts");
        assert_eq!(observer.releases_of(kind), 0, "{kind:?} releases");
    }

    drop(dom);

    for kind in [ProviderKind::AppState, ProviderKind::SceneState] {
        assert_eq!(observer.mounts_of(kind), 1, "{kind:?} mounts");
        assert_eq!(observer.releases_of(kind), 1, "{kind:?} releases");
    }
}

#[test]
fn boundary_fallback_releases_mounted_providers() {
    let observer = Arc::new(CountingObserver::default());
    let mut dom = shell_dom(
        BuildMode::Production,
        AppSeed::default(),
        "/scenes/not-a-uuid",
        observer.clone() as SharedObserver,
    );
    let html = render(&mut dom);
    assert_eq!(layer_count(&html, "error-fallback"), 1);

    drop(dom);

    for kind in [ProviderKind::AppState, ProviderKind::SceneState] {
        assert_eq!(
            observer.mounts_of(kind),
            observer.releases_of(kind),
            "{kind:?} mount/release imbalance"
        );
    }
}

// =============================================================================
// Scene state through the providers
// =============================================================================

#[component]
fn SceneScript() -> Element {
    let mut scenes = use_scene_state();
    let app = use_app_state();

    let summary = use_hook(move || {
        let harbor = scenes.add_scene("Harbor", "fog").expect("valid scene");
        scenes.add_scene("Market", "").expect("valid scene");
        let duplicate_rejected = scenes.add_scene(" harbor ", "").is_err();
        scenes.select(harbor).expect("known scene");
        let notice = app
            .notice
            .peek()
            .as_ref()
            .map(|notice| notice.message.clone())
            .unwrap_or_default();
        let removed = scenes.remove_scene(harbor);
        format!(
            "count={} duplicate_rejected={} removed={} active={} notice=[{}]",
            scenes.scene_count(),
            duplicate_rejected,
            removed,
            scenes.active_scene().is_some(),
            notice,
        )
    });

    rsx! {
        pre { "{summary}" }
    }
}

#[component]
fn ProviderHarness() -> Element {
    rsx! {
        AppStateProvider {
            seed: AppSeed::default(),
            SceneStateProvider {
                SceneScript {}
            }
        }
    }
}

#[test]
fn scene_state_reports_to_app_state() {
    let mut dom = VirtualDom::new(ProviderHarness);
    let html = render(&mut dom);

    assert!(
        html.contains("count=1 duplicate_rejected=true removed=true active=false notice=[Active scene: Harbor]"),
        "{html}"
    );
}

// =============================================================================
// Shell reacting to application state
// =============================================================================

type AppStateSlot = Rc<RefCell<Option<AppState>>>;

#[component]
fn CaptureAppState() -> Element {
    let app = use_app_state();
    use_hook(move || {
        if let Some(slot) = try_consume_context::<AppStateSlot>() {
            *slot.borrow_mut() = Some(app);
        }
    });
    rsx! {}
}

/// The shell's providers and router, with a hook that hands the test the live
/// application state.
#[component]
fn CapturingShell() -> Element {
    use_context_provider(|| BuildMode::Production);
    rsx! {
        AppStateProvider {
            seed: AppSeed::default(),
            SceneStateProvider {
                CaptureAppState {}
                Router::<Route> {}
            }
        }
    }
}

fn capturing_dom(path: &str) -> (VirtualDom, AppStateSlot) {
    let slot = AppStateSlot::default();
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let dom = VirtualDom::new(CapturingShell)
        .with_root_context(history)
        .with_root_context(slot.clone());
    (dom, slot)
}

fn captured(slot: &AppStateSlot) -> AppState {
    slot.borrow().expect("app state captured on first render")
}

fn rerender(dom: &mut VirtualDom) -> String {
    dom.render_immediate(&mut NoOpMutations);
    dioxus_ssr::render(dom)
}

#[test]
fn toggling_theme_restyles_the_frame() {
    let (mut dom, slot) = capturing_dom("/");
    let html = render(&mut dom);
    assert!(html.contains("theme-dark"), "{html}");

    let mut app = captured(&slot);
    dom.in_runtime(|| app.toggle_theme());
    let html = rerender(&mut dom);

    assert!(html.contains("theme-light"), "{html}");
    assert!(!html.contains("theme-dark"), "{html}");
    assert!(html.contains("Dark theme"), "{html}");
}

#[test]
fn cleared_notice_leaves_the_navbar() {
    let (mut dom, slot) = capturing_dom("/");
    render(&mut dom);

    let mut app = captured(&slot);
    dom.in_runtime(|| app.notify(Notice::info("Saved the running order")));
    let html = rerender(&mut dom);
    assert!(html.contains("Saved the running order"), "{html}");
    assert!(html.contains("notice-dismiss"), "{html}");

    dom.in_runtime(|| app.clear_notice());
    let html = rerender(&mut dom);
    assert!(!html.contains("Saved the running order"), "{html}");
    assert!(!html.contains("notice-dismiss"), "{html}");
}

#[test]
fn scene_detail_highlights_the_scenes_link() {
    let path = format!("/scenes/{}", SceneId::new());
    let html = render_shell(BuildMode::Production, &path);

    assert_eq!(html.matches("nav-link active").count(), 1, "{html}");
    let active = html.find("nav-link active").expect("active link");
    let link_end = active + html[active..].find("</a>").expect("closing tag");
    assert!(html[active..link_end].contains("Scenes"), "{html}");
}
