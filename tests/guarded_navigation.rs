//! Guarded navigation integration tests
//!
//! Navigation calls through a mounted bridge: the transition gate, the
//! composite operations and the navigation bar.

mod common;

use anyhow::Result;
use common::{Fixture, RecordingRenderer};
use nav_bridge::{
    styles, BarProps, BridgeConfig, BridgeError, Dispatch, NavigationFacade, NavigatorBridge,
    RouteRenderer, TransitionGate,
};
use nav_core::{Route, SceneConfig, TransitionKind, View};
use serde_json::json;
use std::sync::Arc;

fn gated_fixture(names: &[&str], gate: &TransitionGate) -> Fixture {
    common::init_tracing();
    let renderer = Arc::new(RecordingRenderer::default());
    let shared = renderer.clone();
    let bridge = NavigatorBridge::builder(BridgeConfig::default())
        .gate(gate.clone())
        .build(move |_| shared as Arc<dyn RouteRenderer>);
    Fixture::assemble(names, bridge, renderer)
}

#[test]
fn test_closed_gate_leaves_stack_untouched() -> Result<()> {
    let gate = TransitionGate::new();
    let fixture = gated_fixture(&["a", "b", "c"], &gate);
    fixture.mount()?;
    let focus_before = fixture.renderer.focus();

    gate.disable();
    let routes = &fixture.routes;
    let bridge = &fixture.bridge;
    let calls = [
        bridge.push(Route::new("x"))?,
        bridge.pop()?,
        bridge.replace(Route::new("x"))?,
        bridge.replace_at_index(Route::new("x"), 1)?,
        bridge.replace_previous(Route::new("x"))?,
        bridge.reset_to(Route::new("x"))?,
        bridge.immediately_reset_route_stack(vec![Route::new("x")])?,
        bridge.pop_to_route(&routes[0])?,
        bridge.pop_to_top()?,
        bridge.jump_back()?,
        bridge.jump_forward()?,
        bridge.jump_to(&routes[0])?,
        bridge.transition_to_top(Route::new("x"))?,
        bridge.pop_back(1)?,
    ];

    assert!(calls.iter().all(|dispatch| *dispatch == Dispatch::Suppressed));
    assert_eq!(fixture.names(), vec!["a", "b", "c"]);
    assert_eq!(fixture.renderer.focus(), focus_before);
    assert_eq!(fixture.renderer.renders(), vec!["a", "b", "c"]);
    assert!(fixture.navigator.last_transition().is_none());

    // Queries stay available
    assert_eq!(bridge.current_routes()?.len(), 3);

    gate.enable();
    assert_eq!(bridge.pop()?, Dispatch::Forwarded);
    assert_eq!(fixture.names(), vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_gate_toggled_through_bridge() -> Result<()> {
    let fixture = Fixture::new(&["a"]);
    fixture.mount()?;

    fixture.bridge.gate().set_disabled(true);
    assert!(!fixture.bridge.push(Route::new("b"))?.is_forwarded());
    fixture.bridge.gate().set_disabled(false);
    assert!(fixture.bridge.push(Route::new("b"))?.is_forwarded());
    assert_eq!(fixture.names(), vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_gate_checked_before_mount() {
    let gate = TransitionGate::new();
    let fixture = gated_fixture(&["a"], &gate);

    gate.disable();
    assert!(matches!(
        fixture.bridge.push(Route::new("b")),
        Ok(Dispatch::Suppressed)
    ));
    gate.enable();
    assert!(matches!(
        fixture.bridge.push(Route::new("b")),
        Err(BridgeError::NotMounted)
    ));
}

#[test]
fn test_replace_previous_and_pop_ignores_gate() -> Result<()> {
    let gate = TransitionGate::new();
    let fixture = gated_fixture(&["a", "b", "c"], &gate);
    fixture.mount()?;

    gate.disable();
    let dispatch = fixture.bridge.replace_previous_and_pop(Route::new("r"))?;

    assert_eq!(dispatch, Dispatch::Forwarded);
    assert_eq!(fixture.names(), vec!["a", "r"]);
    assert!(fixture.renderer.focus().contains(&"didfocus:r".to_string()));
    Ok(())
}

#[test]
fn test_pop_back_one_matches_pop() -> Result<()> {
    let popped = Fixture::new(&["a", "b", "c"]);
    popped.mount()?;
    popped.bridge.pop()?;

    let popped_back = Fixture::new(&["a", "b", "c"]);
    popped_back.mount()?;
    popped_back.bridge.pop_back(1)?;

    assert_eq!(popped.names(), popped_back.names());
    assert_eq!(popped_back.names(), vec!["a", "b"]);
    Ok(())
}

#[test]
fn test_pop_back_to_root() -> Result<()> {
    let fixture = Fixture::new(&["a", "b", "c"]);
    fixture.mount()?;

    assert!(fixture.bridge.pop_back(2)?.is_forwarded());
    assert_eq!(fixture.names(), vec!["a"]);
    let transition = fixture.navigator.last_transition().expect("presented route changed");
    assert_eq!(transition.kind, TransitionKind::Pop);
    assert!(transition.route.is_same(&fixture.routes[0]));
    Ok(())
}

#[test]
fn test_pop_back_zero_is_noop() -> Result<()> {
    let fixture = Fixture::new(&["a", "b"]);
    fixture.mount()?;

    assert!(fixture.bridge.pop_back(0)?.is_forwarded());
    assert_eq!(fixture.names(), vec!["a", "b"]);
    assert!(fixture.navigator.last_transition().is_none());
    Ok(())
}

#[test]
fn test_pop_back_out_of_range() -> Result<()> {
    let fixture = Fixture::new(&["a", "b", "c"]);
    fixture.mount()?;

    for n in [3, 4, 100] {
        match fixture.bridge.pop_back(n) {
            Err(BridgeError::PopBackOutOfRange { requested, depth }) => {
                assert_eq!(requested, n);
                assert_eq!(depth, 3);
            }
            other => panic!("expected out of range, got {:?}", other),
        }
    }
    assert_eq!(fixture.names(), vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_transition_to_top() -> Result<()> {
    let fixture = Fixture::new(&["a", "b", "c"]);
    fixture.mount()?;

    fixture.bridge.transition_to_top(Route::new("r"))?;

    assert_eq!(fixture.names(), vec!["r"]);
    assert_eq!(fixture.navigator.scene_count(), 1);

    // The new root took over the first-scene slot
    let first = fixture.bridge.first_scene().expect("root scene mounted");
    assert_eq!(first.props.get("route"), Some(&json!("r")));
    Ok(())
}

#[test]
fn test_jumps_keep_history() -> Result<()> {
    let fixture = Fixture::new(&["a", "b", "c"]);
    fixture.mount()?;

    fixture.bridge.jump_back()?;
    assert_eq!(fixture.navigator.presented_route().name(), "b");
    fixture.bridge.jump_to(&fixture.routes[0])?;
    assert_eq!(fixture.navigator.presented_route().name(), "a");
    fixture.bridge.jump_forward()?;
    assert_eq!(fixture.navigator.presented_route().name(), "b");

    assert_eq!(fixture.names(), vec!["a", "b", "c"]);
    assert_eq!(fixture.renderer.renders(), vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_navigator_errors_surface() -> Result<()> {
    let fixture = Fixture::new(&["a"]);
    fixture.mount()?;

    assert!(matches!(
        fixture.bridge.pop(),
        Err(BridgeError::Navigator(nav_core::NavigatorError::CannotPop))
    ));
    assert!(matches!(
        fixture.bridge.replace_previous(Route::new("x")),
        Err(BridgeError::Navigator(nav_core::NavigatorError::NoPreviousRoute))
    ));
    assert!(matches!(
        fixture.bridge.pop_to_route(&Route::new("stranger")),
        Err(BridgeError::Navigator(nav_core::NavigatorError::RouteNotFound(_)))
    ));
    Ok(())
}

#[test]
fn test_transition_uses_configured_scene() -> Result<()> {
    let fixture = Fixture::new(&["a"]);
    fixture.mount()?;

    fixture
        .bridge
        .push(Route::new("modal").with_scene_config(SceneConfig::FloatFromBottom))?;
    let transition = fixture.navigator.last_transition().expect("push transition");
    assert_eq!(transition.kind, TransitionKind::Push);
    assert_eq!(transition.config, SceneConfig::FloatFromBottom);

    fixture.bridge.pop()?;
    let transition = fixture.navigator.last_transition().expect("pop transition");
    assert_eq!(transition.config, SceneConfig::PushFromRight);
    Ok(())
}

#[test]
fn test_navigation_bar_follows_config() -> Result<()> {
    let fixture = Fixture::new(&["a"]);
    fixture.mount()?;

    let bar = fixture.bridge.render_navigation_bar().expect("bar shown by default");
    assert_eq!(bar.kind, "NavigationBar");
    assert_eq!(bar.prop("style"), Some(&serde_json::to_value(styles::bar())?));

    fixture.bridge.update_config(BridgeConfig {
        show_navigation_bar: false,
        ..BridgeConfig::default()
    });
    assert!(fixture.bridge.render_navigation_bar().is_none());

    // Props are still available for a hidden bar
    let props = fixture.bridge.build_bar_props();
    let title = props
        .route_mapper
        .title(&fixture.routes[0], 0, &fixture.routes)
        .expect("title view");
    assert_eq!(title.prop("text"), Some(&json!("a")));
    Ok(())
}

#[test]
fn test_custom_navigation_bar() -> Result<()> {
    common::init_tracing();
    let config = BridgeConfig::from_json(
        r##"{ "navigationBarStyle": { "backgroundColor": "#222222" } }"##,
    )?;
    let renderer = Arc::new(RecordingRenderer::default());
    let shared = renderer.clone();
    let bridge = NavigatorBridge::builder(config)
        .render_navigation_bar(|props: BarProps| -> Option<View> {
            Some(
                View::new("CustomBar")
                    .with_prop("background", props.style.background_color.unwrap_or_default()),
            )
        })
        .build(move |_| shared as Arc<dyn RouteRenderer>);
    let fixture = Fixture::assemble(&["a"], bridge, renderer);
    fixture.mount()?;

    let bar = fixture.bridge.render_navigation_bar().expect("custom bar");
    assert_eq!(bar.kind, "CustomBar");
    assert_eq!(bar.prop("background"), Some(&json!("#222222")));
    Ok(())
}

#[test]
fn test_renderer_styles_fixed_at_construction() -> Result<()> {
    common::init_tracing();
    let config = BridgeConfig::from_json(r##"{ "titleStyle": { "color": "#333333" } }"##)?;
    let renderer = Arc::new(RecordingRenderer::default());
    let shared = renderer.clone();
    let mut seen = None;
    let bridge = NavigatorBridge::builder(config).build(|resolved| {
        seen = Some(resolved.clone());
        shared as Arc<dyn RouteRenderer>
    });
    let seen = seen.expect("renderer built with styles");
    assert_eq!(seen.title_style.color.as_deref(), Some("#333333"));
    assert_eq!(&seen, bridge.renderer_styles());

    bridge.update_config(BridgeConfig::from_json(
        r##"{ "titleStyle": { "color": "#FF0000" }, "sceneStyle": { "backgroundColor": "#000000" } }"##,
    )?);

    assert_eq!(
        bridge.renderer_styles().title_style.color.as_deref(),
        Some("#333333")
    );
    assert_eq!(bridge.scene_style().background_color.as_deref(), Some("#000000"));
    Ok(())
}
