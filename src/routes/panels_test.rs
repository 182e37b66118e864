use super::*;
use crate::panel::{Direction, PanelConfig};
use crate::state::test_helpers;

#[tokio::test]
async fn list_panels_returns_catalog_names() {
    let Json(names) = list_panels().await;
    assert_eq!(names, catalog::PANEL_NAMES.to_vec());
}

#[tokio::test]
async fn get_panel_renders_named_panel() {
    let state = test_helpers::test_app_state();
    let Json(node) = get_panel(State(state), Path(catalog::TEXT_TO_IMAGE.to_owned())).await.unwrap();

    assert_eq!(node.child_keys().first().copied(), Some("prompt"));
}

#[tokio::test]
async fn get_panel_applies_configured_layout() {
    let mut state = test_helpers::test_app_state();
    state.panel = PanelConfig { direction: Direction::Row, spacing: 24 };

    let Json(node) = get_panel(State(state), Path(catalog::OPTIONS.to_owned())).await.unwrap();

    let RenderNode::Container { direction, spacing, .. } = node else {
        panic!("expected container");
    };
    assert_eq!(direction, Direction::Row);
    assert_eq!(spacing, 24);
}

#[tokio::test]
async fn get_unknown_panel_is_404() {
    let state = test_helpers::test_app_state();
    let err = get_panel(State(state), Path("nope".to_owned())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
