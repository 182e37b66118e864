//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the painting store behind its trait object and the panel layout
//! config. The two never share mutable state.

use std::sync::Arc;

use crate::panel::PanelConfig;
use crate::services::painting::PaintingStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PaintingStore>,
    pub panel: PanelConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn PaintingStore>, panel: PanelConfig) -> Self {
        Self { store, panel }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
