//! Panel composition for the image-generation editor.
//!
//! DESIGN
//! ======
//! A `Panel` is a static, ordered list of keyed sections. Composition is a
//! pure function of that list and an explicit `PanelConfig`: rendering walks
//! the sections in insertion order and emits a `RenderNode` tree the
//! front-end draws as-is. Nothing here holds state between renders.
//!
//! Section keys are checked for uniqueness when the panel is built, so a
//! constructed `Panel` can always be rendered without failure.

pub mod catalog;
pub mod widget;

use std::collections::HashSet;

use serde::Serialize;

pub use widget::{Button, Collapse, Parameter, ParameterGroup, PromptArea, Widget};

// =============================================================================
// CONFIG
// =============================================================================

/// Main axis along which a panel stacks its sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// Layout knobs passed into every composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelConfig {
    pub direction: Direction,
    /// Uniform gap between sections, in layout units chosen by the renderer.
    pub spacing: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { direction: Direction::Column, spacing: crate::config::DEFAULT_PANEL_SPACING }
    }
}

impl PanelConfig {
    /// Same spacing, different axis.
    #[must_use]
    pub fn with_direction(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("duplicate section key '{key}' in panel '{panel}'")]
    DuplicateKey { panel: String, key: String },
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
}

// =============================================================================
// RENDER TREE
// =============================================================================

/// Anything that can produce a render tree node.
pub trait Renderable {
    fn render(&self) -> RenderNode;
}

/// Output of a composition. Serialized verbatim for the front-end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    Container {
        key: String,
        direction: Direction,
        spacing: u16,
        children: Vec<RenderedSection>,
    },
    Button {
        label: String,
        action: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tooltip: Option<String>,
    },
    Collapse {
        title: String,
        open: bool,
        body: Box<RenderNode>,
    },
    PromptArea {
        placeholder: String,
        rows: u16,
    },
    ParameterGroup {
        title: String,
        parameters: Vec<Parameter>,
    },
}

/// One child of a rendered container, tagged with its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub key: String,
    pub order: usize,
    pub node: RenderNode,
}

#[cfg(test)]
impl RenderNode {
    /// Child keys of a container in render order. Empty for leaf nodes.
    #[must_use]
    pub fn child_keys(&self) -> Vec<&str> {
        match self {
            Self::Container { children, .. } => children.iter().map(|c| c.key.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// PANEL
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub key: String,
    pub widget: Widget,
}

/// A validated, immutable composition of sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    key: String,
    config: PanelConfig,
    sections: Vec<Section>,
}

impl Panel {
    #[must_use]
    pub fn builder(key: impl Into<String>, config: PanelConfig) -> PanelBuilder {
        PanelBuilder { key: key.into(), config, sections: Vec::new() }
    }
}

#[cfg(test)]
impl Panel {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> PanelConfig {
        self.config
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Renderable for Panel {
    fn render(&self) -> RenderNode {
        let children = self
            .sections
            .iter()
            .enumerate()
            .map(|(order, section)| RenderedSection { key: section.key.clone(), order, node: section.widget.render() })
            .collect();

        RenderNode::Container {
            key: self.key.clone(),
            direction: self.config.direction,
            spacing: self.config.spacing,
            children,
        }
    }
}

pub struct PanelBuilder {
    key: String,
    config: PanelConfig,
    sections: Vec<Section>,
}

impl PanelBuilder {
    /// Append a section. Order of calls is render order.
    #[must_use]
    pub fn section(mut self, key: impl Into<String>, widget: impl Into<Widget>) -> Self {
        self.sections.push(Section { key: key.into(), widget: widget.into() });
        self
    }

    /// Finish the panel.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::DuplicateKey` if two sections share a key.
    pub fn build(self) -> Result<Panel, PanelError> {
        let mut seen = HashSet::with_capacity(self.sections.len());
        for section in &self.sections {
            if !seen.insert(section.key.as_str()) {
                return Err(PanelError::DuplicateKey { panel: self.key.clone(), key: section.key.clone() });
            }
        }
        Ok(Panel { key: self.key, config: self.config, sections: self.sections })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
