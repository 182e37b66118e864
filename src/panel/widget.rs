//! Leaf widgets that can sit inside a panel.
//!
//! The set is closed: the front-end knows how to draw exactly these, and
//! anything richer is a nested `Panel`.

use serde::Serialize;

use super::{Panel, RenderNode, Renderable};

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Button(Button),
    Collapse(Collapse),
    PromptArea(PromptArea),
    ParameterGroup(ParameterGroup),
    Panel(Panel),
}

impl Renderable for Widget {
    fn render(&self) -> RenderNode {
        match self {
            Self::Button(b) => b.render(),
            Self::Collapse(c) => c.render(),
            Self::PromptArea(p) => p.render(),
            Self::ParameterGroup(g) => g.render(),
            Self::Panel(p) => p.render(),
        }
    }
}

// =============================================================================
// BUTTON
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    /// Action identifier the front-end dispatches on click.
    pub action: String,
    pub tooltip: Option<String>,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self { label: label.into(), action: action.into(), tooltip: None }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

impl Renderable for Button {
    fn render(&self) -> RenderNode {
        RenderNode::Button { label: self.label.clone(), action: self.action.clone(), tooltip: self.tooltip.clone() }
    }
}

// =============================================================================
// COLLAPSE
// =============================================================================

/// Titled, collapsible wrapper around a nested panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Collapse {
    pub title: String,
    pub open: bool,
    pub body: Panel,
}

impl Collapse {
    #[must_use]
    pub fn new(title: impl Into<String>, body: Panel) -> Self {
        Self { title: title.into(), open: false, body }
    }

    #[must_use]
    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }
}

impl Renderable for Collapse {
    fn render(&self) -> RenderNode {
        RenderNode::Collapse { title: self.title.clone(), open: self.open, body: Box::new(self.body.render()) }
    }
}

// =============================================================================
// PROMPT AREA
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptArea {
    pub placeholder: String,
    pub rows: u16,
}

impl Renderable for PromptArea {
    fn render(&self) -> RenderNode {
        RenderNode::PromptArea { placeholder: self.placeholder.clone(), rows: self.rows }
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterKind {
    Number { min: f64, max: f64, step: f64, default: f64 },
    Choice { options: Vec<String>, default: String },
    Toggle { default: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: ParameterKind,
}

impl Parameter {
    #[must_use]
    pub fn number(name: &str, label: &str, min: f64, max: f64, step: f64, default: f64) -> Self {
        Self { name: name.into(), label: label.into(), kind: ParameterKind::Number { min, max, step, default } }
    }

    #[must_use]
    pub fn choice(name: &str, label: &str, options: &[&str], default: &str) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind: ParameterKind::Choice {
                options: options.iter().map(|o| (*o).to_owned()).collect(),
                default: default.into(),
            },
        }
    }

    #[must_use]
    pub fn toggle(name: &str, label: &str, default: bool) -> Self {
        Self { name: name.into(), label: label.into(), kind: ParameterKind::Toggle { default } }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGroup {
    pub title: String,
    pub parameters: Vec<Parameter>,
}

impl Renderable for ParameterGroup {
    fn render(&self) -> RenderNode {
        RenderNode::ParameterGroup { title: self.title.clone(), parameters: self.parameters.clone() }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<Button> for Widget {
    fn from(value: Button) -> Self {
        Self::Button(value)
    }
}

impl From<Collapse> for Widget {
    fn from(value: Collapse) -> Self {
        Self::Collapse(value)
    }
}

impl From<PromptArea> for Widget {
    fn from(value: PromptArea) -> Self {
        Self::PromptArea(value)
    }
}

impl From<ParameterGroup> for Widget {
    fn from(value: ParameterGroup) -> Self {
        Self::ParameterGroup(value)
    }
}

impl From<Panel> for Widget {
    fn from(value: Panel) -> Self {
        Self::Panel(value)
    }
}
