//! The chart-specification contract handed to the rendering collaborator.
//!
//! Rendering itself is out of scope for this crate: reports produce a
//! [`ChartSpec`] plus a prepared table, and a renderer (plotly, a TUI, a
//! notebook) turns that into visual output. Category orderings that matter
//! for presentation are pinned in the spec rather than left to the renderer.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// The chart families used by the study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
    Box,
    Pie,
    Scatter,
    Histogram,
    Heatmap,
}

/// A renderer-agnostic chart description.
///
/// `x`/`y` bind columns of the accompanying table to the axes; for a pie
/// chart `x` is the name column and `y` the value column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct ChartSpec {
    pub kind: ChartKind,
    #[builder(into)]
    pub title: String,
    /// Column bound to the x axis (names column for pies).
    #[builder(into)]
    pub x: String,
    /// Column bound to the y axis (values column for pies).
    #[builder(into)]
    pub y: String,
    /// Column used for color grouping, if any.
    #[builder(into)]
    pub color: Option<String>,
    /// Discrete color assignments, in stable order.
    pub color_map: Option<Vec<(String, String)>>,
    /// Pinned ordering for the category axis, where ordering matters.
    pub category_order: Option<Vec<String>>,
}
