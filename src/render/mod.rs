// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for commit graphs and branch lists.
//!
//! Rows are built as typed segments first. Plain text, ratatui lines and ANSI strings are all
//! produced from those segments, so the colored and plain outputs always carry the same text.

use ratatui::text::Line;
use rayon::prelude::*;

use crate::config::{ConfigError, RenderConfig};
use crate::model::{BranchSummary, CommitNode};
use crate::theme::GraphTheme;

pub mod branches;
pub mod color;
pub mod grid;
pub mod row;
pub mod style;
mod text;

pub use branches::branch_segments;
pub use color::{ansi_line, colorize_line, strip_ansi};
pub use grid::{Cell, Frame, PaintedCell, CELLS_PER_LANE};
pub use row::{line_text, DetailLine, GraphRows, RenderRow, Segment, SegmentKind, SegmentLine};
pub use style::{
    Glyph, GlyphSet, GraphStyle, ParseGraphStyleError, Side, ASCII_GLYPHS, COMPACT_GLYPHS,
    UNICODE_GLYPHS,
};

/// Lazy row iterator over `commits`. Each call starts from an empty lane table.
pub fn render_rows<'a>(commits: &'a [CommitNode], config: &RenderConfig) -> GraphRows<'a> {
    GraphRows::new(commits, config)
}

pub fn render_plain(commits: &[CommitNode], config: &RenderConfig) -> Vec<String> {
    render_rows(commits, config).flat_map(|row| row.lines()).collect()
}

pub fn render_lines(
    commits: &[CommitNode],
    config: &RenderConfig,
    theme: &GraphTheme,
) -> Vec<Line<'static>> {
    render_rows(commits, config)
        .flat_map(|row| row.segments())
        .map(|line| colorize_line(&line, theme))
        .collect()
}

pub fn render_ansi(
    commits: &[CommitNode],
    config: &RenderConfig,
    theme: &GraphTheme,
) -> Vec<String> {
    render_rows(commits, config)
        .flat_map(|row| row.segments())
        .map(|line| ansi_line(&line, theme))
        .collect()
}

/// Renders `commits` as terminal lines: ANSI-colored when the config has a palette, plain
/// otherwise.
pub fn render_graph(
    commits: &[CommitNode],
    config: &RenderConfig,
) -> Result<Vec<String>, ConfigError> {
    Ok(match config.theme()? {
        Some(theme) => render_ansi(commits, config, &theme),
        None => render_plain(commits, config),
    })
}

pub fn render_branches(
    branches: &[BranchSummary],
    config: &RenderConfig,
) -> Result<Vec<String>, ConfigError> {
    let lines = branch_segments(branches, config.style);
    Ok(match config.theme()? {
        Some(theme) => lines.iter().map(|line| ansi_line(line, &theme)).collect(),
        None => lines.iter().map(|line| line_text(line)).collect(),
    })
}

/// Renders independent commit lists concurrently. Output order matches `views`.
pub fn render_views_parallel<V>(
    views: &[V],
    config: &RenderConfig,
) -> Result<Vec<Vec<String>>, ConfigError>
where
    V: AsRef<[CommitNode]> + Sync,
{
    let theme = config.theme()?;
    tracing::debug!(views = views.len(), "rendering views in parallel");
    Ok(views
        .par_iter()
        .map(|view| match &theme {
            Some(theme) => render_ansi(view.as_ref(), config, theme),
            None => render_plain(view.as_ref(), config),
        })
        .collect())
}
