// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lanegraph: commit-graph lane layout and text rendering.
//!
//! Takes an ordered list of already-parsed commits (newest first) and draws the
//! `git log --graph`-style lane picture next to refs, hashes and messages.
//!
//! ```
//! use lanegraph::{render_plain, CommitNode, RenderConfig};
//!
//! let commits = vec![
//!     CommitNode::new("b2", ["a1"]).with_message("Second"),
//!     CommitNode::new("a1", Vec::<&str>::new()).with_message("First"),
//! ];
//! let lines = render_plain(&commits, &RenderConfig::default());
//! assert_eq!(lines, vec!["●  b2 Second", "●  a1 First"]);
//! ```

pub mod config;
pub mod demo;
pub mod layout;
pub mod model;
pub mod render;
pub mod theme;

pub use config::{ConfigError, RenderConfig};
pub use model::{BranchSummary, CommitNode};
pub use render::{
    render_ansi, render_branches, render_graph, render_lines, render_plain, render_rows,
    render_views_parallel, GraphRows, GraphStyle, RenderRow,
};
pub use theme::{GraphTheme, PaletteError};
