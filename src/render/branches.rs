// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::BranchSummary;

use super::row::{push_segment, SegmentKind, SegmentLine};
use super::style::GraphStyle;

/// One line per branch: the current branch is marked with the style's commit glyph, and
/// diverged branches get an ` [N ahead, M behind]` suffix.
pub fn branch_segments(branches: &[BranchSummary], style: GraphStyle) -> Vec<SegmentLine> {
    let marker = style.glyphs().commit;
    branches.iter().map(|branch| branch_line(branch, marker)).collect()
}

fn branch_line(branch: &BranchSummary, marker: char) -> SegmentLine {
    let mut line = SegmentLine::new();
    let (kind, label) = if branch.is_current() {
        (SegmentKind::CurrentBranch, format!("{marker} {}", branch.name()))
    } else {
        (SegmentKind::Branch, format!("  {}", branch.name()))
    };
    push_segment(&mut line, kind, &label);

    if branch.has_divergence() {
        let mut ahead = itoa::Buffer::new();
        let mut behind = itoa::Buffer::new();
        push_segment(&mut line, SegmentKind::Plain, " [");
        push_segment(&mut line, SegmentKind::Ahead, ahead.format(branch.ahead()));
        push_segment(&mut line, SegmentKind::Ahead, " ahead");
        push_segment(&mut line, SegmentKind::Plain, ", ");
        push_segment(&mut line, SegmentKind::Behind, behind.format(branch.behind()));
        push_segment(&mut line, SegmentKind::Behind, " behind");
        push_segment(&mut line, SegmentKind::Plain, "]");
    }
    line
}
