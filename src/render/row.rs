// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::iter::FusedIterator;

use crate::config::RenderConfig;
use crate::layout::ColumnAllocator;
use crate::model::CommitNode;

use super::grid::{painted_to_string, Frame, PaintedCell};
use super::style::GlyphSet;
use super::text::{detail_lines, RowText, TextField};

/// What a piece of output text is, so decorators can style it without re-parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Graph glyphs belonging to the given lane.
    Lane(usize),
    /// Blank graph cells and field separators.
    Plain,
    Refs,
    Hash,
    Message,
    Meta,
    CurrentBranch,
    Branch,
    Ahead,
    Behind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// One output line as ordered, typed segments. Concatenating the texts gives the plain line.
pub type SegmentLine = Vec<Segment>;

pub fn line_text(line: &[Segment]) -> String {
    line.iter().map(|segment| segment.text.as_str()).collect()
}

/// Appends `text` to `line`, merging with the previous segment when the kind matches.
pub(crate) fn push_segment(line: &mut SegmentLine, kind: SegmentKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match line.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => line.push(Segment::new(kind, text)),
    }
}

fn push_graph(line: &mut SegmentLine, cells: &[PaintedCell]) {
    let mut buf = [0u8; 4];
    for cell in cells {
        let kind = cell.lane.map_or(SegmentKind::Plain, SegmentKind::Lane);
        push_segment(line, kind, cell.ch.encode_utf8(&mut buf));
    }
}

/// Author/date continuation line under a commit row (detailed mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    graph: Vec<PaintedCell>,
    text: String,
}

impl DetailLine {
    pub fn graph_prefix(&self) -> String {
        painted_to_string(&self.graph)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> SegmentLine {
        let mut line = SegmentLine::new();
        push_graph(&mut line, &self.graph);
        push_segment(&mut line, SegmentKind::Meta, &self.text);
        line
    }
}

/// Rendered output for one input commit: the graph row plus any detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    commit_lane: usize,
    drawn_lanes: Vec<usize>,
    graph: Vec<PaintedCell>,
    text: RowText,
    details: Vec<DetailLine>,
}

impl RenderRow {
    pub fn commit_lane(&self) -> usize {
        self.commit_lane
    }

    /// Lanes that show a glyph on the commit row.
    pub fn drawn_lanes(&self) -> &[usize] {
        &self.drawn_lanes
    }

    pub fn graph_cells(&self) -> &[PaintedCell] {
        &self.graph
    }

    pub fn graph_prefix(&self) -> String {
        painted_to_string(&self.graph)
    }

    pub fn refs(&self) -> Option<&str> {
        self.text.refs.as_deref()
    }

    pub fn short_hash(&self) -> &str {
        &self.text.hash
    }

    pub fn message(&self) -> &str {
        &self.text.message
    }

    pub fn meta(&self) -> Option<&str> {
        self.text.meta.as_deref()
    }

    pub fn is_truncated(&self) -> bool {
        self.text.truncated
    }

    pub fn details(&self) -> &[DetailLine] {
        &self.details
    }

    /// The commit line followed by its detail lines, as typed segments.
    pub fn segments(&self) -> Vec<SegmentLine> {
        let mut line = SegmentLine::new();
        push_graph(&mut line, &self.graph);
        push_segment(&mut line, SegmentKind::Plain, " ");
        for (idx, (field, text)) in self.text.fields().enumerate() {
            if idx > 0 {
                push_segment(&mut line, SegmentKind::Plain, " ");
            }
            let kind = match field {
                TextField::Refs => SegmentKind::Refs,
                TextField::Hash => SegmentKind::Hash,
                TextField::Message => SegmentKind::Message,
                TextField::Meta => SegmentKind::Meta,
            };
            push_segment(&mut line, kind, text);
        }

        let mut lines = Vec::with_capacity(1 + self.details.len());
        lines.push(line);
        lines.extend(self.details.iter().map(DetailLine::segments));
        lines
    }

    /// Plain text lines: the commit line, then detail lines.
    pub fn lines(&self) -> Vec<String> {
        self.segments().iter().map(|line| line_text(line)).collect()
    }
}

/// Lazily lays out and renders commits, one [`RenderRow`] per input commit, in input order.
///
/// The lane table lives inside the iterator, so dropping it early releases everything and
/// calling [`GraphRows::new`] again with the same inputs yields the same rows.
#[derive(Debug, Clone)]
pub struct GraphRows<'a> {
    commits: std::slice::Iter<'a, CommitNode>,
    allocator: ColumnAllocator,
    glyphs: &'static GlyphSet,
    width: usize,
    detailed: bool,
    inline_meta: bool,
}

impl<'a> GraphRows<'a> {
    pub fn new(commits: &'a [CommitNode], config: &RenderConfig) -> Self {
        let detailed = config.is_detailed();
        let width = config.effective_width();
        tracing::debug!(
            commits = commits.len(),
            style = %config.style,
            width,
            detailed,
            "rendering commit graph"
        );

        Self {
            commits: commits.iter(),
            allocator: ColumnAllocator::new(),
            glyphs: config.style.glyphs(),
            width,
            detailed,
            inline_meta: config.inline_meta && !detailed,
        }
    }

    fn render_commit(&mut self, commit: &CommitNode) -> RenderRow {
        let layout = self.allocator.advance(commit);
        let frame = Frame::for_commit(&layout);
        let graph = frame.paint(self.glyphs);

        let mut text = RowText::new(commit, self.inline_meta);
        text.fit(graph.len(), self.width);

        let details = if self.detailed {
            let continuation = Frame::continuation(layout.active_after()).paint(self.glyphs);
            detail_lines(commit)
                .into_iter()
                .map(|text| DetailLine { graph: continuation.clone(), text })
                .collect()
        } else {
            Vec::new()
        };

        RenderRow {
            commit_lane: layout.commit_lane(),
            drawn_lanes: frame.drawn_lanes(),
            graph,
            text,
            details,
        }
    }
}

impl Iterator for GraphRows<'_> {
    type Item = RenderRow;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.commits.next()?;
        Some(self.render_commit(commit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.commits.size_hint()
    }
}

impl ExactSizeIterator for GraphRows<'_> {}

impl FusedIterator for GraphRows<'_> {}
