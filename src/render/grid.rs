// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{EdgeKind, RowLayout};

use super::style::{Glyph, GlyphSet, Side};

/// Cells per lane: the glyph cell plus one spacer cell to its right.
pub const CELLS_PER_LANE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    glyph: Glyph,
    lane: usize,
}

impl Cell {
    fn blank(lane: usize) -> Self {
        Self { glyph: Glyph::Blank, lane }
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// Lane the cell is colored by. Edge cells take the lane they lead to.
    pub fn lane(&self) -> usize {
        self.lane
    }
}

/// Symbolic lane grid for a single output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    cells: Vec<Cell>,
}

impl Frame {
    fn with_lanes(lanes: usize) -> Self {
        let cells =
            (0..lanes * CELLS_PER_LANE).map(|idx| Cell::blank(idx / CELLS_PER_LANE)).collect();
        Self { cells }
    }

    /// Frame for the commit row itself.
    ///
    /// Collision rules, in order of precedence:
    /// - the commit cell is never overwritten
    /// - pass-through verticals win over crossing runs
    /// - a run crossing a fork corner turns it into a tee
    /// - a run crossing a join junction turns it into a cross
    pub fn for_commit(layout: &RowLayout) -> Self {
        let mut frame = Self::with_lanes(layout.max_lane() + 1);

        for &lane in layout.passing() {
            frame.cells[lane * CELLS_PER_LANE].glyph = Glyph::Vertical;
        }

        let commit_cell = layout.commit_lane() * CELLS_PER_LANE;
        frame.cells[commit_cell].glyph =
            if layout.is_merge() { Glyph::Merge } else { Glyph::Commit };

        let mut runs = Vec::with_capacity(layout.edges().len());
        for edge in layout.edges() {
            let target_cell = edge.lane() * CELLS_PER_LANE;
            let side = if target_cell > commit_cell { Side::Right } else { Side::Left };
            let (lo, hi) = if target_cell > commit_cell {
                (commit_cell, target_cell)
            } else {
                (target_cell, commit_cell)
            };
            runs.push((lo, hi));

            for cell in &mut frame.cells[lo + 1..hi] {
                cell.glyph = match cell.glyph {
                    Glyph::Blank => {
                        cell.lane = edge.lane();
                        Glyph::Horizontal
                    }
                    Glyph::Fork(_) => Glyph::Tee,
                    other => other,
                };
            }

            let target = &mut frame.cells[target_cell];
            target.lane = edge.lane();
            target.glyph = match (edge.kind(), target.glyph) {
                (EdgeKind::Fork, Glyph::Horizontal | Glyph::Tee) => Glyph::Tee,
                (EdgeKind::Fork, _) => Glyph::Fork(side),
                (EdgeKind::Join, _) => Glyph::Join(side),
            };
        }

        // A join may be drawn after the run that passes it.
        for (lo, hi) in runs {
            for cell in &mut frame.cells[lo + 1..hi] {
                if let Glyph::Join(_) = cell.glyph {
                    cell.glyph = Glyph::Cross;
                }
            }
        }

        frame.trim_trailing_blanks();
        frame
    }

    /// Continuation frame drawn under a commit row: a vertical for every lane still active.
    pub fn continuation(active: &[usize]) -> Self {
        let lanes = active.iter().copied().max().map_or(0, |max| max + 1);
        let mut frame = Self::with_lanes(lanes);
        for &lane in active {
            frame.cells[lane * CELLS_PER_LANE].glyph = Glyph::Vertical;
        }
        frame.trim_trailing_blanks();
        frame
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lanes whose glyph cell is drawn in this frame.
    pub fn drawn_lanes(&self) -> Vec<usize> {
        self.cells
            .iter()
            .step_by(CELLS_PER_LANE)
            .enumerate()
            .filter(|(_, cell)| !cell.glyph.is_blank())
            .map(|(lane, _)| lane)
            .collect()
    }

    pub fn paint(&self, glyphs: &GlyphSet) -> Vec<PaintedCell> {
        self.cells
            .iter()
            .map(|cell| PaintedCell {
                ch: glyphs.glyph(cell.glyph),
                lane: (!cell.glyph.is_blank()).then_some(cell.lane),
            })
            .collect()
    }

    // Keeps whole lane slots: trailing spacer cells stay so every drawn lane is two chars wide.
    fn trim_trailing_blanks(&mut self) {
        let keep = self
            .cells
            .iter()
            .rposition(|cell| !cell.glyph.is_blank())
            .map_or(0, |idx| (idx / CELLS_PER_LANE + 1) * CELLS_PER_LANE);
        self.cells.truncate(keep);
    }
}

/// A graph cell resolved to a character. `lane` is `None` for blank cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintedCell {
    pub ch: char,
    pub lane: Option<usize>,
}

pub(crate) fn painted_to_string(cells: &[PaintedCell]) -> String {
    cells.iter().map(|cell| cell.ch).collect()
}
