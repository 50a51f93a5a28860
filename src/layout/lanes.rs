// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::model::{CommitHash, CommitNode};

/// Lane indices touched by one row. Most histories stay well under eight concurrent lines.
pub type LaneSet = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneState {
    Active,
    Terminated,
}

/// One rendering column and the line of history currently drawn through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    index: usize,
    owner: CommitHash,
    state: LaneState,
}

impl Lane {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Hash of the commit this lane is waiting for (or just drew).
    pub fn owner(&self) -> &CommitHash {
        &self.owner
    }

    pub fn state(&self) -> LaneState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == LaneState::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// The parent got a freshly allocated lane.
    Fork,
    /// The parent already was the tip of another active lane.
    Join,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentEdge {
    parent: CommitHash,
    lane: usize,
    kind: EdgeKind,
}

impl ParentEdge {
    pub fn parent(&self) -> &CommitHash {
        &self.parent
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }
}

/// Lane bookkeeping for one processed commit row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    commit_lane: usize,
    merge: bool,
    passing: LaneSet,
    edges: SmallVec<[ParentEdge; 2]>,
    continues: bool,
    active_after: LaneSet,
}

impl RowLayout {
    pub fn commit_lane(&self) -> usize {
        self.commit_lane
    }

    pub fn is_merge(&self) -> bool {
        self.merge
    }

    /// Lanes that were active before this row and belong to other lines.
    pub fn passing(&self) -> &[usize] {
        &self.passing
    }

    /// Edges leaving the commit's lane sideways, in parent order.
    pub fn edges(&self) -> &[ParentEdge] {
        &self.edges
    }

    /// Whether a parent continues straight down in the commit's own lane.
    pub fn continues(&self) -> bool {
        self.continues
    }

    pub fn active_after(&self) -> &[usize] {
        &self.active_after
    }

    /// Highest lane index that this row draws anything in.
    pub fn max_lane(&self) -> usize {
        let passing = self.passing.iter().copied().max().unwrap_or(0);
        let edges = self.edges.iter().map(ParentEdge::lane).max().unwrap_or(0);
        self.commit_lane.max(passing).max(edges)
    }
}

/// Assigns and recycles lanes as commits are processed in row order.
///
/// Lanes live in an index-addressed arena; `tips` maps the hash a lane is waiting for to its
/// index. Both are owned by a single render pass.
#[derive(Debug, Clone, Default)]
pub struct ColumnAllocator {
    lanes: Vec<Lane>,
    tips: HashMap<CommitHash, usize>,
}

impl ColumnAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn active_lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter().filter(|lane| lane.is_active())
    }

    /// Lane index currently waiting for `hash`, if any.
    pub fn lane_of(&self, hash: &str) -> Option<usize> {
        self.tips.get(hash).copied()
    }

    /// Returns the lane that already expects `hash`, or claims the lowest free one for it.
    pub fn column_for(&mut self, hash: &CommitHash) -> usize {
        match self.tips.get(hash) {
            Some(&lane) => lane,
            None => self.allocate(hash.clone()),
        }
    }

    /// Processes one commit and reports how its row has to be drawn.
    pub fn advance(&mut self, commit: &CommitNode) -> RowLayout {
        let passing_before: LaneSet = self.active_lanes().map(Lane::index).collect();

        let commit_lane = self.column_for(commit.hash());
        self.tips.remove(commit.hash());

        let passing = passing_before.into_iter().filter(|&lane| lane != commit_lane).collect();

        let mut edges = SmallVec::<[ParentEdge; 2]>::new();
        let mut continues = false;
        let mut seen = SmallVec::<[&CommitHash; 2]>::new();

        for parent in commit.parents() {
            if parent.is_empty() || parent == commit.hash() || seen.contains(&parent) {
                continue;
            }
            seen.push(parent);

            if let Some(&lane) = self.tips.get(parent) {
                edges.push(ParentEdge { parent: parent.clone(), lane, kind: EdgeKind::Join });
            } else if !continues {
                let lane = &mut self.lanes[commit_lane];
                lane.owner = parent.clone();
                self.tips.insert(parent.clone(), commit_lane);
                continues = true;
            } else {
                let lane = self.allocate(parent.clone());
                edges.push(ParentEdge { parent: parent.clone(), lane, kind: EdgeKind::Fork });
            }
        }

        if !continues {
            self.terminate(commit_lane);
        }

        RowLayout {
            commit_lane,
            merge: commit.is_merge(),
            passing,
            edges,
            continues,
            active_after: self.active_lanes().map(Lane::index).collect(),
        }
    }

    fn allocate(&mut self, owner: CommitHash) -> usize {
        let index = self
            .lanes
            .iter()
            .position(|lane| !lane.is_active())
            .unwrap_or(self.lanes.len());

        tracing::trace!(lane = index, owner = %owner, "lane allocated");

        self.tips.insert(owner.clone(), index);
        let lane = Lane { index, owner, state: LaneState::Active };
        if index == self.lanes.len() {
            self.lanes.push(lane);
        } else {
            self.lanes[index] = lane;
        }
        index
    }

    fn terminate(&mut self, index: usize) {
        let Some(lane) = self.lanes.get_mut(index) else {
            return;
        };
        tracing::trace!(lane = index, owner = %lane.owner, "lane terminated");
        lane.state = LaneState::Terminated;
    }
}
