// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in sample history used by `lanegraph --demo`.

use chrono::DateTime;

use crate::model::{BranchSummary, CommitNode};

// 2024-03-08T17:00:00Z; every older entry steps back a few hours.
const NEWEST_COMMIT_SECS: i64 = 1_709_917_200;
const STEP_SECS: i64 = 3 * 60 * 60;

struct DemoCommit {
    hash: &'static str,
    parents: &'static [&'static str],
    refs: &'static [&'static str],
    message: &'static str,
    author: (&'static str, &'static str),
}

const ADA: (&str, &str) = ("Ada Lovelace", "ada@example.com");
const GRACE: (&str, &str) = ("Grace Hopper", "grace@example.com");
const LINUS: (&str, &str) = ("Linus Pauling", "linus@example.com");

const HISTORY: &[DemoCommit] = &[
    DemoCommit {
        hash: "9f1c2e7a5b3d4c6e8f0a1b2c3d4e5f6a7b8c9d0e",
        parents: &[
            "4be81d0c9a7f6e5d4c3b2a1908f7e6d5c4b3a291",
            "d70a3f9e8c1b2a3d4e5f60718293a4b5c6d7e8f9",
        ],
        refs: &["HEAD", "main", "origin/main"],
        message: "Merge branch 'feature/palette'",
        author: ADA,
    },
    DemoCommit {
        hash: "d70a3f9e8c1b2a3d4e5f60718293a4b5c6d7e8f9",
        parents: &["21c9e8d7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1"],
        refs: &["feature/palette"],
        message: "Read lane colors from LANEGRAPH_PALETTE",
        author: GRACE,
    },
    DemoCommit {
        hash: "4be81d0c9a7f6e5d4c3b2a1908f7e6d5c4b3a291",
        parents: &["6a2f4e1d3c5b7a9e8d0c2b4a6f8e1d3c5b7a9f0e"],
        refs: &[],
        message: "Clamp render width to twenty columns",
        author: ADA,
    },
    DemoCommit {
        hash: "21c9e8d7f6a5b4c3d2e1f0a9b8c7d6e5f4a3b2c1",
        parents: &["0e3d5c7b9a1f2e4d6c8b0a3f5e7d9c1b3a5f7e9d"],
        refs: &[],
        message: "Color graph cells by lane index",
        author: GRACE,
    },
    DemoCommit {
        hash: "6a2f4e1d3c5b7a9e8d0c2b4a6f8e1d3c5b7a9f0e",
        parents: &[
            "0e3d5c7b9a1f2e4d6c8b0a3f5e7d9c1b3a5f7e9d",
            "b5a4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f8a7b6",
        ],
        refs: &[],
        message: "Merge branch 'fix/dangling-parents'",
        author: LINUS,
    },
    DemoCommit {
        hash: "b5a4c3d2e1f0a9b8c7d6e5f4a3b2c1d0e9f8a7b6",
        parents: &["0e3d5c7b9a1f2e4d6c8b0a3f5e7d9c1b3a5f7e9d"],
        refs: &["fix/dangling-parents"],
        message: "Keep lanes open for parents outside the window",
        author: LINUS,
    },
    DemoCommit {
        hash: "0e3d5c7b9a1f2e4d6c8b0a3f5e7d9c1b3a5f7e9d",
        parents: &["c81b2a3d4e5f60718293a4b5c6d7e8f90a1b2c3d"],
        refs: &["tag: v0.2.0"],
        message: "Add author and date lines in detailed mode",
        author: ADA,
    },
    DemoCommit {
        hash: "c81b2a3d4e5f60718293a4b5c6d7e8f90a1b2c3d",
        parents: &["7d6c5b4a39281706f5e4d3c2b1a09f8e7d6c5b4a"],
        refs: &[],
        message: "Reuse terminated lanes before growing the table",
        author: GRACE,
    },
    DemoCommit {
        hash: "7d6c5b4a39281706f5e4d3c2b1a09f8e7d6c5b4a",
        parents: &[],
        refs: &["tag: v0.1.0"],
        message: "Initial lane allocator",
        author: ADA,
    },
];

/// Sample history, newest first, with two merged side branches and tags.
pub fn demo_history() -> Vec<CommitNode> {
    HISTORY
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let commit = CommitNode::new(entry.hash, entry.parents.iter().copied())
                .with_message(entry.message)
                .with_author(entry.author.0, entry.author.1)
                .with_refs(entry.refs.iter().copied());
            let secs = NEWEST_COMMIT_SECS - STEP_SECS * idx as i64;
            match DateTime::from_timestamp(secs, 0) {
                Some(date) => commit.with_date(date.fixed_offset()),
                None => commit,
            }
        })
        .collect()
}

pub fn demo_branches() -> Vec<BranchSummary> {
    vec![
        BranchSummary::new("main").current(),
        BranchSummary::new("feature/palette").with_tracking(2, 0),
        BranchSummary::new("fix/dangling-parents").with_tracking(0, 3),
    ]
}
