// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use lanegraph::model::CommitNode;

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

pub fn checksum_lines(lines: &[String]) -> u64 {
    let mut acc = 0u64;
    for line in lines {
        acc = acc.wrapping_mul(131).wrapping_add(line.len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(line.chars().count() as u64);
    }
    acc
}

pub mod history {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HistoryParams {
        pub commits: usize,
        /// Concurrent lines of development, mainline included.
        pub branches: usize,
        /// Mainline merges a side branch every `merge_every` commits (0 = never).
        pub merge_every: usize,
        pub message_len: usize,
    }

    impl HistoryParams {
        pub const fn new(
            commits: usize,
            branches: usize,
            merge_every: usize,
            message_len: usize,
        ) -> Self {
            Self { commits, branches, merge_every, message_len }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Linear,
        FewBranches,
        DenseMerges,
        WideLanes,
        LongMessages,
    }

    impl Case {
        pub const ALL: [Case; 5] = [
            Self::Linear,
            Self::FewBranches,
            Self::DenseMerges,
            Self::WideLanes,
            Self::LongMessages,
        ];

        pub const fn id(self) -> &'static str {
            match self {
                Self::Linear => "linear",
                Self::FewBranches => "few_branches",
                Self::DenseMerges => "dense_merges",
                Self::WideLanes => "wide_lanes",
                Self::LongMessages => "long_messages",
            }
        }

        pub const fn params(self) -> HistoryParams {
            match self {
                Self::Linear => HistoryParams::new(2_000, 1, 0, 40),
                Self::FewBranches => HistoryParams::new(2_000, 4, 9, 40),
                Self::DenseMerges => HistoryParams::new(2_000, 8, 3, 40),
                Self::WideLanes => HistoryParams::new(2_000, 32, 5, 24),
                Self::LongMessages => HistoryParams::new(2_000, 4, 9, 160),
            }
        }
    }

    fn commit_hash(idx: usize) -> String {
        let mixed = (idx as u64).wrapping_mul(2_654_435_761) as u32;
        format!("{mixed:08x}{idx:032x}")
    }

    /// Deterministic multi-branch history, newest first.
    ///
    /// - Commits are generated oldest first and round-robin across branches.
    /// - A side branch forks off the mainline tip on its first commit.
    /// - Mainline merges keep the side branch alive, so its next commit joins a shared parent.
    pub fn generate(params: HistoryParams) -> Vec<CommitNode> {
        assert!(params.branches >= 1, "branches must be >= 1");

        let mut tips = vec![None::<String>; params.branches];
        let mut out = Vec::with_capacity(params.commits);

        for idx in 0..params.commits {
            let branch = (idx * 7) % params.branches;
            let hash = commit_hash(idx);

            let mut parents = Vec::with_capacity(2);
            match (&tips[branch], &tips[0]) {
                (Some(tip), _) => parents.push(tip.clone()),
                (None, Some(main)) => parents.push(main.clone()),
                (None, None) => {}
            }

            let merging = branch == 0
                && params.branches > 1
                && params.merge_every > 0
                && idx % params.merge_every == 0;
            if merging {
                let side = 1 + (idx / params.merge_every) % (params.branches - 1);
                if let Some(tip) = &tips[side] {
                    if !parents.contains(tip) {
                        parents.push(tip.clone());
                    }
                }
            }

            let base = format!("Change {idx} on branch {branch}");
            let message = ascii_repeat_to_len(&base, '.', params.message_len);
            let mut commit = CommitNode::new(hash.as_str(), parents.iter().map(String::as_str))
                .with_message(message)
                .with_author("Bench Author", "bench@example.com");
            if idx % 97 == 0 {
                commit = commit.with_refs([format!("tag: b{idx}")]);
            }

            tips[branch] = Some(hash);
            out.push(commit);
        }

        out.reverse();
        out
    }

    pub fn fixture(case: Case) -> Vec<CommitNode> {
        generate(case.params())
    }
}
