// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

use chrono::DateTime;

use super::commit::CommitNode;

pub(crate) fn commit(hash: &str, parents: &[&str]) -> CommitNode {
    CommitNode::new(hash, parents.iter().copied()).with_message(format!("commit {hash}"))
}

/// `c{n-1} -> ... -> c0`, newest first, each commit pointing at the next row.
pub(crate) fn linear_history(len: usize) -> Vec<CommitNode> {
    (0..len)
        .rev()
        .map(|idx| {
            let hash = format!("c{idx}");
            let parent = (idx > 0).then(|| format!("c{}", idx - 1));
            CommitNode::new(hash.as_str(), parent).with_message(format!("change {idx}"))
        })
        .collect()
}

/// `M` merges `A` and `B`, both roots listed after it.
pub(crate) fn simple_merge() -> Vec<CommitNode> {
    vec![
        commit("M", &["A", "B"]),
        commit("A", &[]),
        commit("B", &[]),
    ]
}

/// `C3 -> C2 -> {C1a, C1b}`.
pub(crate) fn two_root_merge() -> Vec<CommitNode> {
    vec![
        commit("C3", &["C2"]),
        commit("C2", &["C1a", "C1b"]),
        commit("C1a", &[]),
        commit("C1b", &[]),
    ]
}

/// A side line (`X`) ends, then a later merge introduces `Y`, which should land in `X`'s lane.
pub(crate) fn lane_reuse_history() -> Vec<CommitNode> {
    vec![
        commit("T", &["A", "X"]),
        commit("X", &[]),
        commit("A", &["B", "Y"]),
        commit("Y", &[]),
        commit("B", &[]),
    ]
}

/// Two branch tips (`main`, `feature`) sharing the base commit `base`.
pub(crate) fn forked_tips() -> Vec<CommitNode> {
    vec![
        commit("main", &["base"]).with_refs(["HEAD", "main"]),
        commit("feature", &["base"]).with_refs(["feature"]),
        commit("base", &[]),
    ]
}

/// Deterministic merge-heavy history (no RNG): newest first, every parent strictly older.
pub(crate) fn dense_history(len: usize) -> Vec<CommitNode> {
    (0..len)
        .rev()
        .map(|idx| {
            let mut parents = Vec::new();
            if idx > 0 {
                parents.push(format!("d{}", idx - 1 - (idx * 7) % idx.min(3)));
            }
            if idx > 4 && (idx as u64).wrapping_mul(2_654_435_761) % 5 == 0 {
                parents.push(format!("d{}", idx - 2 - (idx * 13) % 3));
            }
            CommitNode::new(format!("d{idx}").as_str(), parents.iter().map(String::as_str))
                .with_message(format!("dense change number {idx}"))
        })
        .collect()
}

pub(crate) fn detailed_commit() -> CommitNode {
    let date = DateTime::parse_from_rfc3339("2024-03-01T10:04:05+00:00").expect("fixture date");
    CommitNode::new("f00dfeed42", ["beefcafe00"])
        .with_message("Add lane allocator")
        .with_author("Ada Lovelace", "ada@example.com")
        .with_date(date)
        .with_refs(["HEAD", "main", "tag: v0.1.0"])
}

#[cfg(test)]
mod tests {
    use super::{dense_history, linear_history};

    #[test]
    fn linear_history_points_each_commit_at_the_next_row() {
        let commits = linear_history(3);
        assert_eq!(commits[0].hash(), "c2");
        assert_eq!(commits[0].parents()[0], "c1");
        assert!(commits[2].parents().is_empty());
    }

    #[test]
    fn dense_history_merge_pattern_is_target_independent() {
        // Large indices exceed u32 when multiplied; the pattern must not depend on usize width.
        let commits = dense_history(5_000);
        let merges = commits.iter().filter(|c| c.is_merge()).count();
        let expected =
            (5..5_000u64).filter(|idx| idx.wrapping_mul(2_654_435_761) % 5 == 0).count();
        assert_eq!(merges, expected);
        assert!(merges > 0);
    }

    #[test]
    fn dense_history_only_references_older_commits() {
        let commits = dense_history(40);
        for (row, commit) in commits.iter().enumerate() {
            for parent in commit.parents() {
                let parent_row = commits
                    .iter()
                    .position(|c| c.hash() == parent)
                    .expect("parent inside window");
                assert!(parent_row > row, "{} -> {parent}", commit.hash());
            }
        }
    }
}
