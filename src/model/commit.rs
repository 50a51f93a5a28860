// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// Commit hashes are compared and cloned on every row; `SmolStr` keeps full 40-char SHA-1 hex
/// strings inline.
pub type CommitHash = SmolStr;

/// Parent lists are almost always 0..=2 entries long.
pub type ParentList = SmallVec<[CommitHash; 2]>;

const SHORT_HASH_LEN: usize = 7;

/// Ref labels that never show up in the rendered ref list.
const HIDDEN_REFS: &[&str] = &["HEAD"];

/// One already-parsed commit record, as handed over by the history provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitNode {
    hash: CommitHash,
    #[serde(default)]
    short_hash: SmolStr,
    #[serde(default)]
    message: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    refs: Vec<String>,
    #[serde(default)]
    parents: ParentList,
}

impl CommitNode {
    pub fn new<H, P>(hash: impl Into<CommitHash>, parents: P) -> Self
    where
        P: IntoIterator<Item = H>,
        H: Into<CommitHash>,
    {
        Self {
            hash: hash.into(),
            short_hash: SmolStr::default(),
            message: String::new(),
            author: String::new(),
            email: String::new(),
            date: None,
            refs: Vec::new(),
            parents: parents.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_short_hash(mut self, short_hash: impl Into<SmolStr>) -> Self {
        self.short_hash = short_hash.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = author.into();
        self.email = email.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_refs<R: Into<String>>(mut self, refs: impl IntoIterator<Item = R>) -> Self {
        self.refs = refs.into_iter().map(Into::into).collect();
        self
    }

    pub fn hash(&self) -> &CommitHash {
        &self.hash
    }

    /// Display form of the hash. Falls back to the first seven characters of `hash`.
    pub fn short_hash(&self) -> &str {
        if !self.short_hash.is_empty() {
            return &self.short_hash;
        }

        match self.hash.char_indices().nth(SHORT_HASH_LEN) {
            Some((end, _)) => &self.hash[..end],
            None => &self.hash,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date(&self) -> Option<&DateTime<FixedOffset>> {
        self.date.as_ref()
    }

    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    /// Refs as they appear in the rendered `(a, b)` list: trimmed, without `HEAD` or blanks.
    pub fn display_refs(&self) -> impl Iterator<Item = &str> {
        self.refs
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty() && !HIDDEN_REFS.contains(r))
    }

    pub fn parents(&self) -> &[CommitHash] {
        &self.parents
    }

    pub fn is_merge(&self) -> bool {
        self.parents.iter().filter(|p| !p.is_empty()).count() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parents.iter().all(|p| p.is_empty())
    }
}

/// Summary of a local branch for the branch list view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BranchSummary {
    name: String,
    #[serde(default)]
    current: bool,
    #[serde(default)]
    ahead: u32,
    #[serde(default)]
    behind: u32,
}

impl BranchSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn current(mut self) -> Self {
        self.current = true;
        self
    }

    pub fn with_tracking(mut self, ahead: u32, behind: u32) -> Self {
        self.ahead = ahead;
        self.behind = behind;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    pub fn ahead(&self) -> u32 {
        self.ahead
    }

    pub fn behind(&self) -> u32 {
        self.behind
    }

    pub fn has_divergence(&self) -> bool {
        self.ahead > 0 || self.behind > 0
    }
}
