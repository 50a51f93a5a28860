// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: already-parsed commit records and branch summaries.

pub mod commit;
#[cfg(test)]
pub(crate) mod fixtures;

pub use commit::{BranchSummary, CommitHash, CommitNode, ParentList};
