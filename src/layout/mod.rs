// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lane layout for commit graphs.
//!
//! Commits are processed strictly in input order; each one is placed into a lane and reports the
//! edges its row needs to draw.

pub mod lanes;

pub use lanes::{ColumnAllocator, EdgeKind, Lane, LaneSet, LaneState, ParentEdge, RowLayout};
