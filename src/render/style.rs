// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which side of the commit's lane an edge ends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Symbolic content of one graph cell, resolved to a character by a [`GlyphSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Blank,
    Vertical,
    Horizontal,
    Commit,
    Merge,
    /// Corner where an edge opens a new lane.
    Fork(Side),
    /// Junction where an edge meets a lane that is already drawn.
    Join(Side),
    /// Fork corner that a longer run continues through.
    Tee,
    /// Join junction that a longer run continues through.
    Cross,
}

impl Glyph {
    pub fn is_blank(self) -> bool {
        self == Self::Blank
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub vertical: char,
    pub horizontal: char,
    pub fork_left: char,
    pub fork_right: char,
    pub join_left: char,
    pub join_right: char,
    pub tee: char,
    pub cross: char,
    pub commit: char,
    pub merge: char,
    pub blank: char,
}

impl GlyphSet {
    pub fn glyph(&self, glyph: Glyph) -> char {
        match glyph {
            Glyph::Blank => self.blank,
            Glyph::Vertical => self.vertical,
            Glyph::Horizontal => self.horizontal,
            Glyph::Commit => self.commit,
            Glyph::Merge => self.merge,
            Glyph::Fork(Side::Left) => self.fork_left,
            Glyph::Fork(Side::Right) => self.fork_right,
            Glyph::Join(Side::Left) => self.join_left,
            Glyph::Join(Side::Right) => self.join_right,
            Glyph::Tee => self.tee,
            Glyph::Cross => self.cross,
        }
    }
}

pub const ASCII_GLYPHS: GlyphSet = GlyphSet {
    vertical: '|',
    horizontal: '-',
    fork_left: '/',
    fork_right: '\\',
    join_left: '+',
    join_right: '+',
    tee: '+',
    cross: '+',
    commit: 'o',
    merge: '*',
    blank: ' ',
};

pub const UNICODE_GLYPHS: GlyphSet = GlyphSet {
    vertical: '│',
    horizontal: '─',
    fork_left: '╭',
    fork_right: '╮',
    join_left: '├',
    join_right: '┤',
    tee: '┬',
    cross: '┼',
    commit: '●',
    merge: '◉',
    blank: ' ',
};

pub const COMPACT_GLYPHS: GlyphSet = GlyphSet {
    vertical: '╎',
    horizontal: '╌',
    fork_left: '╭',
    fork_right: '╮',
    join_left: '├',
    join_right: '┤',
    tee: '┬',
    cross: '┼',
    commit: '•',
    merge: '◆',
    blank: ' ',
};

/// Rendering style. `Detailed` draws with the Unicode glyphs and adds author/date lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphStyle {
    Ascii,
    #[default]
    Unicode,
    Compact,
    Detailed,
}

impl GraphStyle {
    pub const ALL: [GraphStyle; 4] = [Self::Ascii, Self::Unicode, Self::Compact, Self::Detailed];

    pub fn glyphs(self) -> &'static GlyphSet {
        match self {
            Self::Ascii => &ASCII_GLYPHS,
            Self::Unicode | Self::Detailed => &UNICODE_GLYPHS,
            Self::Compact => &COMPACT_GLYPHS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
            Self::Compact => "compact",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for GraphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGraphStyleError {
    value: String,
}

impl fmt::Display for ParseGraphStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown graph style {:?} (expected ascii, unicode, compact or detailed)",
            self.value
        )
    }
}

impl std::error::Error for ParseGraphStyleError {}

impl FromStr for GraphStyle {
    type Err = ParseGraphStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| ParseGraphStyleError { value: s.to_owned() })
    }
}
