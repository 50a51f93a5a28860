// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

use crate::render::SegmentKind;

const PRIMARY: Color = Color::Rgb(0x00, 0xD9, 0xA5);
const SECONDARY: Color = Color::Rgb(0x00, 0xB4, 0xA6);
const TERTIARY: Color = Color::Rgb(0x00, 0x91, 0xEA);
const ACCENT: Color = Color::Rgb(0x00, 0xE5, 0xFF);
const HIGHLIGHT: Color = Color::Rgb(0xFF, 0x6D, 0x00);
const FOREGROUND: Color = Color::Rgb(0xE6, 0xED, 0xF3);
const SUCCESS: Color = Color::Rgb(0x3F, 0xB9, 0x50);
const ERROR: Color = Color::Rgb(0xF8, 0x51, 0x49);
const MUTED: Color = Color::Rgb(0x8B, 0x94, 0x9E);

/// Lane color tokens used when color is requested without a palette.
pub const DEFAULT_PALETTE: [&str; 5] = ["#00D9A5", "#00B4A6", "#0091EA", "#00E5FF", "#FF6D00"];

/// Colors for graph output. Lane colors cycle by lane index; every other role has a fixed color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphTheme {
    lanes: Vec<Color>,
    hash: Color,
    message: Color,
    refs: Color,
    meta: Color,
    ahead: Color,
    behind: Color,
}

impl Default for GraphTheme {
    fn default() -> Self {
        Self {
            lanes: vec![PRIMARY, SECONDARY, TERTIARY, ACCENT, HIGHLIGHT],
            hash: ACCENT,
            message: FOREGROUND,
            refs: HIGHLIGHT,
            meta: MUTED,
            ahead: SUCCESS,
            behind: ERROR,
        }
    }
}

impl GraphTheme {
    /// Default theme with the lane colors replaced by `tokens`, in order.
    pub fn from_palette<S: AsRef<str>>(tokens: &[S]) -> Result<Self, PaletteError> {
        if tokens.is_empty() {
            return Err(PaletteError::Empty);
        }

        let lanes = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let token = token.as_ref();
                parse_palette_color(token).map_err(|reason| PaletteError::InvalidColor {
                    index,
                    token: token.to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { lanes, ..Self::default() })
    }

    /// Splits a comma-separated palette (as found in environment variables) and parses it.
    pub fn parse_csv(value: &str) -> Result<Self, PaletteError> {
        let parts = value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();
        Self::from_palette(parts.as_slice())
    }

    pub fn lanes(&self) -> &[Color] {
        &self.lanes
    }

    pub fn lane_color(&self, lane: usize) -> Color {
        self.lanes[lane % self.lanes.len()]
    }

    pub fn style_for(&self, kind: SegmentKind) -> Style {
        let base = Style::default();
        match kind {
            SegmentKind::Lane(lane) => base.fg(self.lane_color(lane)),
            SegmentKind::Plain => base,
            SegmentKind::Hash => base.fg(self.hash),
            SegmentKind::Message => base.fg(self.message),
            SegmentKind::Refs | SegmentKind::CurrentBranch => {
                base.fg(self.refs).add_modifier(Modifier::BOLD)
            }
            SegmentKind::Meta | SegmentKind::Branch => base.fg(self.meta),
            SegmentKind::Ahead => base.fg(self.ahead),
            SegmentKind::Behind => base.fg(self.behind),
        }
    }
}

fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        let r = parse_hex_channel(parts[0])?;
        let g = parse_hex_channel(parts[1])?;
        let b = parse_hex_channel(parts[2])?;
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        4 => u16::from_str_radix(value, 16)
            .map(|parsed| (parsed >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
    InvalidColor { index: usize, token: String, reason: String },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one color"),
            Self::InvalidColor { index, token, reason } => {
                write!(f, "palette color #{index} {token:?}: {reason}")
            }
        }
    }
}

impl Error for PaletteError {}
