// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Color decoration over typed segments.
//!
//! Styles are looked up per [`SegmentKind`]; rendered text is never scanned for glyphs.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::OnceLock;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

use crate::theme::GraphTheme;

use super::row::Segment;

pub fn colorize_line(line: &[Segment], theme: &GraphTheme) -> Line<'static> {
    Line::from(
        line.iter()
            .map(|segment| Span::styled(segment.text.clone(), theme.style_for(segment.kind)))
            .collect::<Vec<_>>(),
    )
}

/// Segments joined into one string with SGR escape sequences around every styled segment.
pub fn ansi_line(line: &[Segment], theme: &GraphTheme) -> String {
    let mut out = String::new();
    for segment in line {
        let style = theme.style_for(segment.kind);
        if style == Style::default() {
            out.push_str(&segment.text);
            continue;
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", content_style(style).apply(segment.text.as_str()));
    }
    out
}

/// Removes SGR escape sequences, giving back the plain line.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    static SGR: OnceLock<Regex> = OnceLock::new();
    let sgr = SGR.get_or_init(|| Regex::new("\x1b\\[[0-9;]*m").expect("valid SGR pattern"));
    sgr.replace_all(text, "")
}

fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(term_color);
    content.background_color = style.bg.map(term_color);
    if style.add_modifier.contains(Modifier::BOLD) {
        content.attributes.set(Attribute::Bold);
    }
    if style.add_modifier.contains(Modifier::DIM) {
        content.attributes.set(Attribute::Dim);
    }
    content
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(value) => TermColor::AnsiValue(value),
    }
}
