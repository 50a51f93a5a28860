// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use crate::model::CommitNode;

pub(crate) const ELLIPSIS: &str = "...";

/// Messages are left alone when fewer than this many chars would survive truncation.
pub(crate) const MIN_MESSAGE_BUDGET: usize = 10;

const DETAIL_INDENT: &str = "   ";
const DETAIL_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y";
const INLINE_DATE_FORMAT: &str = "%b %-d";

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Longest prefix of `text` that is at most `max_chars` chars long.
pub(crate) fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Replaces control chars with visible stand-ins (Unicode control pictures for C0 and DEL), so
/// escape sequences in commit data never reach the terminal and plain and colored output carry the
/// same text.
pub(crate) fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(control_picture).collect())
}

fn control_picture(ch: char) -> char {
    match ch {
        '\u{0}'..='\u{1f}' => char::from_u32(0x2400 + u32::from(ch)).unwrap_or('\u{fffd}'),
        '\u{7f}' => '\u{2421}',
        ch if ch.is_control() => '\u{fffd}',
        ch => ch,
    }
}

/// First line of a commit message, without trailing whitespace or a `\r`.
pub(crate) fn first_line(message: &str) -> &str {
    let end = memchr::memchr(b'\n', message.as_bytes()).unwrap_or(message.len());
    message[..end].trim_end()
}

pub(crate) fn format_refs<'a>(refs: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut out = String::new();
    for r in refs {
        out.push_str(if out.is_empty() { "(" } else { ", " });
        out.push_str(r);
    }
    if out.is_empty() {
        return None;
    }
    out.push(')');
    Some(out)
}

/// `<author> Jan 2` shown after the message in single-line mode.
pub(crate) fn inline_meta(commit: &CommitNode) -> Option<String> {
    let mut out = String::new();
    if !commit.author().is_empty() {
        out.push('<');
        out.push_str(&sanitize(commit.author()));
        out.push('>');
    }
    if let Some(date) = commit.date() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&date.format(INLINE_DATE_FORMAT).to_string());
    }
    (!out.is_empty()).then_some(out)
}

/// Author and date continuation lines for detailed mode. Missing parts produce no line.
pub(crate) fn detail_lines(commit: &CommitNode) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    let author = sanitize(commit.author());
    let email = sanitize(commit.email());
    if !author.is_empty() || !email.is_empty() {
        let mut line = format!("{DETAIL_INDENT}Author:");
        if !author.is_empty() {
            line.push(' ');
            line.push_str(&author);
        }
        if !email.is_empty() {
            line.push_str(" <");
            line.push_str(&email);
            line.push('>');
        }
        lines.push(line);
    }
    if let Some(date) = commit.date() {
        lines.push(format!("{DETAIL_INDENT}Date: {}", date.format(DETAIL_DATE_FORMAT)));
    }
    lines
}

/// Text fields of one commit row before width enforcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowText {
    pub(crate) refs: Option<String>,
    pub(crate) hash: String,
    pub(crate) message: String,
    pub(crate) meta: Option<String>,
    pub(crate) truncated: bool,
}

impl RowText {
    pub(crate) fn new(commit: &CommitNode, with_meta: bool) -> Self {
        let refs = commit.display_refs().map(sanitize).collect::<Vec<_>>();
        Self {
            refs: format_refs(refs.iter().map(|r| &**r)),
            hash: sanitize(commit.short_hash()).into_owned(),
            message: sanitize(first_line(commit.message())).into_owned(),
            meta: if with_meta { inline_meta(commit) } else { None },
            truncated: false,
        }
    }

    /// Fields in display order, skipping empty ones. They are joined with single spaces.
    pub(crate) fn fields(&self) -> impl Iterator<Item = (TextField, &str)> {
        [
            (TextField::Refs, self.refs.as_deref().unwrap_or("")),
            (TextField::Hash, self.hash.as_str()),
            (TextField::Message, self.message.as_str()),
            (TextField::Meta, self.meta.as_deref().unwrap_or("")),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
    }

    pub(crate) fn len(&self) -> usize {
        let mut len = 0;
        for (idx, (_, text)) in self.fields().enumerate() {
            len += text_len(text) + usize::from(idx > 0);
        }
        len
    }

    /// Shrinks only the message so that `prefix_len + 1 + self.len() == width`.
    ///
    /// Leaves everything untouched when the row already fits or when fewer than
    /// [`MIN_MESSAGE_BUDGET`] message chars would remain.
    pub(crate) fn fit(&mut self, prefix_len: usize, width: usize) {
        let total = prefix_len + 1 + self.len();
        if total <= width || self.message.is_empty() {
            return;
        }

        let message_len = text_len(&self.message);
        let fixed = total - message_len;
        let budget = width.saturating_sub(fixed + ELLIPSIS.len());
        if budget < MIN_MESSAGE_BUDGET || budget >= message_len {
            return;
        }

        let mut shortened = take_chars(&self.message, budget).to_owned();
        shortened.push_str(ELLIPSIS);
        self.message = shortened;
        self.truncated = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextField {
    Refs,
    Hash,
    Message,
    Meta,
}
