// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use serde::{Deserialize, Serialize};

use crate::render::GraphStyle;
use crate::theme::{GraphTheme, PaletteError};

pub const DEFAULT_WIDTH: usize = 80;

/// Narrower widths are clamped up to this.
pub const MIN_WIDTH: usize = 20;

pub const ENV_STYLE: &str = "LANEGRAPH_STYLE";
pub const ENV_WIDTH: &str = "LANEGRAPH_WIDTH";
pub const ENV_PALETTE: &str = "LANEGRAPH_PALETTE";
pub const ENV_DETAILED: &str = "LANEGRAPH_DETAILED";

/// Options for one render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub style: GraphStyle,
    pub width: usize,
    /// Lane color tokens. `None` renders plain text.
    pub palette: Option<Vec<String>>,
    pub detailed: bool,
    /// Appends `<author> Jan 2` to single-line rows.
    pub inline_meta: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: GraphStyle::default(),
            width: DEFAULT_WIDTH,
            palette: None,
            detailed: false,
            inline_meta: false,
        }
    }
}

impl RenderConfig {
    pub fn effective_width(&self) -> usize {
        self.width.max(MIN_WIDTH)
    }

    pub fn is_detailed(&self) -> bool {
        self.detailed || self.style == GraphStyle::Detailed
    }

    pub fn is_colored(&self) -> bool {
        self.palette.is_some()
    }

    /// Theme for the configured palette, or `None` when color is off.
    pub fn theme(&self) -> Result<Option<GraphTheme>, ConfigError> {
        match &self.palette {
            Some(tokens) => Ok(Some(GraphTheme::from_palette(tokens.as_slice())?)),
            None => Ok(None),
        }
    }

    /// Applies `LANEGRAPH_*` environment overrides on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| env::var(name))
    }

    /// Like [`RenderConfig::with_env_overrides`], reading variables through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        if let Some(value) = read_var(&lookup, ENV_STYLE)? {
            self.style = value
                .parse()
                .map_err(|_| ConfigError::InvalidStyle { value: value.clone() })?;
        }

        if let Some(value) = read_var(&lookup, ENV_WIDTH)? {
            self.width = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_WIDTH.to_string(),
                value: value.clone(),
            })?;
        }

        if let Some(value) = read_var(&lookup, ENV_PALETTE)? {
            // Validate now so a bad variable fails before any output.
            GraphTheme::parse_csv(&value)?;
            self.palette = Some(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }

        if let Some(value) = read_var(&lookup, ENV_DETAILED)? {
            self.detailed = parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnv {
                name: ENV_DETAILED.to_string(),
                value: value.clone(),
            })?;
        }

        Ok(self)
    }
}

fn read_var<F>(lookup: &F, name: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(name) {
        Ok(value) => {
            let trimmed = value.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
            name: name.to_string(),
            value: "<non-unicode>".to_string(),
        }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidEnv { name: String, value: String },
    InvalidStyle { value: String },
    Palette(PaletteError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
            Self::InvalidStyle { value } => write!(
                f,
                "unknown graph style {value:?} (expected ascii, unicode, compact or detailed)"
            ),
            Self::Palette(err) => write!(f, "invalid palette: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for ConfigError {
    fn from(value: PaletteError) -> Self {
        Self::Palette(value)
    }
}
