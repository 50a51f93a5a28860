// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanegraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lanegraph CLI entrypoint.
//!
//! Reads a JSON array of already-parsed commits (newest first) from a file or stdin and prints
//! the commit graph. Configuration layers apply in order: defaults, `--config <file>`,
//! `LANEGRAPH_*` environment variables, command-line flags.

use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

use lanegraph::model::{BranchSummary, CommitNode};
use lanegraph::render::GraphStyle;
use lanegraph::theme::DEFAULT_PALETTE;
use lanegraph::{render_branches, render_graph, RenderConfig};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LANEGRAPH_LOG";
const EMPTY_HISTORY: &str = "No commits to display";
const EMPTY_BRANCHES: &str = "No branches";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<commits.json>] [--style <ascii|unicode|compact|detailed>] [--width <n>] [--color] [--detailed] [--inline-meta] [--config <file>] [--branches <file>]\n  {program} --demo [--style <s>] [--width <n>] [--color] [--detailed] [--inline-meta]\n\nCommits are read from <commits.json> or stdin (`-`) as a JSON array, newest first.\n--branches prints a branch list (JSON array of {{name, current, ahead, behind}}) after the graph.\n--demo renders a built-in sample history and cannot be combined with an input file.\n\nEnvironment: LANEGRAPH_STYLE, LANEGRAPH_WIDTH, LANEGRAPH_PALETTE, LANEGRAPH_DETAILED,\n{LOG_ENV} (tracing filter, default `warn`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    style: Option<GraphStyle>,
    width: Option<usize>,
    color: bool,
    detailed: bool,
    inline_meta: bool,
    config: Option<String>,
    branches: Option<String>,
    demo: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => {
                if options.style.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.style = Some(raw.parse().map_err(|_| ())?);
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.width = Some(raw.parse().map_err(|_| ())?);
            }
            "--color" => {
                if options.color {
                    return Err(());
                }
                options.color = true;
            }
            "--detailed" => {
                if options.detailed {
                    return Err(());
                }
                options.detailed = true;
            }
            "--inline-meta" => {
                if options.inline_meta {
                    return Err(());
                }
                options.inline_meta = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--branches" => {
                if options.branches.is_some() {
                    return Err(());
                }
                options.branches = Some(args.next().ok_or(())?);
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            _ if arg.starts_with('-') && arg != "-" => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.demo && options.input.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(options: &CliOptions) -> Result<RenderConfig, Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => serde_json::from_str::<RenderConfig>(&fs::read_to_string(path)?)?,
        None => RenderConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(style) = options.style {
        config.style = style;
    }
    if let Some(width) = options.width {
        config.width = width;
    }
    config.detailed |= options.detailed;
    config.inline_meta |= options.inline_meta;
    if options.color && config.palette.is_none() {
        config.palette = Some(DEFAULT_PALETTE.iter().map(|token| token.to_string()).collect());
    }

    tracing::debug!(?config, "resolved render config");
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn load_commits(options: &CliOptions) -> Result<Vec<CommitNode>, Box<dyn Error>> {
    if options.demo {
        return Ok(lanegraph::demo::demo_history());
    }
    let raw = read_input(options.input.as_deref())?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&raw)?)
}

fn load_branches(options: &CliOptions) -> Result<Option<Vec<BranchSummary>>, Box<dyn Error>> {
    match &options.branches {
        Some(path) => Ok(Some(serde_json::from_str(&fs::read_to_string(path)?)?)),
        None if options.demo => Ok(Some(lanegraph::demo::demo_branches())),
        None => Ok(None),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "lanegraph".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let config = load_config(&options)?;
        let commits = load_commits(&options)?;
        let branches = load_branches(&options)?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        if commits.is_empty() {
            writeln!(out, "{EMPTY_HISTORY}")?;
        } else {
            for line in render_graph(&commits, &config)? {
                writeln!(out, "{line}")?;
            }
        }

        if let Some(branches) = branches {
            writeln!(out)?;
            if branches.is_empty() {
                writeln!(out, "{EMPTY_BRANCHES}")?;
            }
            for line in render_branches(&branches, &config)? {
                writeln!(out, "{line}")?;
            }
        }

        out.flush()?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("lanegraph: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use lanegraph::render::GraphStyle;

    use super::{load_config, parse_options, CliOptions};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_positional_input_and_flags() {
        let options = parse_options(args(&[
            "log.json",
            "--style",
            "ascii",
            "--width",
            "100",
            "--color",
            "--inline-meta",
        ]))
        .expect("parse options");
        assert_eq!(options.input.as_deref(), Some("log.json"));
        assert_eq!(options.style, Some(GraphStyle::Ascii));
        assert_eq!(options.width, Some(100));
        assert!(options.color);
        assert!(options.inline_meta);
        assert!(!options.detailed);
    }

    #[test]
    fn accepts_dash_for_stdin() {
        let options = parse_options(args(&["-"])).expect("parse options");
        assert_eq!(options.input.as_deref(), Some("-"));
    }

    #[test]
    fn parses_demo_with_branches_file() {
        let options = parse_options(args(&["--demo", "--branches", "b.json"])).expect("parse");
        assert!(options.demo);
        assert_eq!(options.branches.as_deref(), Some("b.json"));
    }

    #[test]
    fn rejects_demo_with_input_file() {
        parse_options(args(&["--demo", "log.json"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_style_and_bad_width() {
        parse_options(args(&["--style", "fancy"])).unwrap_err();
        parse_options(args(&["--width", "wide"])).unwrap_err();
        parse_options(args(&["--width"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags_and_inputs() {
        parse_options(args(&["--color", "--color"])).unwrap_err();
        parse_options(args(&["--style", "ascii", "--style", "compact"])).unwrap_err();
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
        parse_options(args(&["--nope"])).unwrap_err();
    }

    #[test]
    fn color_flag_falls_back_to_default_palette() {
        let options = CliOptions { color: true, detailed: true, ..CliOptions::default() };
        let config = load_config(&options).expect("config");
        assert_eq!(config.palette.as_ref().map(Vec::len), Some(5));
        assert!(config.is_detailed());
    }
}
