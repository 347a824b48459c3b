use std::error::Error;
use std::io::Write;

use clap::{Parser, ValueEnum, error::ErrorKind};
use tracing::info;

use crate::config::{DrawConfig, OutputFormat};
use crate::constants::roster::{GROUP_A_PREFIX, GROUP_B_PREFIX, LIST_PREFIX};
use crate::data::{Draw, Entry, labels_line};
use crate::draw::{draw_groups, draw_groups_with};
use crate::rng::DeterministicRng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roster_split",
    disable_help_subcommand = true,
    about = "Draw a random distinct roster and split it into two groups",
    long_about = "Shuffle a pool of names, take a distinct roster of the requested size, and split it into Group A (first half) and Group B (second half).",
    after_help = "Without --name the built-in six-name pool is used. Without --seed the draw is seeded from the clock."
)]
/// CLI for `roster_split`.
///
/// Common usage:
/// - Draw the whole default pool: `roster_split`
/// - Repeat a draw: `roster_split --seed 42`
/// - Custom pool: `roster_split --name ada --name brian --name cleo --name dan`
struct DrawCli {
    #[arg(long, help = "Optional deterministic seed for a reproducible draw")]
    seed: Option<u64>,
    #[arg(
        long,
        value_name = "N",
        help = "Roster size (defaults to the pool size, must be even)"
    )]
    count: Option<usize>,
    #[arg(
        long = "name",
        value_name = "NAME",
        help = "Pool entry, repeat as needed in pool order"
    )]
    names: Vec<String>,
    #[arg(long, value_enum, default_value = "text", help = "Output format")]
    format: FormatArg,
}

/// Parse `args_iter`, run one draw, and write the result to `out`.
///
/// Tracing output goes to stderr so `out` only ever carries the draw.
pub fn run_draw<I, W>(args_iter: I, out: &mut W) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
    W: Write,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let Some(cli) = parse_cli::<DrawCli, _>(
        std::iter::once("roster_split".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let mut config = DrawConfig {
        seed: cli.seed,
        count: cli.count,
        format: cli.format.into(),
        ..DrawConfig::default()
    };
    if !cli.names.is_empty() {
        config.pool = cli.names;
    }
    let config = config.validated()?;
    let count = config.resolved_count();

    let draw = match config.seed {
        Some(seed) => {
            info!(seed, count, "drawing with explicit seed");
            draw_groups_with(&config.pool, count, &mut DeterministicRng::new(seed))?
        }
        None => draw_groups(&config.pool, count)?,
    };

    match config.format {
        OutputFormat::Text => write_text(out, &draw)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &draw)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, draw: &Draw<'_>) -> std::io::Result<()> {
    write_labelled_line(out, LIST_PREFIX, &draw.list)?;
    write_labelled_line(out, GROUP_A_PREFIX, &draw.group_a)?;
    write_labelled_line(out, GROUP_B_PREFIX, &draw.group_b)
}

fn write_labelled_line<W: Write>(
    out: &mut W,
    prefix: &str,
    entries: &[Entry<'_>],
) -> std::io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "{prefix}")
    } else {
        writeln!(out, "{prefix} {}", labels_line(entries))
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, Box<dyn Error>> {
        let mut out = Vec::new();
        run_draw(args.iter().map(|arg| arg.to_string()), &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn parses_repeated_names_in_order() {
        let cli = DrawCli::try_parse_from([
            "roster_split",
            "--name",
            "b",
            "--name",
            "a",
            "--count",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.names, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(cli.count, Some(2));
        assert!(cli.seed.is_none());
        assert!(matches!(cli.format, FormatArg::Text));
    }

    #[test]
    fn seeded_text_output_is_reproducible() {
        let first = run(&["--seed", "42"]).unwrap();
        let second = run(&["--seed", "42"]).unwrap();
        assert_eq!(first, second);
        let lines: Vec<&str> = first.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(LIST_PREFIX));
        assert!(lines[1].starts_with(GROUP_A_PREFIX));
        assert!(lines[2].starts_with(GROUP_B_PREFIX));
    }

    #[test]
    fn empty_roster_prints_bare_prefixes() {
        let output = run(&["--count", "0"]).unwrap();
        assert_eq!(
            output,
            format!("{LIST_PREFIX}\n{GROUP_A_PREFIX}\n{GROUP_B_PREFIX}\n")
        );
    }

    #[test]
    fn help_is_not_an_error() {
        let output = run(&["--help"]).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(run(&["--bogus"]).is_err());
    }
}
