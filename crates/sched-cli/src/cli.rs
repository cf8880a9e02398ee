//! CLI argument definitions for the coverage validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Input path used when no positional argument is given.
pub const DEFAULT_INPUT: &str = "cuSchedNormalized.ods";

#[derive(Parser)]
#[command(
    name = "sched-coverage",
    version,
    about = "Validate imaging schedule coverage grids",
    long_about = "Parse an ODS staffing schedule organized as coverage grids\n\
                  (study types x shift positions, one sheet per time period)\n\
                  and check that every study type is covered on both weekdays\n\
                  and weekends."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate weekday/weekend coverage and report gaps.
    Validate(ValidateArgs),

    /// List sheets with their derived day type and time range.
    Sheets(InputArgs),

    /// Generate plain-English descriptions of every study type.
    Describe(DescribeArgs),

    /// Show what is covered during a time period or at a given hour.
    Hours(HoursArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Path to the ODS schedule file.
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit the validation report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Skip the per-category rollup section.
    #[arg(long = "no-categories")]
    pub no_categories: bool,

    /// Exit 0 even when coverage gaps are found.
    ///
    /// By default a non-empty gap list exits with status 1. Structural
    /// failures (unreadable container, malformed document) always exit 2.
    #[arg(long = "no-fail-on-gaps")]
    pub no_fail_on_gaps: bool,
}

#[derive(Parser)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Description detail level.
    #[arg(long = "format", value_enum, default_value = "medium")]
    pub format: DescribeFormatArg,
}

#[derive(Parser)]
pub struct HoursArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Hour of day (0-23); lists all periods when omitted.
    #[arg(long = "hour", value_name = "HOUR", value_parser = clap::value_parser!(u8).range(0..=23))]
    pub hour: Option<u8>,

    /// Look at weekend coverage instead of weekday.
    #[arg(long = "weekend")]
    pub weekend: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DescribeFormatArg {
    Short,
    Medium,
    Long,
    Patient,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_flag_rejects_values_past_23() {
        assert!(Cli::try_parse_from(["sched-coverage", "hours", "--hour", "30"]).is_err());
        assert!(Cli::try_parse_from(["sched-coverage", "hours", "--hour", "24"]).is_err());
    }

    #[test]
    fn hour_flag_accepts_the_full_day() {
        for hour in ["0", "23"] {
            let cli = Cli::try_parse_from(["sched-coverage", "hours", "--hour", hour])
                .expect("in-range hour");
            assert!(matches!(cli.command, Command::Hours(_)));
        }
    }
}
