// SPDX-FileCopyrightText: 2021-2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, sync::LazyLock};

use clap::{command, crate_name, value_parser, Arg, ArgAction, Command, ValueHint};
use cli_utils::logging;
use const_format::formatcp;
use mdscribe::constants::DEFAULT_LINE_LENGTH;
use mdscribe::options::{ReflowOptions, WriterOptions};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_CHECK: &str = "check";
pub const A_S_CHECK: char = 'c';
pub const A_L_INDENTATION: &str = "indentation";
pub const A_S_INDENTATION: char = 'i';
pub const A_L_LINE_LENGTH: &str = "line-length";
pub const A_S_LINE_LENGTH: char = 'w';
pub const A_L_TITLE: &str = "title";
pub const A_S_TITLE: char = 't';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

pub const DEFAULT_INDENTATION: u8 = 4;
#[allow(clippy::cast_possible_truncation)]
pub const DEFAULT_LINE_LENGTH_U16: u16 = DEFAULT_LINE_LENGTH as u16;
static DEFAULT_INDENTATION_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_INDENTATION.to_string());
static DEFAULT_LINE_LENGTH_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_LINE_LENGTH_U16.to_string());

fn arg_check() -> Arg {
    Arg::new(A_L_CHECK)
        .help(
            "Do not print the result but only check \
if the input already is reflowed",
        )
        .long_help(
            "Do not print the result but only check \
if the input already is reflowed. \
If it is not, a unified diff between the input and the reflowed version \
is reported, and we exit with an error.",
        )
        .action(ArgAction::SetTrue)
        .short(A_S_CHECK)
        .long(A_L_CHECK)
}

fn arg_indentation() -> Arg {
    Arg::new(A_L_INDENTATION)
        .help("Number of spaces per level of indentation")
        .num_args(1)
        .short(A_S_INDENTATION)
        .long(A_L_INDENTATION)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u8).range(1..))
        .default_value(DEFAULT_INDENTATION_STR.as_str())
}

fn arg_line_length() -> Arg {
    Arg::new(A_L_LINE_LENGTH)
        .help("Maximum width of a line, CJK ideographs counting double")
        .num_args(1)
        .short(A_S_LINE_LENGTH)
        .long(A_L_LINE_LENGTH)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u16).range(1..))
        .default_value(DEFAULT_LINE_LENGTH_STR.as_str())
}

fn arg_title() -> Arg {
    Arg::new(A_L_TITLE)
        .help("A title to write as level 1 heading before the text")
        .num_args(1)
        .short(A_S_TITLE)
        .long(A_L_TITLE)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("TEXT")
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help("Plain text file(s) to reflow; '-' for stdin")
        .num_args(1..)
        .value_name("FILE")
        .value_hint(ValueHint::FilePath)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
        .default_value(mdscribe::STDIN)
}

fn args_matcher() -> Command {
    command!()
        .about("Reflows plain text into word-wrapped markdown")
        .long_about(
            "Takes plain text as input, \
splits it into paragraphs at blank lines, \
and writes them as markdown paragraphs, \
word-wrapped to a maximum line length. \
 \
Wrapping knows about CJK text: \
ideographs count as two columns, \
and lines may be broken between any two of them.",
        )
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_check())
        .arg(arg_indentation())
        .arg(arg_line_length())
        .arg(arg_title())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", mdscribe::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),
}

pub fn init() -> Result<(ReflowOptions, Vec<PathBuf>), InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let check = args.get_flag(A_L_CHECK);
    let indentation_spaces = args
        .get_one::<u8>(A_L_INDENTATION)
        .copied()
        .unwrap_or(DEFAULT_INDENTATION)
        .into();
    let line_length = args
        .get_one::<u16>(A_L_LINE_LENGTH)
        .copied()
        .unwrap_or(DEFAULT_LINE_LENGTH_U16)
        .into();
    let title = args.get_one::<String>(A_L_TITLE).cloned();

    let src: Vec<PathBuf> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|sources| sources.cloned().collect())
        .unwrap_or_default();
    Ok((
        ReflowOptions {
            writer: WriterOptions::default()
                .with_indentation(" ".repeat(indentation_spaces))
                .with_line_length(line_length),
            title,
            check,
        },
        src,
    ))
}
