//! Sorting tool command line entry point

use clap::{Arg, ArgAction, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use sorting_tool::{
    args::scan_parameters,
    config::{SortConfig, SortingType},
    error::SortResult,
    sort,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sorting-tool: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let args: Vec<String> = std::env::args().collect();
    let scanned = scan_parameters(&args);

    {
        let mut stdout = io::stdout().lock();
        for message in scanned.skipped_messages() {
            writeln!(stdout, "{message}")?;
        }
        stdout.flush()?;
    }

    let matches = build_cli().get_matches_from(scanned.normalized);
    let config = parse_config_from_matches(&matches)?;

    sort(&config)
}

fn build_cli() -> Command {
    Command::new("sorting-tool")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage(
            "sorting-tool [-dataType long|word|line] [-sortingType natural|byCount] \
             [-inputFile <path>] [-outputFile <path>]",
        )
        .about("Sort integers, words or lines naturally or by frequency")
        .args_override_self(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("dataType")
            .long("dataType")
            .help("Kind of token to read: long, word or line")
            .value_name("TYPE")
            .default_value("long"))
        .arg(Arg::new("sortingType")
            .long("sortingType")
            .help("Output order: natural or byCount")
            .value_name("ORDER")
            .default_value("natural"))
        .arg(Arg::new("inputFile")
            .long("inputFile")
            .help("Read from FILE instead of standard input")
            .value_name("FILE"))
        .arg(Arg::new("outputFile")
            .long("outputFile")
            .help("Write to FILE instead of standard output")
            .value_name("FILE"))
        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .arg(Arg::new("version")
            .long("version")
            .help("Output version information and exit")
            .action(ArgAction::Version))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::new();

    if let Some(data_type) = matches.get_one::<String>("dataType") {
        config = config.with_data_type(data_type);
    }
    if let Some(sorting_type) = matches.get_one::<String>("sortingType") {
        config = config.with_sorting_type(SortingType::from_parameter(sorting_type));
    }

    config = config
        .with_input_file(matches.get_one::<String>("inputFile").map(PathBuf::from))
        .with_output_file(matches.get_one::<String>("outputFile").map(PathBuf::from));

    config.validate()?;
    Ok(config)
}
