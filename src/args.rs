//! Raw command line scanning
//!
//! Parameters use single-dash camel-case names (`-dataType word`). They are
//! rewritten to clap long options before parsing, and anything unrecognised
//! is collected so the caller can report it and carry on.

/// Recognised parameters and the clap argument id each one maps to
pub const PARAMETERS: [(&str, &str); 4] = [
    ("-dataType", "dataType"),
    ("-sortingType", "sortingType"),
    ("-inputFile", "inputFile"),
    ("-outputFile", "outputFile"),
];

/// Flags passed through to clap untouched
const PASSTHROUGH: [&str; 2] = ["--help", "--version"];

/// Result of scanning the raw argument list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortArgs {
    /// Normalised argument list, program name first
    pub normalized: Vec<String>,
    /// Arguments that are not valid parameters, in the order seen
    pub skipped: Vec<String>,
}

impl SortArgs {
    /// Message printed for each skipped argument
    pub fn skipped_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.skipped
            .iter()
            .map(|arg| format!("\"{arg}\" is not a valid parameter. It will be skipped."))
    }
}

/// Convert single-dash parameters to the `--name=value` form clap expects.
///
/// A recognised parameter always consumes the next argument as its value,
/// even if that argument looks like another parameter. A recognised parameter
/// in last position has no value and is dropped.
pub fn scan_parameters(args: &[String]) -> SortArgs {
    let mut scanned = SortArgs::default();
    let mut iter = args.iter();

    match iter.next() {
        Some(program) => scanned.normalized.push(program.clone()),
        None => scanned.normalized.push(env!("CARGO_PKG_NAME").to_string()),
    }

    while let Some(arg) = iter.next() {
        if let Some((_, id)) = PARAMETERS.iter().find(|(name, _)| *name == arg.as_str()) {
            match iter.next() {
                Some(value) => {
                    // `=` form keeps clap from reading a leading dash as a flag
                    scanned.normalized.push(format!("--{id}={value}"));
                }
                None => log::debug!("parameter {arg} has no value, leaving it unset"),
            }
        } else if PASSTHROUGH.contains(&arg.as_str()) {
            scanned.normalized.push(arg.clone());
        } else {
            log::debug!("skipping invalid parameter {arg:?}");
            scanned.skipped.push(arg.clone());
        }
    }

    scanned
}
