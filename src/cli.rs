//! Contains structures and functionality for the binary
use std::path::PathBuf;

use wordcheck::{ContainerKind, DEFAULT_SIZE};

/// Log levels accepted by `--log`
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LogLevel {
    /// Only failures to read the dictionary or the input
    Error,
    /// Warnings and errors
    Warn,
    /// Progress of loading the dictionary and checking the input
    Info,
    /// Also the command line and the table geometry
    Debug,
    /// Also one record per bucket the hash table touches
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How much wordcheck reports on stderr while it runs.
///
/// Unknown words always go to stdout, whatever the level.
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Report progress: -v for loading and checking, -vv adds the table geometry, -vvv adds
    /// per-bucket records
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Only report errors (same as --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set the log level directly [default: warn, or WORDCHECK_LOG when set]
    #[arg(long = "log", value_enum, group = "verbosity")]
    log_level: Option<LogLevel>,
}

impl LoggingArgs {
    /// Level requested on the command line, if any
    pub(crate) fn level(&self) -> Option<log::LevelFilter> {
        if let Some(level) = self.log_level {
            return Some(level.into());
        }
        if self.quiet {
            return Some(log::LevelFilter::Error);
        }
        match self.verbose {
            0 => None,
            1 => Some(log::LevelFilter::Info),
            2 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }

    /// Install the stderr logger.
    ///
    /// A level given on the command line wins over `WORDCHECK_LOG`, which in turn wins over the
    /// `Warn` default.
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Warn);
        builder.parse_env("WORDCHECK_LOG");

        if let Some(level) = self.level() {
            builder.filter_level(level);
        }
        builder.init();
    }
}

/// Check words read from standard input against a dictionary, printing the unknown ones
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub(crate) struct CliApp {
    /// Dictionary of known words
    #[arg(value_parser, required = true)]
    pub(crate) dictionary: PathBuf,
    /// Use a robust chaining method: a red-black tree as the container of every bucket
    #[arg(short, long)]
    pub(crate) robust: bool,
    /// Number of buckets in the hash table
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub(crate) size: usize,
    /// Print the hash table to stdout, one line per non-empty container, instead of checking
    /// standard input
    #[arg(short, long)]
    pub(crate) print: bool,
    /// Print how long it took to fill and to search the hash table, and how many unknown words
    /// were found
    #[arg(short, long)]
    pub(crate) info: bool,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

impl CliApp {
    /// The container kind selected by the arguments
    pub(crate) fn kind(&self) -> ContainerKind {
        if self.robust {
            ContainerKind::RedBlackTree
        } else {
            ContainerKind::FlexArray
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use log::LevelFilter;

    use super::CliApp;
    use wordcheck::ContainerKind;

    fn level(args: &[&str]) -> Option<LevelFilter> {
        let mut argv = vec!["wordcheck"];
        argv.extend_from_slice(args);
        argv.push("dict.txt");
        CliApp::try_parse_from(argv)
            .expect("arguments parse")
            .logging
            .level()
    }

    #[test]
    fn logging_level() {
        assert_eq!(level(&[]), None);
        assert_eq!(level(&["-v"]), Some(LevelFilter::Info));
        assert_eq!(level(&["-vv"]), Some(LevelFilter::Debug));
        assert_eq!(level(&["-vvvv"]), Some(LevelFilter::Trace));
        assert_eq!(level(&["-q"]), Some(LevelFilter::Error));
        assert_eq!(level(&["--log", "debug"]), Some(LevelFilter::Debug));
        assert!(CliApp::try_parse_from(["wordcheck", "--log", "loud", "dict.txt"]).is_err());
        assert!(CliApp::try_parse_from(["wordcheck", "-q", "--log", "info", "dict.txt"]).is_err());
    }

    #[test]
    fn container_kind() {
        let cli = CliApp::try_parse_from(["wordcheck", "dict.txt"]).expect("arguments parse");
        assert_eq!(cli.kind(), ContainerKind::FlexArray);
        assert_eq!(cli.size, wordcheck::DEFAULT_SIZE);

        let cli = CliApp::try_parse_from(["wordcheck", "-r", "-s", "7", "dict.txt"])
            .expect("arguments parse");
        assert_eq!(cli.kind(), ContainerKind::RedBlackTree);
        assert_eq!(cli.size, 7);
    }
}
