/*!
  Binary for the CLI of wordcheck
*/

#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(missing_docs, unused_import_braces, unused_qualifications)]

mod cli;
mod error;

use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    time::{Duration, Instant},
};

use clap::Parser;
use cli::CliApp;
use colored::Colorize;
use error::CliError;
use wordcheck::{HashTable, Words};

fn print_info(fill_time: Duration, search_time: Duration, unknown: usize) {
    eprint!(
        "\nFill time: {:.6}\nSearch time: {:.6}\nUnknown words: {}\n",
        fill_time.as_secs_f64(),
        search_time.as_secs_f64(),
        unknown
    );
}

fn run(cli: CliApp) -> Result<(), CliError> {
    let mut table = HashTable::new(cli.size, cli.kind());

    log::info!("Reading dictionary ...");

    let fill_start = Instant::now();
    let dictionary = fs::read(&cli.dictionary).map_err(|error| CliError::DictionaryRead {
        filename: cli.dictionary.clone(),
        error,
    })?;

    let mut loaded = 0;
    for word in Words::new(&dictionary) {
        table.insert(&word);
        loaded += 1;
    }
    let fill_time = fill_start.elapsed();

    log::info!("Dictionary loaded: {loaded} words in {} buckets", table.size());

    let mut out = BufWriter::new(io::stdout().lock());
    let mut search_time = Duration::ZERO;
    let mut unknown = 0;

    if cli.print {
        write!(out, "{table}").map_err(CliError::Output)?;
    } else {
        log::info!("Checking words ...");

        let search_start = Instant::now();
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .map_err(CliError::InputRead)?;

        for word in Words::new(&input) {
            if !table.search(&word) {
                writeln!(out, "{word}").map_err(CliError::Output)?;
                unknown += 1;
            }
        }
        search_time = search_start.elapsed();

        log::info!("Checking done: {unknown} unknown words");
    }

    out.flush().map_err(CliError::Output)?;

    if cli.info {
        print_info(fill_time, search_time, unknown);
    }

    Ok(())
}

fn main() {
    let cli = CliApp::parse();

    cli.logging.initialize_logging();
    log::info!("Version: {}", clap::crate_version!());
    log::debug!("Dictionary: {:?}", cli.dictionary);

    run(cli).unwrap_or_else(|err| {
        log::error!("{} {err}", "error:".red().bold());
        std::process::exit(1)
    })
}
