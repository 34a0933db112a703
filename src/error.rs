//! This module defines all the errors that can occur while running wordcheck.

use std::path::PathBuf;

use thiserror::Error;

/// Error that occur during execution of the wordcheck binary
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Error while opening or reading the dictionary
    #[error("unable to read dictionary {}: {error}", .filename.display())]
    DictionaryRead {
        /// Name of the dictionary file
        filename: PathBuf,
        /// Error from the file system
        error: std::io::Error,
    },
    /// Error while reading the words to check
    #[error("unable to read standard input: {0}")]
    InputRead(std::io::Error),
    /// Error while writing results
    #[error("unable to write output: {0}")]
    Output(std::io::Error),
}
