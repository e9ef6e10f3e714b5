//! # Payoff matrices read from disk
//!
//! Small games with known solutions, stored next to this file.
use std::path::{Path, PathBuf};

/// # Reading and solving
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the payoff files are stored.
///
/// The path is relative to the project root folder.
fn payoff_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of a payoff file, based on its file name.
///
/// # Arguments
///
/// * `name`: File name including extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    payoff_file_directory().join(name)
}
