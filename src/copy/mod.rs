use crate::{
    error::Error,
    transfer::{Transferred, transfer},
};

use log::debug;
use std::{
    fs::{File, OpenOptions},
    path::Path,
};

pub const SOURCE_PATH: &str = "test.txt";
pub const DEST_PATH: &str = "test2.txt";
pub const DEST_MODE: u32 = 0o660;

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Copy `SOURCE_PATH` to `DEST_PATH`, both relative to the current directory
pub fn copy_fixture() -> Result<Transferred, Error> {
    copy_file(Path::new(SOURCE_PATH), Path::new(DEST_PATH))
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Copy `from` over `to`.
///
/// The input is opened first, so a missing input never creates the output. The output is created
/// if needed and always truncated: re-running a copy leaves no stale tail from a longer previous
/// destination.
pub fn copy_file(from: &Path, to: &Path) -> Result<Transferred, Error> {
    let mut input = File::open(from).map_err(|source| Error::OpenInput {
        path: from.to_path_buf(),
        source,
    })?;
    debug!("opened input {}", from.display());

    let mut output = output_options()
        .open(to)
        .map_err(|source| Error::OpenOutput {
            path: to.to_path_buf(),
            source,
        })?;
    debug!("opened output {}", to.display());

    transfer(&mut input, &mut output)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Internal
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn output_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DEST_MODE);
    }

    options
}
