use crate::{
    error::Error,
    transfer::{Transferred, transfer},
};

use log::debug;
use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Stream the single file named in `operands` to stdout.
///
/// Anything other than exactly one operand is a usage error, reported before stdout is touched.
pub fn cat_args(program: &str, operands: &[PathBuf]) -> Result<Transferred, Error> {
    let [path] = operands else {
        return Err(Error::Usage(program.to_string()));
    };

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    cat_file(path, &mut sink)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Open `path` read-only and copy its full contents into `sink`
pub fn cat_file<W: Write + ?Sized>(path: &Path, sink: &mut W) -> Result<Transferred, Error> {
    let mut input = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened input {}", path.display());

    transfer(&mut input, sink)
}
