use blkcopy::{Error, Transferred};

use log::{debug, info};
use std::process;

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Under WASI the host calls `entry` after instantiation, so there is nothing to do here
#[cfg(target_os = "wasi")]
fn main() {}

#[cfg(not(target_os = "wasi"))]
fn main() {
    env_logger::init();
    run(blkcopy::copy::copy_fixture);
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Host-callable export: copy test.txt to test2.txt inside the first preopened directory
#[cfg(target_os = "wasi")]
#[unsafe(export_name = "entry")]
pub extern "C" fn entry() -> i32 {
    let _ = env_logger::try_init();
    run(blkcopy::wasi::copy_fixture);
    0
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn run(copy: fn() -> Result<Transferred, Error>) {
    match copy() {
        Ok(totals) => info!("copied {} bytes in {} chunks", totals.bytes, totals.chunks),
        Err(e) => {
            eprintln!("{e}");
            debug!("{e:?}");
            process::exit(e.exit_code());
        }
    }
}
