use blkcopy::{Error, cat};

use clap::Parser;
use log::debug;
use std::{env, path::PathBuf, process};

#[derive(Parser, Debug)]
#[command(name = "cat", version, about = "Write one file to standard output", long_about = None)]
struct Cli {
    /// File to read; exactly one is expected
    #[arg(value_name = "FROM", allow_hyphen_values = true)]
    paths: Vec<PathBuf>,
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let program = env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cat".to_string());

    match cat::cat_args(&program, &cli.paths) {
        Ok(totals) => debug!("{} bytes written to stdout", totals.bytes),
        Err(e) => fail(e),
    }
}

fn fail(e: Error) -> ! {
    eprintln!("{e}");
    debug!("{e:?}");
    process::exit(e.exit_code());
}
