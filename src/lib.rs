pub mod cat;
pub mod copy;
pub mod error;
pub mod transfer;

#[cfg(target_os = "wasi")]
pub mod wasi;

pub use error::Error;
pub use transfer::{BLOCK_SIZE, Transferred, transfer, transfer_with_buffer};
