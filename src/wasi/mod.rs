mod interface;

use crate::{
    copy::{DEST_PATH, SOURCE_PATH},
    error::Error,
    transfer::{Transferred, transfer},
};

use interface::*;
use log::{debug, warn};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};

/// First preopened directory handed to the module by the host
pub const PREOPEN_FD: u32 = 3;

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// An open WASI file descriptor, closed on drop
#[derive(Debug)]
pub struct WasiFd(u32);

impl WasiFd {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl Read for WasiFd {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let iov = Iovec {
            buf: buf.as_mut_ptr(),
            buf_len: buf.len(),
        };
        let mut nread: usize = 0;

        match unsafe { fd_read(self.0, &iov, 1, &mut nread) } {
            0 => Ok(nread),
            errno => Err(errno_to_io(errno)),
        }
    }
}

impl Write for WasiFd {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let iov = Ciovec {
            buf: buf.as_ptr(),
            buf_len: buf.len(),
        };
        let mut nwritten: usize = 0;

        match unsafe { fd_write(self.0, &iov, 1, &mut nwritten) } {
            0 => Ok(nwritten),
            errno => Err(errno_to_io(errno)),
        }
    }

    // fd_write is unbuffered
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for WasiFd {
    fn drop(&mut self) {
        let ret = unsafe { fd_close(self.0) };
        if ret != 0 {
            warn!("fd_close({}) failed: {}", self.0, errno_to_io(ret));
        }
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Rust <--> WASI interface
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Open `path` under `dir_fd` for reading
pub fn open_input(dir_fd: u32, path: &str) -> io::Result<WasiFd> {
    wasi_path_open(dir_fd, path, 0, RIGHTS_FD_READ | RIGHTS_FD_SEEK)
}

/// Open `path` under `dir_fd` for writing, creating it if needed and discarding any old contents
pub fn open_output(dir_fd: u32, path: &str) -> io::Result<WasiFd> {
    wasi_path_open(dir_fd, path, OFLAGS_CREAT | OFLAGS_TRUNC, RIGHTS_FD_WRITE | RIGHTS_FD_SEEK)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Copy `SOURCE_PATH` to `DEST_PATH` inside the first preopened directory using raw WASI calls
pub fn copy_fixture() -> Result<Transferred, Error> {
    let mut input = open_input(PREOPEN_FD, SOURCE_PATH).map_err(|source| Error::OpenInput {
        path: PathBuf::from(SOURCE_PATH),
        source,
    })?;
    debug!("opened input {SOURCE_PATH} as fd {}", input.raw());

    let mut output = open_output(PREOPEN_FD, DEST_PATH).map_err(|source| Error::OpenOutput {
        path: PathBuf::from(DEST_PATH),
        source,
    })?;
    debug!("opened output {DEST_PATH} as fd {}", output.raw());

    transfer(&mut input, &mut output)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Internal
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn wasi_path_open(dir_fd: u32, path: &str, oflags: u16, rights: u64) -> io::Result<WasiFd> {
    let mut new_fd: u32 = 0;

    let ret = unsafe {
        path_open(
            dir_fd,
            LOOKUP_SYMLINK_FOLLOW,
            path.as_ptr(),
            path.len(),
            oflags,
            rights,
            0, // inheriting rights
            0, // fdflags
            &mut new_fd,
        )
    };

    match ret {
        0 => Ok(WasiFd(new_fd)),
        errno => Err(errno_to_io(errno)),
    }
}

// WASI errno values are what std uses as raw OS errors on this target
fn errno_to_io(errno: u16) -> io::Error {
    io::Error::from_raw_os_error(i32::from(errno))
}
