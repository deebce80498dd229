// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// WASI interface definition
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -

/// Matches WASI's __wasi_iovec_t
#[repr(C)]
pub struct Iovec {
    pub buf: *mut u8,
    pub buf_len: usize,
}

/// Matches WASI's __wasi_ciovec_t
#[repr(C)]
pub struct Ciovec {
    pub buf: *const u8,
    pub buf_len: usize,
}

// __wasi_oflags_t
pub const OFLAGS_CREAT: u16 = 1 << 0;
pub const OFLAGS_TRUNC: u16 = 1 << 3;

// __wasi_rights_t
pub const RIGHTS_FD_READ: u64 = 1 << 1;
pub const RIGHTS_FD_SEEK: u64 = 1 << 2;
pub const RIGHTS_FD_WRITE: u64 = 1 << 6;

// __wasi_lookupflags_t
pub const LOOKUP_SYMLINK_FOLLOW: u32 = 1 << 0;

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
#[link(wasm_import_module = "wasi_snapshot_preview1")]
unsafe extern "C" {
    pub fn path_open(
        dir_fd: u32,
        dirflags: u32,
        path: *const u8,
        path_len: usize,
        oflags: u16,
        fs_rights_base: u64,
        fs_rights_inheriting: u64,
        fdflags: u16,
        fd_out: *mut u32,
    ) -> u16;

    pub fn fd_read(fd: u32, iovs: *const Iovec, iovs_len: usize, nread: *mut usize) -> u16;
    pub fn fd_write(fd: u32, iovs: *const Ciovec, iovs_len: usize, nwritten: *mut usize) -> u16;
    pub fn fd_close(fd: u32) -> u16;
}
