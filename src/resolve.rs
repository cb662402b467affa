//! Turns a frame into the module name and absolute source path a sample is
//! attributed to.
//!
//! Neither resolver fails: a missing module name or an unresolvable path is an
//! expected case and comes back as one of the fallback literals below.
//! [`try_file_name`] is there for callers that want to know why a path did
//! not resolve.


use alloc::{borrow::ToOwned, boxed::Box, ffi::CString};
use core::{
    ffi::{self, CStr},
    fmt,
};

use crate::{config::Config, frame::Frame, stdext, view::CStrView};

/// File name of the synthetic frames numpy's `__array_function__` dispatch
/// injects (NEP 18). They have no `__name__` global.
pub const ARRAY_FUNCTION_INTERNALS: &CStr = c"<__array_function__ internals>";
/// Module name reported for [`ARRAY_FUNCTION_INTERNALS`] frames.
pub const ARRAY_FUNCTION_MODULE: &CStr = c"numpy.__array_function__";
/// File name reported when the code object's file name is the "no value" sentinel.
pub const NO_FILE_NAME: &CStr = c"None";
/// File name reported when the path could not be canonicalized.
pub const ERROR_PATH: &CStr = c"ErrorPath";

const PATH_MAX: usize = libc::PATH_MAX as usize;

/// Storage for one canonicalized path.
///
/// A resolved file name borrows the buffer it was written to, so the buffer
/// cannot be reused while that name is still alive.
pub struct PathBuffer {
    bytes: [ffi::c_char; PATH_MAX],
}

impl PathBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0; PATH_MAX],
        }
    }

    /// Resolves `path` to an absolute path without `.`, `..` or symlinks.
    pub fn canonicalize(&mut self, path: CStrView<'_>) -> Result<CStrView<'_>, ResolveError> {
        // SAFETY: `path` is NUL-terminated and `bytes` holds PATH_MAX bytes,
        // which is what realpath writes at most.
        let resolved = unsafe { libc::realpath(path.as_ptr(), self.bytes.as_mut_ptr()) };
        if resolved.is_null() {
            return Err(ResolveError::from_errno(stdext::errno()));
        }
        // SAFETY: On success realpath returns `bytes`, now NUL-terminated.
        Ok(unsafe { CStrView::from_ptr(resolved) })
    }
}

impl Default for PathBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PathBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathBuffer").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    NotFound,
    NameTooLong,
    PermissionDenied,
    NotADirectory,
    SymlinkLoop,
    Other,
}

/// Canonicalizing a source file name failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveError {
    errno: i32,
}

impl ResolveError {
    pub fn from_errno(errno: i32) -> Self {
        Self { errno }
    }

    pub fn errno(&self) -> i32 {
        self.errno
    }

    pub fn kind(&self) -> ResolveErrorKind {
        match self.errno {
            libc::ENOENT => ResolveErrorKind::NotFound,
            libc::ENAMETOOLONG => ResolveErrorKind::NameTooLong,
            libc::EACCES => ResolveErrorKind::PermissionDenied,
            libc::ENOTDIR => ResolveErrorKind::NotADirectory,
            libc::ELOOP => ResolveErrorKind::SymlinkLoop,
            _ => ResolveErrorKind::Other,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        stdext::with_os_error_str(self.errno, |msg| {
            write!(f, "{msg} (os error {})", self.errno)
        })
    }
}

impl core::error::Error for ResolveError {}

/// The module a frame belongs to, with the default [`Config`].
pub fn get_module_name<F: Frame + ?Sized>(frame: &F) -> CStrView<'_> {
    module_name(frame, &Config::DEFAULT)
}

#[instrument(level = "trace", skip_all)]
pub fn module_name<'f, F: Frame + ?Sized>(frame: &'f F, config: &Config) -> CStrView<'f> {
    if let Some(name) = frame.lookup_global(c"__name__") {
        return name;
    }

    match frame.source_file_name() {
        Some(file) if file == ARRAY_FUNCTION_INTERNALS => {
            trace!("numpy __array_function__ dispatch frame");
            CStrView::from_cstr(ARRAY_FUNCTION_MODULE)
        }
        file => {
            trace!(?file, "frame has no __name__ global");
            CStrView::from_cstr(config.unknown_module)
        }
    }
}

/// The canonical absolute source path of a frame, written into `buf`.
///
/// Returns `Ok(None)` when the code object has no file name.
#[instrument(level = "trace", skip_all)]
pub fn try_file_name<'b, F: Frame + ?Sized>(
    frame: &F,
    buf: &'b mut PathBuffer,
) -> Result<Option<CStrView<'b>>, ResolveError> {
    let Some(name) = frame.source_file_name() else {
        trace!("code object has no file name");
        return Ok(None);
    };
    buf.canonicalize(name).map(Some)
}

/// Like [`try_file_name`], but folds the failure cases into
/// [`NO_FILE_NAME`] and [`ERROR_PATH`].
pub fn get_file_name<'b, F: Frame + ?Sized>(frame: &F, buf: &'b mut PathBuffer) -> CStrView<'b> {
    match try_file_name(frame, buf) {
        Ok(Some(path)) => path,
        Ok(None) => CStrView::from_cstr(NO_FILE_NAME),
        Err(err) => {
            debug!(
                file = ?frame.source_file_name(),
                kind = ?err.kind(),
                "failed to canonicalize source file name: {err}"
            );
            CStrView::from_cstr(ERROR_PATH)
        }
    }
}

/// [`get_file_name`] into a fresh buffer, returning an owned copy.
pub fn file_name_owned<F: Frame + ?Sized>(frame: &F) -> CString {
    let mut buf = Box::new(PathBuffer::new());
    get_file_name(frame, &mut buf).as_cstr().to_owned()
}
