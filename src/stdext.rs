use core::ffi::{self, CStr};

#[cfg(target_os = "linux")]
pub(crate) fn errno() -> i32 {
    // SAFETY: errno is thread-local and its location is always valid.
    unsafe { *libc::__errno_location() }
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
pub(crate) fn errno() -> i32 {
    // SAFETY: errno is thread-local and its location is always valid.
    unsafe { *libc::__error() }
}

pub(crate) fn with_os_error_str<R>(errno: i32, f: impl FnOnce(&str) -> R) -> R {
    let mut buf: [u8; 512] = [0; 512];

    // SAFETY: Our buffer length is passed correctly
    let error = unsafe { libc::strerror_r(errno, buf.as_mut_ptr().cast(), buf.len()) };
    let cstr = if error != 0 {
        c"<strerror_r returned an error>"
    } else {
        // SAFETY: On success strerror_r leaves a NUL-terminated message in buf,
        // which was zeroed beforehand in any case.
        unsafe { CStr::from_ptr(buf.as_ptr().cast::<ffi::c_char>()) }
    };
    f(cstr
        .to_str()
        .unwrap_or("<error message contained invalid utf8>"))
}
