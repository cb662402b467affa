//! A borrowed view over a NUL-terminated C string.
//!
//! This is what every resolver hands back. It never owns or copies the bytes,
//! so it is only valid for as long as whatever produced the pointer: a string
//! literal, a [`PathBuffer`](crate::PathBuffer), or a string owned by the host
//! interpreter's frame.

#[cfg(test)]
mod tests;

use core::{
    ffi::{self, CStr},
    fmt,
    marker::PhantomData,
    ptr::NonNull,
};

#[derive(Clone, Copy)]
pub struct CStrView<'a> {
    ptr: NonNull<ffi::c_char>,
    _marker: PhantomData<&'a CStr>,
}

// SAFETY: A view is a shared, read-only borrow of the bytes, just like `&CStr`.
unsafe impl Send for CStrView<'_> {}
// SAFETY: See above.
unsafe impl Sync for CStrView<'_> {}

impl<'a> CStrView<'a> {
    /// Wraps a raw pointer.
    ///
    /// # Panics
    /// Panics if `ptr` is null.
    ///
    /// # Safety
    /// `ptr` must point to a NUL-terminated string that stays alive and
    /// unmodified for `'a`.
    pub unsafe fn from_ptr(ptr: *const ffi::c_char) -> Self {
        let Some(ptr) = NonNull::new(ptr.cast_mut()) else {
            panic!("CStrView::from_ptr called with a null pointer");
        };
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    pub const fn from_cstr(s: &'a CStr) -> Self {
        Self {
            // SAFETY: `CStr::as_ptr` is never null.
            ptr: unsafe { NonNull::new_unchecked(s.as_ptr().cast_mut()) },
            _marker: PhantomData,
        }
    }

    /// The wrapped pointer, unchanged.
    pub const fn as_ptr(self) -> *const ffi::c_char {
        self.ptr.as_ptr().cast_const()
    }

    pub fn as_cstr(self) -> &'a CStr {
        // SAFETY: Upheld by the constructors.
        unsafe { CStr::from_ptr(self.as_ptr()) }
    }

    /// The bytes without the terminator.
    pub fn to_bytes(self) -> &'a [u8] {
        self.as_cstr().to_bytes()
    }

    pub fn to_str(self) -> Result<&'a str, core::str::Utf8Error> {
        self.as_cstr().to_str()
    }

    /// Pointer to the first occurrence of `c`, or `None`.
    ///
    /// Like `strchr`, searching for `0` finds the terminator.
    pub fn find(self, c: u8) -> Option<*const ffi::c_char> {
        // SAFETY: `self` is NUL-terminated.
        let found = unsafe { libc::strchr(self.as_ptr(), ffi::c_int::from(c)) };
        (!found.is_null()).then_some(found.cast_const())
    }

    /// Whether the first `prefix.to_bytes().len()` bytes equal `prefix`.
    pub fn starts_with(self, prefix: &CStr) -> bool {
        let n = prefix.to_bytes().len();
        // SAFETY: Both are NUL-terminated and strncmp stops at the first
        // mismatch, which a shorter `self` hits at its terminator.
        unsafe { libc::strncmp(self.as_ptr(), prefix.as_ptr(), n) == 0 }
    }
}

impl<'a> From<&'a CStr> for CStrView<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::from_cstr(s)
    }
}

impl PartialEq for CStrView<'_> {
    fn eq(&self, other: &Self) -> bool {
        // SAFETY: Both are NUL-terminated.
        unsafe { libc::strcmp(self.as_ptr(), other.as_ptr()) == 0 }
    }
}

impl Eq for CStrView<'_> {}

impl PartialEq<CStr> for CStrView<'_> {
    fn eq(&self, other: &CStr) -> bool {
        *self == CStrView::from_cstr(other)
    }
}

impl PartialEq<&CStr> for CStrView<'_> {
    fn eq(&self, other: &&CStr) -> bool {
        *self == CStrView::from_cstr(other)
    }
}

impl fmt::Debug for CStrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_cstr(), f)
    }
}

impl fmt::Display for CStrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.to_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}
