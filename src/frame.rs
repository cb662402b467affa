//! What the resolvers need from the host interpreter's frames.
//!
//! An embedder implements these over its real frame objects (for CPython,
//! `f_globals` and `f_code->co_filename`); the tests implement them over
//! plain owned strings.

use core::ffi::CStr;

use crate::view::CStrView;

/// A call frame of the embedding interpreter.
pub trait Frame {
    /// Looks up `name` in the frame's globals, converted to a string.
    fn lookup_global(&self, name: &CStr) -> Option<CStrView<'_>>;

    /// The source file name of the frame's code object.
    ///
    /// `None` is the interpreter's "no value" sentinel, not a lookup failure.
    fn source_file_name(&self) -> Option<CStrView<'_>>;
}

/// A frame that also exposes the code object's function name and first line.
pub trait CodeFrame: Frame {
    fn code_name(&self) -> CStrView<'_>;

    fn first_line_number(&self) -> u32;
}

impl<T: Frame + ?Sized> Frame for &T {
    fn lookup_global(&self, name: &CStr) -> Option<CStrView<'_>> {
        (**self).lookup_global(name)
    }

    fn source_file_name(&self) -> Option<CStrView<'_>> {
        (**self).source_file_name()
    }
}

impl<T: CodeFrame + ?Sized> CodeFrame for &T {
    fn code_name(&self) -> CStrView<'_> {
        (**self).code_name()
    }

    fn first_line_number(&self) -> u32 {
        (**self).first_line_number()
    }
}
