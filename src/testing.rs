use std::ffi::{CStr, CString};

use crate::{
    frame::{CodeFrame, Frame},
    view::CStrView,
};

/// An interpreter frame made of owned strings.
#[derive(Debug, Default)]
pub(crate) struct FakeFrame {
    globals: Vec<(CString, CString)>,
    file_name: Option<CString>,
    code_name: Option<CString>,
    first_line: u32,
}

impl FakeFrame {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_global(mut self, name: &str, value: &str) -> Self {
        self.globals
            .push((CString::new(name).unwrap(), CString::new(value).unwrap()));
        self
    }

    pub(crate) fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = Some(CString::new(file_name).unwrap());
        self
    }

    pub(crate) fn with_code(mut self, name: &str, first_line: u32) -> Self {
        self.code_name = Some(CString::new(name).unwrap());
        self.first_line = first_line;
        self
    }
}

impl Frame for FakeFrame {
    fn lookup_global(&self, name: &CStr) -> Option<CStrView<'_>> {
        self.globals
            .iter()
            .find(|(k, _)| k.as_c_str() == name)
            .map(|(_, v)| CStrView::from_cstr(v))
    }

    fn source_file_name(&self) -> Option<CStrView<'_>> {
        self.file_name.as_deref().map(CStrView::from_cstr)
    }
}

impl CodeFrame for FakeFrame {
    fn code_name(&self) -> CStrView<'_> {
        CStrView::from_cstr(self.code_name.as_deref().unwrap_or(c"<module>"))
    }

    fn first_line_number(&self) -> u32 {
        self.first_line
    }
}
