use core::ffi::CStr;

use crate::view::CStrView;

/// Fallback names and exclusion rules.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Module name reported when a frame has no `__name__` global.
    ///
    /// Defaults to `"unkown"` (sic), which existing trace consumers match on.
    pub unknown_module: &'static CStr,
    /// Frames whose module name starts with this are not instrumented.
    pub excluded_module_prefix: &'static CStr,
    /// Functions that are never instrumented, whatever their module.
    pub excluded_functions: &'static [&'static CStr],
}

impl Config {
    pub const DEFAULT: Config = Config {
        unknown_module: c"unkown",
        excluded_module_prefix: c"scorep",
        excluded_functions: &[c"_unsettrace"],
    };

    pub const fn with_unknown_module(mut self, name: &'static CStr) -> Self {
        self.unknown_module = name;
        self
    }

    pub fn is_excluded(&self, module: CStrView<'_>, function: CStrView<'_>) -> bool {
        module.starts_with(self.excluded_module_prefix)
            || self.excluded_functions.iter().any(|&f| function == f)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
