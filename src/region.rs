//! Describes the regions call and return events enter and leave, the way an
//! instrumenter reports them.

use crate::{
    config::Config,
    frame::CodeFrame,
    resolve::{get_file_name, module_name, PathBuffer},
    view::CStrView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    pub module: CStrView<'a>,
    pub function: CStrView<'a>,
    /// Canonical source path, or one of the fallback file names.
    pub file: CStrView<'a>,
    pub line: u32,
}

/// Returns `None` for frames the config excludes from instrumentation. The
/// file name is only resolved for frames that are kept.
#[instrument(level = "trace", skip_all)]
pub fn describe_region<'a, F: CodeFrame + ?Sized>(
    frame: &'a F,
    buf: &'a mut PathBuffer,
    config: &Config,
) -> Option<Region<'a>> {
    let module = module_name(frame, config);
    let function = frame.code_name();
    if config.is_excluded(module, function) {
        trace!(%module, %function, "excluded");
        return None;
    }

    Some(Region {
        module,
        function,
        file: get_file_name(frame, buf),
        line: frame.first_line_number(),
    })
}

/// The region a return event leaves. Carries no file or line, so nothing is
/// resolved on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEnd<'a> {
    pub module: CStrView<'a>,
    pub function: CStrView<'a>,
}

/// Returns `None` for the same frames [`describe_region`] excludes, so every
/// reported end pairs with a reported begin.
#[instrument(level = "trace", skip_all)]
pub fn describe_region_end<'a, F: CodeFrame + ?Sized>(
    frame: &'a F,
    config: &Config,
) -> Option<RegionEnd<'a>> {
    let module = module_name(frame, config);
    let function = frame.code_name();
    if config.is_excluded(module, function) {
        trace!(%module, %function, "excluded");
        return None;
    }

    Some(RegionEnd { module, function })
}
