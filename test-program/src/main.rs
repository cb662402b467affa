use std::ffi::{CStr, CString};

use framename::{CStrView, CodeFrame, Config, Frame, PathBuffer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Stands in for the interpreter's frame object.
struct HostFrame {
    module: Option<CString>,
    file: Option<CString>,
    function: CString,
    line: u32,
}

impl HostFrame {
    fn new(module: Option<&str>, file: Option<&str>, function: &str, line: u32) -> Self {
        let cstring = |s: &str| CString::new(s).expect("no interior nul");
        Self {
            module: module.map(cstring),
            file: file.map(cstring),
            function: cstring(function),
            line,
        }
    }
}

impl Frame for HostFrame {
    fn lookup_global(&self, name: &CStr) -> Option<CStrView<'_>> {
        if name != c"__name__" {
            return None;
        }
        self.module.as_deref().map(CStrView::from_cstr)
    }

    fn source_file_name(&self) -> Option<CStrView<'_>> {
        self.file.as_deref().map(CStrView::from_cstr)
    }
}

impl CodeFrame for HostFrame {
    fn code_name(&self) -> CStrView<'_> {
        CStrView::from_cstr(&self.function)
    }

    fn first_line_number(&self) -> u32 {
        self.line
    }
}

fn main() {
    let registry = tracing_subscriber::Registry::default().with(
        EnvFilter::builder()
            .with_default_directive(tracing::Level::TRACE.into())
            .from_env()
            .unwrap(),
    );

    let tree_layer = tracing_tree::HierarchicalLayer::new(2)
        .with_targets(true)
        .with_bracketed_fields(true);

    registry.with(tree_layer).init();

    let frames = [
        HostFrame::new(Some("__main__"), Some(file!()), "main", line!()),
        HostFrame::new(None, Some("<__array_function__ internals>"), "concatenate", 5),
        HostFrame::new(None, None, "<lambda>", 1),
        HostFrame::new(Some("app.jobs"), Some("/does/not/exist.py"), "run", 12),
        HostFrame::new(Some("scorep.instrumenter"), Some(file!()), "register", 40),
    ];

    let mut buf = PathBuffer::new();
    for frame in &frames {
        match framename::describe_region(frame, &mut buf, &Config::DEFAULT) {
            Some(region) => println!(
                "{}:{} ({}:{})",
                region.module, region.function, region.file, region.line
            ),
            None => println!("skipped {}", framename::get_module_name(frame)),
        }
    }

    for frame in frames.iter().rev() {
        if let Some(end) = framename::describe_region_end(frame, &Config::DEFAULT) {
            let file = framename::file_name_owned(frame);
            println!("leave {}:{} ({})", end.module, end.function, file.to_string_lossy());
        }
    }
}
