//! Names for interpreter call frames: the module a frame runs in and the
//! absolute path of its source file, for attributing profiling samples.
//!
//! The host interpreter is reached only through the [`Frame`] and
//! [`CodeFrame`] traits. Every resolver returns a [`CStrView`], borrowed from
//! the frame, a caller-owned [`PathBuffer`], or a static fallback literal.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod stdext;

pub mod config;
pub mod frame;
pub mod region;
pub mod resolve;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use frame::{CodeFrame, Frame};
pub use region::{describe_region, describe_region_end, Region, RegionEnd};
pub use resolve::{
    file_name_owned, get_file_name, get_module_name, module_name, try_file_name, PathBuffer,
    ResolveError, ResolveErrorKind,
};
pub use view::CStrView;
