use std::ffi::CString;

use crate::view::CStrView;

#[test]
fn reads_back_the_same_pointer() {
    let owned = CString::new("hello").unwrap();
    let view = unsafe { CStrView::from_ptr(owned.as_ptr()) };

    assert_eq!(view.as_ptr(), owned.as_ptr());
    assert_eq!(view.as_cstr(), owned.as_c_str());
    assert_eq!(view.to_str(), Ok("hello"));
}

#[test]
#[should_panic(expected = "null pointer")]
fn null_pointer_is_fatal() {
    let _ = unsafe { CStrView::from_ptr(core::ptr::null()) };
}

#[test]
fn find_returns_first_occurrence() {
    let view = CStrView::from_cstr(c"a.b.c");

    let dot = view.find(b'.').unwrap();
    assert_eq!(unsafe { dot.offset_from(view.as_ptr()) }, 1);

    assert_eq!(view.find(b'x'), None);
}

#[test]
fn find_in_empty_string() {
    let view = CStrView::from_cstr(c"");

    assert_eq!(view.find(b'a'), None);
    // strchr semantics: the terminator is part of the string.
    assert_eq!(view.find(0), Some(view.as_ptr()));
}

#[test]
fn starts_with() {
    let view = CStrView::from_cstr(c"scorep.instrumenter");

    assert!(view.starts_with(c"scorep"));
    assert!(view.starts_with(c""));
    assert!(view.starts_with(c"scorep.instrumenter"));
    assert!(!view.starts_with(c"score_p"));
    assert!(!view.starts_with(c"scorep.instrumenter.x"));
}

#[test]
fn shorter_than_prefix_does_not_match() {
    let view = CStrView::from_cstr(c"sco");

    assert!(!view.starts_with(c"scorep"));
}

#[test]
fn equality_is_by_content() {
    let a = CString::new("module").unwrap();
    let b = CString::new("module").unwrap();
    assert_ne!(a.as_ptr(), b.as_ptr());

    let (a, b) = unsafe { (CStrView::from_ptr(a.as_ptr()), CStrView::from_ptr(b.as_ptr())) };
    assert_eq!(a, b);
    assert_eq!(a, c"module");

    assert_ne!(a, CStrView::from_cstr(c"modules"));
    assert_ne!(a, CStrView::from_cstr(c"modul"));
}

#[test]
fn display_replaces_invalid_utf8() {
    let owned = CString::new(b"ab\xffc".to_vec()).unwrap();
    let view = CStrView::from_cstr(&owned);

    assert_eq!(view.to_string(), "ab\u{FFFD}c");
    assert_eq!(format!("{:?}", CStrView::from_cstr(c"x")), "\"x\"");
}
