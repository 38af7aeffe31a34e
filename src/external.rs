//! A C API for interacting with `NameRecord` objects.
//!
//! Every string returned here is owned by the caller and must be released
//! with `nomen_free_string`; every record with `nomen_free_name`.

use super::{capitalize, parse, NameRecord, OrderHint};
use libc::c_char;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Null if the string somehow contains a NUL byte
macro_rules! str_to_char_star {
    ($str:expr) => {{
        CString::new($str).map_or(ptr::null_mut(), CString::into_raw)
    }};
}

#[no_mangle]
pub unsafe extern "C" fn nomen_parse(input: *const c_char) -> Option<Box<NameRecord>> {
    if input.is_null() {
        return None;
    }
    let s = CStr::from_ptr(input).to_string_lossy();
    parse(&s, OrderHint::default()).map(Box::new)
}

#[no_mangle]
pub unsafe extern "C" fn nomen_free_name(name_ptr: *mut NameRecord) {
    if !name_ptr.is_null() {
        mem::drop(Box::from_raw(name_ptr));
    }
}

#[no_mangle]
pub unsafe extern "C" fn nomen_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}

#[no_mangle]
pub extern "C" fn nomen_title(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.title.as_str())
}

#[no_mangle]
pub extern "C" fn nomen_first(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.first.as_str())
}

#[no_mangle]
pub extern "C" fn nomen_middle(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.middle.as_str())
}

#[no_mangle]
pub extern "C" fn nomen_nick(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.nick.as_str())
}

#[no_mangle]
pub extern "C" fn nomen_last(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.last.as_str())
}

#[no_mangle]
pub extern "C" fn nomen_suffix(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.suffix.as_str())
}

#[no_mangle]
pub extern "C" fn nomen_full(name: &NameRecord) -> *mut c_char {
    str_to_char_star!(name.full())
}

#[no_mangle]
pub unsafe extern "C" fn nomen_capitalize(input: *const c_char) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }
    let s = CStr::from_ptr(input).to_string_lossy();
    str_to_char_star!(capitalize(&s))
}
