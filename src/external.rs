//! A C API for interacting with `PersonalName` objects.
//!
//! Constructors return an owned pointer that must be released with
//! `personal_name_free_name`; accessor functions return freshly allocated C
//! strings (null on error) that must be released with
//! `personal_name_free_string`.

extern crate libc;

use self::libc::c_char;
use super::PersonalName;
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

macro_rules! str_to_char_star {
    ($str:expr) => {{
        let s = CString::new($str).unwrap();
        s.into_raw()
    }};
}

macro_rules! result_str_to_char_star {
    ($result:expr) => {
        match $result {
            Ok(string) => {
                let s = CString::new(string).unwrap();
                s.into_raw()
            }
            Err(_) => ptr::null(),
        }
    };
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_new(
    name: *const c_char,
    config: *const c_char,
) -> Option<Box<PersonalName>> {
    let name = CStr::from_ptr(name).to_string_lossy();
    let config = if config.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(config).to_string_lossy()
    };
    PersonalName::new(&name, &config).ok().map(Box::new)
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_free_name(name_ptr: *mut PersonalName) {
    mem::drop(Box::from_raw(name_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_main_name(name: &PersonalName) -> *const c_char {
    str_to_char_star!(name.main_name())
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_main_name_unspaced(
    name: &PersonalName,
) -> *const c_char {
    str_to_char_star!(name.main_name_unspaced())
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_element(
    name: &PersonalName,
    index: i64,
) -> *const c_char {
    result_str_to_char_star!(name.main_name_element(index))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_element_by_type(
    name: &PersonalName,
    code: *const c_char,
) -> *const c_char {
    let code = CStr::from_ptr(code).to_string_lossy();
    result_str_to_char_star!(name.main_name_element(&*code))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_elements_as_str(
    name: &PersonalName,
    start: i64,
    end: i64,
) -> *const c_char {
    result_str_to_char_star!(name.main_name_elements_as_str(start, end))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_element_type(
    name: &PersonalName,
    element: *const c_char,
) -> *const c_char {
    let element = CStr::from_ptr(element).to_string_lossy();
    result_str_to_char_star!(name.main_name_element_type(&element))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_alt_name(
    name: &PersonalName,
    index: i64,
) -> *const c_char {
    result_str_to_char_star!(name.alt_name(index))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_alt_name_for_network(
    name: &PersonalName,
    network: *const c_char,
) -> *const c_char {
    let network = CStr::from_ptr(network).to_string_lossy();
    result_str_to_char_star!(name.alt_name(&*network))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_formatted_name(
    name: &PersonalName,
    template: *const c_char,
) -> *const c_char {
    let template = CStr::from_ptr(template).to_string_lossy();
    str_to_char_star!(name.formatted_name(&template))
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_config_str(name: &PersonalName) -> *const c_char {
    str_to_char_star!(name.config_str())
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_count_main_name_elements(
    name: &PersonalName,
) -> u32 {
    name.count_main_name_elements() as u32
}

#[no_mangle]
pub unsafe extern "C" fn personal_name_count_alt_names(name: &PersonalName) -> u32 {
    name.count_alt_names() as u32
}
