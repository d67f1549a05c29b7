#![allow(non_snake_case)]
//! Enum codec for the boundary.
//!
//! Both enums are `#[repr(i32)]` and cross the boundary by value. The
//! decoders are total: every input code maps to a defined symbol, with
//! everything outside the closed set collapsing to `Unknown`. No conversion
//! ever relies on the integer's type range.

use crate::types::{Color, Status};

/// Decode a status code; undefined codes become `Status::Unknown`
#[no_mangle]
pub extern "C" fn Status_fromCode(code: i32) -> Status {
    Status::from_code(code)
}

/// Integer code for a status
#[no_mangle]
pub extern "C" fn Status_toCode(status: Status) -> i32 {
    status.code()
}

/// Decode a color code; undefined codes become `Color::Unknown`
#[no_mangle]
pub extern "C" fn Color_fromCode(code: i32) -> Color {
    Color::from_code(code)
}

/// Integer code for a color
#[no_mangle]
pub extern "C" fn Color_toCode(color: Color) -> i32 {
    color.code()
}
