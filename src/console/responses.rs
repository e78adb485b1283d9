//! Console reply codes and formatting.

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const READY: u16 = 220;
pub const GOODBYE: u16 = 221;
pub const LOGIN_SUCCESS: u16 = 230;
pub const BAD_REQUEST: u16 = 400;
pub const COMMAND_ERROR: u16 = 500;

/// Format a reply line; multi-line messages keep the code on the first line only
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\n", code, message)
}
