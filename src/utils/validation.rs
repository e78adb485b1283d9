//! Input validation utilities

/// True when the input is empty or whitespace only
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Removes every whitespace character, not just the ends
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
