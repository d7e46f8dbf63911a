//! Checks that span more than one line
use log::warn;

use crate::MB_LEN_MAX;
use crate::charmap::Charmap;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct ValidationError {
    pub line: usize,
    pub message: String,
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Syntax {
            line: e.line,
            message: e.message,
        }
    }
}

/// `1 <= mb_cur_min <= mb_cur_max <= MB_LEN_MAX`, checked when the CHARMAP
/// section opens at `line`.
pub fn validate_widths(mb_cur_min: u8, mb_cur_max: u8, line: usize) -> core::result::Result<(), ValidationError> {
    if mb_cur_min == 0 {
        return Err(ValidationError {
            line,
            message: "mb_cur_min must be at least 1".to_string(),
        });
    }
    if usize::from(mb_cur_max) > MB_LEN_MAX {
        return Err(ValidationError {
            line,
            message: format!("mb_cur_max {mb_cur_max} exceeds MB_LEN_MAX ({MB_LEN_MAX})"),
        });
    }
    if mb_cur_min > mb_cur_max {
        return Err(ValidationError {
            line,
            message: format!("mb_cur_min {mb_cur_min} is greater than mb_cur_max {mb_cur_max}"),
        });
    }
    Ok(())
}

/// Encoding lengths must fall within the declared widths.
pub fn validate_encoding_len(
    name: &str,
    bytes: &[u8],
    mb_cur_min: u8,
    mb_cur_max: u8,
    line: usize,
) -> core::result::Result<(), ValidationError> {
    let len = bytes.len();
    if len < usize::from(mb_cur_min) || len > usize::from(mb_cur_max) {
        return Err(ValidationError {
            line,
            message: format!(
                "<{name}> is encoded in {len} bytes, outside {mb_cur_min}..={mb_cur_max}"
            ),
        });
    }
    Ok(())
}

/// Report portable characters the charmap leaves undefined.
pub fn check_portable(charmap: &Charmap, strict: bool) -> Result<()> {
    let missing = charmap.missing_portable();
    if missing.is_empty() {
        return Ok(());
    }
    let list = missing
        .iter()
        .map(|n| format!("<{n}>"))
        .collect::<Vec<_>>()
        .join(" ");
    if strict {
        return Err(Error::Invalid(format!(
            "portable characters not defined: {list}"
        )));
    }
    warn!("portable characters not defined: {list}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_bounds() {
        assert!(validate_widths(1, 1, 3).is_ok());
        assert!(validate_widths(1, 6, 3).is_ok());
        assert!(validate_widths(0, 1, 3).is_err());
        assert!(validate_widths(2, 1, 3).is_err());
        assert_eq!(validate_widths(1, 17, 3).unwrap_err().line, 3);
    }
}
