//! Byte sequences written as escape sequences: `/x41`, `/d65`, `/101`

struct DigitRule {
    radix: u32,
    min: usize,
    max: usize,
}

fn digit_rule(marker: char, strict: bool) -> (DigitRule, usize) {
    match (marker, strict) {
        ('x', true) => (DigitRule { radix: 16, min: 2, max: 2 }, 1),
        ('x', false) => (DigitRule { radix: 16, min: 1, max: 2 }, 1),
        ('d', true) => (DigitRule { radix: 10, min: 2, max: 3 }, 1),
        ('d', false) => (DigitRule { radix: 10, min: 1, max: 3 }, 1),
        (_, true) => (DigitRule { radix: 8, min: 2, max: 3 }, 0),
        (_, false) => (DigitRule { radix: 8, min: 1, max: 3 }, 0),
    }
}

fn parse_byte(s: &str, escape: char, strict: bool) -> Result<(u8, &str), String> {
    let marker = s.chars().next().unwrap_or(' ');
    let (rule, skip) = digit_rule(marker, strict);
    let body = &s[skip..];
    let digits = body
        .chars()
        .take(rule.max)
        .take_while(|c| c.is_digit(rule.radix))
        .count();
    if digits < rule.min {
        return Err(format!(
            "malformed byte escape {}{}",
            escape,
            &s[..skip + digits]
        ));
    }
    let (num, rest) = body.split_at(digits);
    let value = u32::from_str_radix(num, rule.radix)
        .map_err(|_| format!("malformed byte escape {escape}{}", &s[..skip + digits]))?;
    let byte = u8::try_from(value)
        .map_err(|_| format!("byte escape {escape}{} exceeds 255", &s[..skip + digits]))?;
    Ok((byte, rest))
}

/// Parse the encoding field of a CHARMAP entry.
///
/// Returns the bytes and the trimmed remainder of the line, which is the
/// entry's comment when non-empty.
pub fn parse_encoding(s: &str, escape: char, strict: bool) -> Result<(Vec<u8>, &str), String> {
    let mut bytes = Vec::new();
    let mut rest = s;
    while let Some(after) = rest.strip_prefix(escape) {
        let (b, r) = parse_byte(after, escape, strict)?;
        bytes.push(b);
        rest = r;
    }
    if bytes.is_empty() {
        return Err(format!("expected a byte encoding starting with '{escape}'"));
    }
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return Err(format!("unexpected text {rest:?} after encoding"));
    }
    Ok((bytes, rest.trim()))
}

/// Add one to a big-endian byte sequence. Returns `false` when the first
/// byte overflows, in which case the contents are unspecified.
pub fn increment(bytes: &mut [u8]) -> bool {
    for b in bytes.iter_mut().rev() {
        let (next, carry) = b.overflowing_add(1);
        *b = next;
        if !carry {
            return true;
        }
    }
    false
}

/// Render bytes back in charmap notation, e.g. `/xc3/xa9`.
pub fn format_encoding(bytes: &[u8], escape: char) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for b in bytes {
        out.push(escape);
        out.push_str(&format!("x{b:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_notations() {
        let (bytes, rest) = parse_encoding("/xc3/d169/101   LATIN", '/', false).unwrap();
        assert_eq!(bytes, vec![0xc3, 169, 0o101]);
        assert_eq!(rest, "LATIN");
    }

    #[test]
    fn strict_requires_two_hex_digits() {
        assert!(parse_encoding("\\x9", '\\', true).is_err());
        assert_eq!(parse_encoding("\\x9", '\\', false).unwrap().0, vec![9]);
    }

    #[test]
    fn carry_propagates() {
        let mut b = [0x81, 0xff];
        assert!(increment(&mut b));
        assert_eq!(b, [0x82, 0x00]);
        let mut top = [0xff];
        assert!(!increment(&mut top));
    }
}
