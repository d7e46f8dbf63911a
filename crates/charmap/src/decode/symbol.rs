//! Symbolic character names (`<A>`, `<U00E9>`) and name ranges

/// Upper bound on the number of names a single range may expand to.
pub const MAX_RANGE_LEN: u64 = 1 << 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// `<a0001>...<a0010>`: decimal suffix
    Decimal,
    /// `<U0100>..<U01FF>`: hexadecimal suffix
    Hex,
}

impl RangeKind {
    fn radix(self) -> u32 {
        match self {
            RangeKind::Decimal => 10,
            RangeKind::Hex => 16,
        }
    }

    /// The separator written between the two names.
    pub fn separator(self) -> &'static str {
        match self {
            RangeKind::Decimal => "...",
            RangeKind::Hex => "..",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRange {
    pub first: String,
    pub last: String,
    pub kind: RangeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(String),
    Range(SymbolRange),
}

/// Parse a `<name>` at the start of `s`. Returns the unescaped name and
/// whatever follows the closing `>`.
pub fn parse_symbol(s: &str, escape: char) -> Result<(String, &str), String> {
    let body = s
        .strip_prefix('<')
        .ok_or_else(|| format!("expected '<' at {:?}", preview(s)))?;
    let mut name = String::new();
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == escape {
            match chars.next() {
                Some((_, lit)) => name.push(lit),
                None => break,
            }
        } else if c == '>' {
            if name.is_empty() {
                return Err("empty symbolic name".to_string());
            }
            return Ok((name, &body[i + 1..]));
        } else {
            name.push(c);
        }
    }
    Err(format!("unterminated symbolic name {:?}", preview(s)))
}

/// Parse either a single name or a `<a>...<b>` / `<a>..<b>` range.
pub fn parse_target(s: &str, escape: char) -> Result<(Target, &str), String> {
    let (first, rest) = parse_symbol(s, escape)?;
    let (kind, after) = if let Some(after) = rest.strip_prefix("...") {
        (RangeKind::Decimal, after)
    } else if let Some(after) = rest.strip_prefix("..") {
        (RangeKind::Hex, after)
    } else {
        return Ok((Target::Single(first), rest));
    };
    let (last, rest) = parse_symbol(after, escape)?;
    Ok((Target::Range(SymbolRange { first, last, kind }), rest))
}

fn split_suffix(name: &str, kind: RangeKind) -> (&str, &str) {
    let digits = name
        .chars()
        .rev()
        .take_while(|c| c.is_digit(kind.radix()))
        .count();
    // suffix characters are ASCII, so the char count is the byte count
    name.split_at(name.len() - digits)
}

/// Expand a range into every name it covers, first and last included.
///
/// glibc charmaps also write `...` between `<Uxxxx>` names. When both ends
/// are scalar value names and either one has a hex digit above 9, the suffix
/// is read as hexadecimal.
pub fn expand_range(range: &SymbolRange) -> Result<Vec<String>, String> {
    let kind = match range.kind {
        RangeKind::Decimal if needs_hex(&range.first, &range.last) => RangeKind::Hex,
        kind => kind,
    };
    let sep = range.kind.separator();
    let (prefix, first_digits) = split_suffix(&range.first, kind);
    let (last_prefix, last_digits) = split_suffix(&range.last, kind);
    if first_digits.is_empty() || last_digits.is_empty() {
        return Err(format!(
            "range <{}>{sep}<{}> needs a numeric suffix on both names",
            range.first, range.last
        ));
    }
    if prefix != last_prefix || first_digits.len() != last_digits.len() {
        return Err(format!(
            "range ends <{}> and <{}> do not share a prefix and suffix width",
            range.first, range.last
        ));
    }
    let radix = kind.radix();
    let parse = |d: &str| {
        u64::from_str_radix(d, radix).map_err(|_| format!("range suffix {d:?} is too large"))
    };
    let start = parse(first_digits)?;
    let end = parse(last_digits)?;
    if end < start {
        return Err(format!(
            "range <{}>{sep}<{}> runs backwards",
            range.first, range.last
        ));
    }
    if end - start >= MAX_RANGE_LEN {
        return Err(format!(
            "range <{}>{sep}<{}> covers more than {} names",
            range.first, range.last, MAX_RANGE_LEN
        ));
    }

    let width = first_digits.len();
    let lowercase = first_digits.chars().any(|c| c.is_ascii_lowercase());
    Ok((start..=end)
        .map(|v| match (kind, lowercase) {
            (RangeKind::Decimal, _) => format!("{prefix}{v:0width$}"),
            (RangeKind::Hex, false) => format!("{prefix}{v:0width$X}"),
            (RangeKind::Hex, true) => format!("{prefix}{v:0width$x}"),
        })
        .collect())
}

fn needs_hex(first: &str, last: &str) -> bool {
    let decimal = |name: &str| name[1..].bytes().all(|b| b.is_ascii_digit());
    ucs_of_name(first).is_some()
        && ucs_of_name(last).is_some()
        && !(decimal(first) && decimal(last))
}

/// Unicode scalar value named by a `<Uxxxx>` or `<Uxxxxxxxx>` symbol.
pub fn ucs_of_name(name: &str) -> Option<u32> {
    let hex = name.strip_prefix('U')?;
    if !(hex.len() == 4 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let v = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(v).map(u32::from)
}

fn preview(s: &str) -> &str {
    match s.char_indices().nth(16) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
