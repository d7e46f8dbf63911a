//! C source rendering of a locale table
use crate::encode::table::LocaleTable;
use crate::encode::writer::LineWriter;

const FALLBACK_IDENTIFIER: &str = "charmap";

/// Turn an arbitrary table name into a C identifier. Non-alphanumerics
/// become `_` and leading underscores are dropped, since `_`-prefixed names
/// are reserved at file scope. A leading digit gets a `charmap_` prefix.
pub fn c_identifier(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let id = id.trim_start_matches('_');
    if id.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else if id.starts_with(|c: char| c.is_ascii_digit()) {
        format!("{FALLBACK_IDENTIFIER}_{id}")
    } else {
        id.to_string()
    }
}

fn record_literal(ucs: u32, bytes: &[u8], width: usize) -> String {
    let padded = bytes
        .iter()
        .copied()
        .chain(core::iter::repeat(0))
        .take(width)
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{0x{ucs:04x}, {}, {{{padded}}}}}", bytes.len())
}

pub fn to_c_source(table: &LocaleTable) -> String {
    let id = c_identifier(table.name());
    let lower = id.to_ascii_lowercase();
    let upper = id.to_ascii_uppercase();
    let width = usize::from(table.mb_cur_max());

    let mut w = LineWriter::new();
    w.line(
        0,
        &format!(
            "/* Locale table {id}: {} characters, generated from a POSIX charmap. */",
            table.len()
        ),
    );
    w.line(0, "#include <stdint.h>");
    w.blank();
    w.line(0, &format!("#define {upper}_MB_CUR_MIN {}", table.mb_cur_min()));
    w.line(0, &format!("#define {upper}_MB_CUR_MAX {}", table.mb_cur_max()));
    w.line(0, &format!("#define {upper}_COUNT {}", table.len()));
    w.blank();

    w.line(0, "static const struct {");
    w.line(2, "uint32_t ucs;");
    w.line(2, "uint8_t len;");
    w.line(2, &format!("uint8_t bytes[{width}];"));
    w.line(0, &format!("}} {lower}_records[{upper}_COUNT] = {{"));
    for r in table.records() {
        w.line(2, &format!("{},", record_literal(r.ucs, &r.bytes, width)));
    }
    w.line(0, "};");
    w.blank();

    w.line(
        0,
        &format!("static const uint32_t {lower}_by_ucs[{upper}_COUNT] = {{"),
    );
    let indices: Vec<String> = table.reverse_index().iter().map(|i| i.to_string()).collect();
    w.wrapped_list(2, &indices, 12);
    w.line(0, "};");
    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(c_identifier("UTF-8"), "UTF_8");
        assert_eq!(c_identifier("8859-1"), "charmap_8859_1");
        assert_eq!(c_identifier("-koi8"), "koi8");
    }

    #[test]
    fn identifiers_never_start_with_underscore() {
        assert_eq!(c_identifier(""), "charmap");
        assert_eq!(c_identifier("--"), "charmap");
        assert_eq!(c_identifier("__X"), "X");
    }

    #[test]
    fn literal_pads_to_width() {
        assert_eq!(
            record_literal(0xe9, &[0xc3, 0xa9], 3),
            "{0x00e9, 2, {0xc3, 0xa9, 0x00}}"
        );
    }
}
