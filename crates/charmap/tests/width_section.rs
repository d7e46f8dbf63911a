use charmap_rs::{Options, parse_charmap_str};

const BASE: &str = "<mb_cur_max> 3\nCHARMAP\n<U0041> \\x41\n<U3041>..<U3043> \\xe3\\x81\\x81\nEND CHARMAP\n";

#[test]
fn widths_and_default() {
    let s = format!("{BASE}WIDTH\n<U3041>..<U3043> 2\nEND WIDTH\nWIDTH_DEFAULT 1\n");
    let cm = parse_charmap_str(&s, &Options::strict()).unwrap();
    assert_eq!(cm.width_of("U3042"), Some(2));
    assert_eq!(cm.width_of("U0041"), Some(1));
    assert_eq!(cm.width_of("U9999"), None);
}

#[test]
fn width_default_applies_to_unlisted() {
    let s = format!("{BASE}WIDTH_DEFAULT 0\n");
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    assert_eq!(cm.width_default, 0);
    assert_eq!(cm.width_of("U0041"), Some(0));
}

#[test]
fn undefined_width_target() {
    let s = format!("{BASE}WIDTH\n<U0042> 1\nEND WIDTH\n");
    assert!(parse_charmap_str(&s, &Options::default()).is_ok());
    assert!(parse_charmap_str(&s, &Options::strict()).is_err());
}

#[test]
fn unterminated_width_section() {
    let s = format!("{BASE}WIDTH\n<U0041> 1\n");
    let err = parse_charmap_str(&s, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("END WIDTH"));
}

#[test]
fn bad_width_values() {
    for tail in ["WIDTH\n<U0041> wide\nEND WIDTH\n", "WIDTH_DEFAULT\n", "WIDTH_DEFAULT 1 2\n"] {
        let s = format!("{BASE}{tail}");
        assert!(parse_charmap_str(&s, &Options::default()).is_err(), "{tail:?}");
    }
}

#[test]
fn glibc_width_range_over_ucs_names() {
    let s = "<comment_char> %\n<escape_char> /\n<mb_cur_max> 6\n% alias ISO-10646/UTF-8\n\
             CHARMAP\n<U0041> /x41 LATIN CAPITAL LETTER A\n\
             <U0300>..<U036F> /xcc/x80 COMBINING GRAVE ACCENT\nEND CHARMAP\n\n\
             WIDTH\n<U0300>...<U036F>\t0\nEND WIDTH\n";
    for options in [Options::default(), Options::strict()] {
        let cm = parse_charmap_str(s, &options).unwrap();
        assert_eq!(cm.width_of("U0300"), Some(0));
        assert_eq!(cm.width_of("U0301"), Some(0));
        assert_eq!(cm.width_of("U036F"), Some(0));
        assert_eq!(cm.width_of("U0041"), Some(1));
    }
}

#[test]
fn width_range_covers_entries_between_its_ends() {
    let s = "CHARMAP\n<alpha> \\x61\n<beta> \\x62\n<gamma> \\x63\n<delta> \\x64\nEND CHARMAP\n\
             WIDTH\n<alpha>...<gamma> 2\nEND WIDTH\n";
    let cm = parse_charmap_str(s, &Options::strict()).unwrap();
    assert_eq!(cm.width_of("beta"), Some(2));
    assert_eq!(cm.width_of("gamma"), Some(2));
    assert_eq!(cm.width_of("delta"), Some(1));
}

#[test]
fn backwards_width_range() {
    let s = format!("{BASE}WIDTH\n<U3043>...<U3041> 2\nEND WIDTH\n");
    let err = parse_charmap_str(&s, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("<U3043>...<U3041>"), "{err}");
}
