use charmap_rs::{Options, parse_charmap, parse_charmap_str};

fn fixture() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/mini-utf8.charmap")
}

#[test]
fn full_fixture_defines_portable_set() {
    let opts = Options {
        strict: true,
        require_portable: true,
    };
    let cm = parse_charmap(fixture(), &opts).unwrap();
    assert!(cm.missing_portable().is_empty());
}

#[test]
fn posix_names_count_as_defined() {
    let s = "CHARMAP\n<A> \\x41\n<space> \\x20\nEND CHARMAP\n";
    let cm = parse_charmap_str(s, &Options::default()).unwrap();
    let missing = cm.missing_portable();
    assert!(!missing.contains(&"A"));
    assert!(!missing.contains(&"space"));
    assert!(missing.contains(&"NUL"));
    assert!(missing.contains(&"tilde"));
}

#[test]
fn require_portable_in_strict_mode() {
    let s = "CHARMAP\n<U0041> \\x41\nEND CHARMAP\n";
    let lenient = Options {
        strict: false,
        require_portable: true,
    };
    assert!(parse_charmap_str(s, &lenient).is_ok());
    let strict = Options {
        strict: true,
        require_portable: true,
    };
    let err = parse_charmap_str(s, &strict).unwrap_err();
    assert!(matches!(err, charmap_rs::Error::Invalid(_)));
    assert!(err.to_string().contains("<NUL>"));
}
