use charmap_rs::{Error, Options, parse_charmap_str};

fn wrap(header: &str, body: &str) -> String {
    format!("<comment_char> %\n<escape_char> /\n{header}CHARMAP\n{body}END CHARMAP\n")
}

#[test]
fn entries_keep_file_order_and_comments() {
    let s = wrap(
        "<mb_cur_max> 2\n",
        "<U0042> /x42 LATIN CAPITAL LETTER B\n<U0041> /d65\n<U00E9> /xc3/xa9 e acute\n",
    );
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    let names: Vec<&str> = cm.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["U0042", "U0041", "U00E9"]);
    let b = cm.get("U0042").unwrap();
    assert_eq!(b.comment.as_deref(), Some("LATIN CAPITAL LETTER B"));
    assert_eq!(b.ucs, Some(0x42));
    assert_eq!(cm.get("U0041").unwrap().comment, None);
    assert_eq!(cm.get("U00E9").unwrap().bytes, vec![0xc3, 0xa9]);
}

#[test]
fn posix_names_have_no_scalar_value() {
    let s = wrap("", "<space> /x20\n<A> /101\n");
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    assert_eq!(cm.get("A").unwrap().bytes, vec![0x41]);
    assert_eq!(cm.get("space").unwrap().ucs, None);
}

#[test]
fn decimal_range_expands() {
    let s = wrap(
        "<mb_cur_max> 2\n",
        "<j0101>...<j0104> /d129/d254 kanji\n",
    );
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    assert_eq!(cm.len(), 4);
    assert_eq!(cm.get("j0101").unwrap().bytes, vec![129, 254]);
    assert_eq!(cm.get("j0102").unwrap().bytes, vec![129, 255]);
    assert_eq!(cm.get("j0103").unwrap().bytes, vec![130, 0]);
    assert_eq!(cm.get("j0104").unwrap().bytes, vec![130, 1]);
    assert_eq!(cm.get("j0104").unwrap().comment.as_deref(), Some("kanji"));
}

#[test]
fn hex_range_expands_with_scalar_values() {
    let s = wrap("", "<U0041>..<U0043> /x41\n");
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    let got: Vec<(Option<u32>, Vec<u8>)> = cm.iter().map(|e| (e.ucs, e.bytes.clone())).collect();
    assert_eq!(
        got,
        vec![
            (Some(0x41), vec![0x41]),
            (Some(0x42), vec![0x42]),
            (Some(0x43), vec![0x43]),
        ]
    );
}

#[test]
fn range_overflow_is_an_error() {
    let s = wrap("", "<a1>...<a3> /xfe\n");
    let err = parse_charmap_str(&s, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("overflows"));
}

#[test]
fn malformed_ranges() {
    for body in [
        "<a3>...<a1> /x41\n",
        "<a1>...<b3> /x41\n",
        "<a1>...<a003> /x41\n",
        "<abc>...<abd> /x41\n",
    ] {
        let s = wrap("", body);
        assert!(
            parse_charmap_str(&s, &Options::default()).is_err(),
            "accepted {body:?}"
        );
    }
}

#[test]
fn continuation_lines() {
    let s = wrap("<mb_cur_max> 2\n", "<U00E9> /\n/xc3/xa9\n<U0041> /x41\n");
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    assert_eq!(cm.get("U00E9").unwrap().bytes, vec![0xc3, 0xa9]);
    assert_eq!(cm.len(), 2);
}

#[test]
fn escaped_closing_bracket_in_name() {
    let s = wrap("", "<a/>b> /x41\n");
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    assert!(cm.contains("a>b"));
}

#[test]
fn duplicate_names_lenient_keeps_first() {
    let s = wrap("", "<U0041> /x41\n<U0041> /x61\n");
    let cm = parse_charmap_str(&s, &Options::default()).unwrap();
    assert_eq!(cm.len(), 1);
    assert_eq!(cm.get("U0041").unwrap().bytes, vec![0x41]);

    let err = parse_charmap_str(&s, &Options::strict()).unwrap_err();
    match err {
        Error::Syntax { line, message } => {
            assert_eq!(line, 5);
            assert!(message.contains("duplicate"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn shared_encodings_are_allowed() {
    let s = wrap("", "<U0041> /x41\n<A> /x41\n");
    let cm = parse_charmap_str(&s, &Options::strict()).unwrap();
    let names: Vec<&str> = cm.by_bytes(&[0x41]).map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["U0041", "A"]);
}

#[test]
fn encoding_length_must_fit_widths() {
    let s = wrap("", "<U00E9> /xc3/xa9\n");
    let err = parse_charmap_str(&s, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("2 bytes"));

    let s = wrap("<mb_cur_min> 2\n<mb_cur_max> 2\n", "<U0041> /x41\n");
    assert!(parse_charmap_str(&s, &Options::default()).is_err());
}

#[test]
fn bad_byte_escapes() {
    for body in ["<a> /x\n", "<a> /d256\n", "<a> x41\n", "<a> /x41junk\n", "<a>\n"] {
        let s = wrap("", body);
        let err = parse_charmap_str(&s, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 4, .. }), "{body:?}: {err}");
    }
}

#[test]
fn strict_escape_widths() {
    let s = wrap("", "<a> /x9\n<b> /d7\n<c> /7\n");
    assert!(parse_charmap_str(&s, &Options::default()).is_ok());
    assert!(parse_charmap_str(&s, &Options::strict()).is_err());
}

#[test]
fn missing_end_charmap() {
    let s = "CHARMAP\n<U0041> \\x41\n";
    let err = parse_charmap_str(s, &Options::default()).unwrap_err();
    assert!(err.to_string().contains("END CHARMAP"));
}

#[test]
fn trailing_text_is_strict_only() {
    let s = "CHARMAP\n<U0041> \\x41\nEND CHARMAP\nstray\n";
    assert!(parse_charmap_str(s, &Options::default()).is_ok());
    assert!(parse_charmap_str(s, &Options::strict()).is_err());
}
