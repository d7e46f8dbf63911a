#![no_main]
use charmap::{LocaleTable, Options, build_table, parse_charmap_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(cm) = parse_charmap_str(s, &Options::default()) {
            if let Ok(table) = build_table(&cm, "fuzz") {
                let back = LocaleTable::from_bytes(&table.to_bytes()).expect("own output must parse");
                assert_eq!(back, table);
            }
        }
    }
});
