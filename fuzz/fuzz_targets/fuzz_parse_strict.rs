#![no_main]
use charmap::{Options, parse_charmap_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // lenient mode must accept whatever strict mode accepts
        if let Ok(cm) = parse_charmap_str(s, &Options::strict()) {
            let lenient = parse_charmap_str(s, &Options::default()).expect("lenient rejected strict input");
            assert_eq!(cm.len(), lenient.len());
        }
    }
});
