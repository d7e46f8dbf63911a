#![no_main]
use charmap::{Decoded, LocaleTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = LocaleTable::from_bytes(data) {
        for r in table.records() {
            assert!(matches!(table.decode(&r.bytes), Decoded::Char { .. }));
            assert!(table.encode(r.ucs).is_some());
        }
    }
});
