#![no_main]

use std::sync::OnceLock;

use html_entities::{EncodeOptions, EntityTable, decode_html_entities, encode_html_entities};
use libfuzzer_sys::fuzz_target;

fn table() -> &'static EntityTable {
    static TABLE: OnceLock<EntityTable> = OnceLock::new();
    TABLE.get_or_init(|| EntityTable::bundled().expect("bundled entity table should load"))
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let table = table();
    let options = EncodeOptions {
        prefer_named_entities: flags & 0b0001 != 0,
        use_hex_entities: flags & 0b0010 != 0,
        use_uppercase_hex: flags & 0b0100 != 0,
        pad_numeric_entities_to_four_digits: flags & 0b1000 != 0,
    };

    let _ = decode_html_entities(text, table);

    let encoded = encode_html_entities(text, table, options);
    assert!(encoded.is_ascii());
    assert_eq!(decode_html_entities(&encoded, table), text);
});
