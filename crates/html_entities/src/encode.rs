use std::fmt::Write as _;

use crate::options::EncodeOptions;
use crate::table::EntityTable;

/// Characters escaped by [`encode_html_entities`]: all non-ASCII plus the five characters
/// with markup meaning. Other ASCII, control characters included, passes through.
pub fn needs_escape(ch: char) -> bool {
    !ch.is_ascii() || matches!(ch, '&' | '<' | '>' | '"' | '\'')
}

/// Replace every escapable character in `text` with a character reference.
///
/// With `prefer_named_entities` a character that has a canonical name in `table` becomes
/// `&name;`; everything else becomes a numeric reference spelled according to `options`.
/// Text without escapable characters is returned unchanged.
pub fn encode_html_entities(text: &str, table: &EntityTable, options: EncodeOptions) -> String {
    let Some(first) = text.find(needs_escape) else {
        return text.to_owned();
    };

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    out.push_str(&text[..first]);
    for ch in text[first..].chars() {
        if needs_escape(ch) {
            push_reference(&mut out, ch, table, options);
        } else {
            out.push(ch);
        }
    }
    out
}

fn push_reference(out: &mut String, ch: char, table: &EntityTable, options: EncodeOptions) {
    if options.prefer_named_entities {
        if let Some(name) = table.name_for(ch) {
            out.push('&');
            out.push_str(name);
            out.push(';');
            return;
        }
    }

    let cp = u32::from(ch);
    let pad = options.pad_numeric_entities_to_four_digits;
    // Writing into a String cannot fail.
    let _ = match (options.use_hex_entities, options.use_uppercase_hex, pad) {
        (false, _, false) => write!(out, "&#{cp};"),
        (false, _, true) => write!(out, "&#{cp:04};"),
        (true, false, false) => write!(out, "&#x{cp:x};"),
        (true, false, true) => write!(out, "&#x{cp:04x};"),
        (true, true, false) => write!(out, "&#x{cp:X};"),
        (true, true, true) => write!(out, "&#x{cp:04X};"),
    };
}
