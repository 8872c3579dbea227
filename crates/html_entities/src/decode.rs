use memchr::memchr;

use crate::table::EntityTable;

const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// Replace character references in `text` with the characters they stand for.
///
/// Contract:
/// - Named references (`&eacute;`) resolve through `table`; names are case-sensitive.
/// - Decimal (`&#233;`) and hex (`&#xe9;`, `&#XE9;`) references resolve directly, without
///   the table.
/// - Only semicolon-terminated references decode. Unknown names, missing semicolons,
///   empty or non-digit bodies, overlong digit runs, surrogates and values above
///   `U+10FFFF` are left in the output exactly as written.
/// - Single pass: the output of one reference is never rescanned, so `&amp;lt;` yields `&lt;`.
///
/// Never fails; text without `&` is copied through unchanged.
pub fn decode_html_entities(text: &str, table: &EntityTable) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copy_start = 0;
    let mut i = 0;

    while let Some(rel) = memchr(b'&', &bytes[i..]) {
        let amp = i + rel;
        // Flush bytes up to '&' unchanged (preserves UTF-8).
        out.push_str(&text[copy_start..amp]);

        let consumed = if bytes.get(amp + 1) == Some(&b'#') {
            decode_numeric(text, amp, &mut out)
        } else {
            decode_named(text, amp, table, &mut out)
        };

        match consumed {
            Some(end) => i = end,
            None => {
                // Not a reference; keep '&' as-is and resume right after it.
                out.push('&');
                i = amp + 1;
            }
        }
        copy_start = i;
    }

    out.push_str(&text[copy_start..]);
    out
}

/// Decode `&#...;` starting at `amp`. Returns the index just past the consumed input.
fn decode_numeric(text: &str, amp: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    let is_hex = matches!(bytes.get(amp + 2), Some(b'x' | b'X'));
    let digits_start = if is_hex { amp + 3 } else { amp + 2 };
    let (max_digits, radix) = if is_hex {
        (MAX_HEX_DIGITS, 16)
    } else {
        (MAX_DEC_DIGITS, 10)
    };

    let end = scan_digits(bytes, digits_start, max_digits, is_hex)?;
    let digits = &text[digits_start..end];
    match u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
    {
        Some(ch) => out.push(ch),
        // Known end; preserve entire sequence unchanged.
        None => out.push_str(&text[amp..=end]),
    }
    Some(end + 1)
}

/// Bounded scan for a non-empty digit run followed by `;`. Returns the index of the `;`.
fn scan_digits(bytes: &[u8], start: usize, max_digits: usize, is_hex: bool) -> Option<usize> {
    let mut j = start;
    while j < bytes.len() {
        let b = bytes[j];
        if b == b';' {
            return (j > start).then_some(j);
        }
        if j - start == max_digits {
            return None;
        }
        let ok = if is_hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        };
        if !ok {
            return None;
        }
        j += 1;
    }
    None
}

fn decode_named(text: &str, amp: usize, table: &EntityTable, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    let name_start = amp + 1;
    let limit = bytes.len().min(name_start + table.max_name_len());

    let mut j = name_start;
    while j < limit && bytes[j].is_ascii_alphanumeric() {
        j += 1;
    }
    if j == name_start || bytes.get(j) != Some(&b';') {
        return None;
    }

    let name = &text[name_start..j];
    let Some(replacement) = table.lookup(name) else {
        log::trace!(target: "html_entities.decode", "unknown named reference: &{name};");
        return None;
    };
    out.push_str(replacement);
    Some(j + 1)
}
