/// How [`encode_html_entities`](crate::encode_html_entities) spells the references it emits.
///
/// Flags are independent. `use_uppercase_hex` only has an effect together with
/// `use_hex_entities`; `pad_numeric_entities_to_four_digits` applies to decimal and hex alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Emit `&name;` for characters the table knows, numeric references otherwise.
    pub prefer_named_entities: bool,
    /// Emit `&#xe9;` instead of `&#233;`.
    pub use_hex_entities: bool,
    pub use_uppercase_hex: bool,
    /// Zero-pad the digit run to at least four digits (`&#0233;`, `&#x00e9;`).
    pub pad_numeric_entities_to_four_digits: bool,
}

impl EncodeOptions {
    pub const fn new() -> Self {
        Self {
            prefer_named_entities: false,
            use_hex_entities: false,
            use_uppercase_hex: false,
            pad_numeric_entities_to_four_digits: false,
        }
    }

    pub const fn prefer_named(mut self) -> Self {
        self.prefer_named_entities = true;
        self
    }

    pub const fn hex(mut self) -> Self {
        self.use_hex_entities = true;
        self
    }

    pub const fn uppercase_hex(mut self) -> Self {
        self.use_uppercase_hex = true;
        self
    }

    pub const fn padded(mut self) -> Self {
        self.pad_numeric_entities_to_four_digits = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain_decimal() {
        assert_eq!(EncodeOptions::default(), EncodeOptions::new());
        assert!(!EncodeOptions::default().use_hex_entities);
    }

    #[test]
    fn builders_set_one_flag_each() {
        let opts = EncodeOptions::new().hex().padded();
        assert!(opts.use_hex_entities);
        assert!(opts.pad_numeric_entities_to_four_digits);
        assert!(!opts.use_uppercase_hex);
        assert!(!opts.prefer_named_entities);
        assert!(EncodeOptions::new().prefer_named().prefer_named_entities);
        assert!(EncodeOptions::new().uppercase_hex().use_uppercase_hex);
    }
}
