//! Deterministic inputs shared by the benchmarks.

pub const PLAIN_TEMPLATE: &str = "The quick brown fox jumps over the lazy dog. ";
pub const ENCODED_TEMPLATE: &str =
    "caf&eacute; &amp; cr&egrave;me &#233;&#xE9; &lt;b&gt;na&iuml;ve&lt;/b&gt; &hellip; ";
pub const RAW_TEMPLATE: &str = "café & crème éé <b>naïve</b> … ";

fn repeat_template(template: &str, blocks: usize) -> String {
    let mut text = String::with_capacity(template.len() * blocks);
    for _ in 0..blocks {
        text.push_str(template);
    }
    text
}

pub fn make_plain(blocks: usize) -> String {
    repeat_template(PLAIN_TEMPLATE, blocks)
}

pub fn make_encoded(blocks: usize) -> String {
    repeat_template(ENCODED_TEMPLATE, blocks)
}

pub fn make_raw(blocks: usize) -> String {
    repeat_template(RAW_TEMPLATE, blocks)
}

/// Ampersands that never complete a reference, forcing the slow path on every byte run.
pub fn make_ampersand_adversarial(bytes: usize) -> String {
    let mut text = String::with_capacity(bytes + 16);
    while text.len() < bytes {
        text.push_str("&#1234567&abcdefgh&&x");
    }
    text
}
