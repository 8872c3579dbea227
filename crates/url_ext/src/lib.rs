//! Small conveniences on top of [`url::Url`].

use url::{ParseError, Url};

const DEV_NULL: &str = "file:///dev/null";

/// `file:///dev/null`.
pub fn dev_null() -> Url {
    Url::parse(DEV_NULL).expect("dev/null URL literal is valid")
}

/// Parse a URL written as a literal in source.
///
/// Unlike a force-unwrapping constructor this hands the parse error back, so a typo in a
/// literal surfaces at the call site instead of aborting the process.
pub fn parse_static(raw: &'static str) -> Result<Url, ParseError> {
    Url::parse(raw)
}

/// The URL of the directory containing `url`'s last path segment.
///
/// A trailing slash is ignored, so `file:///a/b/` and `file:///a/b` both yield
/// `file:///a/`. The root is its own parent. Query and fragment are dropped.
/// Returns `None` for URLs without a hierarchical path (`mailto:`, `data:`).
pub fn parent(url: &Url) -> Option<Url> {
    let mut parent = url.clone();
    {
        let mut segments = parent.path_segments_mut().ok()?;
        segments.pop_if_empty().pop().push("");
    }
    parent.set_query(None);
    parent.set_fragment(None);
    Some(parent)
}
