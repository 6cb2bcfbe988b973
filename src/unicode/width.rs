//! Display width of code points and grapheme clusters.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

impl WidthMethod {
    /// Parse a method name as accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wcwidth" | "narrow" => Some(Self::WcWidth),
            "unicode" | "cjk" | "wide" => Some(Self::Unicode),
            _ => None,
        }
    }
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the process-wide width method picked up by `UnicodeOracle::current`.
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the process-wide width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Column width of a single code point.
///
/// ASCII is always one column, control characters included, so this agrees
/// with the fast prefix scan. Everything else goes through `unicode-width`.
#[inline]
#[must_use]
pub fn char_width(c: char, method: WidthMethod) -> usize {
    if c.is_ascii() {
        return 1;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

/// Column width of one extended grapheme cluster.
#[must_use]
pub fn cluster_width(cluster: &str, method: WidthMethod) -> usize {
    let mut chars = cluster.chars();
    match (chars.next(), chars.next()) {
        (None, _) => 0,
        (Some(c), None) => char_width(c, method),
        (Some(c), Some(_)) if c.is_ascii() => ascii_cluster_width(cluster.chars()),
        _ => match method {
            WidthMethod::WcWidth => UnicodeWidthStr::width(cluster),
            WidthMethod::Unicode => UnicodeWidthStr::width_cjk(cluster),
        },
    }
}

/// Width of a cluster with an ASCII base: one column per ASCII code point.
///
/// Marks after the base add nothing; CR LF is two columns, as it is when the
/// fast scan counts it element by element.
pub(crate) fn ascii_cluster_width(cluster: impl IntoIterator<Item = char>) -> usize {
    cluster.into_iter().filter(char::is_ascii).count()
}

/// Whether a code point can only extend the cluster before it.
#[inline]
#[must_use]
pub(crate) fn is_cluster_extender(c: char, method: WidthMethod) -> bool {
    !c.is_ascii() && char_width(c, method) == 0
}
