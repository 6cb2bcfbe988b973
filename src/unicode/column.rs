//! Column width oracles.
//!
//! The writer asks two questions of the text it pads: how long is the prefix
//! that is certainly one column per element, and how many columns does the
//! rest occupy within a budget. Only implementations of
//! [`ColumnWidthOracle`] know anything about Unicode.

use crate::unicode::grapheme::{ClusterScan, scan_chars, scan_str};
use crate::unicode::width::{WidthMethod, width_method};

/// Result of a bounded column width scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidthResult {
    /// Element index where the scan stopped, relative to the scanned range.
    pub position: usize,
    /// Columns occupied by the elements before `position`.
    pub width: usize,
}

/// Estimates display columns of an element sequence.
///
/// Implementations must uphold:
/// - `fast_prefix(s) <= s.len()`, and each element of that prefix is exactly
///   one column wide;
/// - `bounded_width(s, max)` returns `position <= s.len()` and
///   `width <= max`; when `position < s.len()` the element at `position`
///   starts a cluster that would push the width past `max`.
pub trait ColumnWidthOracle<T> {
    /// Length of the longest prefix made of single-column elements.
    fn fast_prefix(&self, elements: &[T]) -> usize;

    /// Scan from the start, stopping before the first cluster that would
    /// exceed `max_width`.
    fn bounded_width(&self, elements: &[T], max_width: usize) -> ColumnWidthResult;
}

impl<T, O: ColumnWidthOracle<T> + ?Sized> ColumnWidthOracle<T> for &O {
    fn fast_prefix(&self, elements: &[T]) -> usize {
        (**self).fast_prefix(elements)
    }

    fn bounded_width(&self, elements: &[T], max_width: usize) -> ColumnWidthResult {
        (**self).bounded_width(elements, max_width)
    }
}

/// Unicode-aware oracle backed by `unicode-width` and `unicode-segmentation`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeOracle {
    method: WidthMethod,
}

impl UnicodeOracle {
    /// Oracle pinned to `method`.
    #[must_use]
    pub const fn new(method: WidthMethod) -> Self {
        Self { method }
    }

    /// Oracle using the process-wide width method at the time of the call.
    #[must_use]
    pub fn current() -> Self {
        Self::new(width_method())
    }

    #[must_use]
    pub const fn method(&self) -> WidthMethod {
        self.method
    }
}

/// Shared fast scan: ASCII run, backed off by one when the run is cut short
/// so a trailing base character is rescanned with its combining marks.
///
/// The run also ends at a CR followed by LF, leaving the pair to the cluster
/// scan so a precision cut cannot fall between them.
fn ascii_prefix<T: Copy>(elements: &[T]) -> usize
where
    u32: From<T>,
{
    const CR: u32 = b'\r' as u32;
    const LF: u32 = b'\n' as u32;

    let end = elements
        .iter()
        .enumerate()
        .position(|(i, &e)| {
            let code = u32::from(e);
            code > 0x7F
                || (code == CR && elements.get(i + 1).is_some_and(|&n| u32::from(n) == LF))
        })
        .unwrap_or(elements.len());
    if end < elements.len() {
        end.saturating_sub(1)
    } else {
        end
    }
}

const fn to_result(scan: ClusterScan) -> ColumnWidthResult {
    ColumnWidthResult {
        position: scan.end,
        width: scan.width,
    }
}

impl ColumnWidthOracle<u8> for UnicodeOracle {
    fn fast_prefix(&self, elements: &[u8]) -> usize {
        ascii_prefix(elements)
    }

    fn bounded_width(&self, elements: &[u8], max_width: usize) -> ColumnWidthResult {
        let mut position = 0usize;
        let mut width = 0usize;

        for chunk in elements.utf8_chunks() {
            let scan = scan_str(chunk.valid(), max_width - width, self.method);
            position += scan.end;
            width += scan.width;
            if scan.exhausted {
                return ColumnWidthResult { position, width };
            }

            // Each invalid byte renders as U+FFFD, one column.
            for _ in chunk.invalid() {
                if width + 1 > max_width {
                    return ColumnWidthResult { position, width };
                }
                position += 1;
                width += 1;
            }
        }

        ColumnWidthResult { position, width }
    }
}

impl ColumnWidthOracle<char> for UnicodeOracle {
    fn fast_prefix(&self, elements: &[char]) -> usize {
        ascii_prefix(elements)
    }

    fn bounded_width(&self, elements: &[char], max_width: usize) -> ColumnWidthResult {
        to_result(scan_chars(elements, max_width, self.method))
    }
}

/// Oracle that counts every element as one column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NarrowOracle;

impl<T> ColumnWidthOracle<T> for NarrowOracle {
    fn fast_prefix(&self, elements: &[T]) -> usize {
        elements.len()
    }

    fn bounded_width(&self, elements: &[T], max_width: usize) -> ColumnWidthResult {
        let n = elements.len().min(max_width);
        ColumnWidthResult {
            position: n,
            width: n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORACLE: UnicodeOracle = UnicodeOracle::new(WidthMethod::WcWidth);

    #[test]
    fn test_fast_prefix_all_ascii() {
        assert_eq!(ORACLE.fast_prefix("hello".as_bytes()), 5);
        assert_eq!(ORACLE.fast_prefix(&[] as &[u8]), 0);
    }

    #[test]
    fn test_fast_prefix_backs_off_before_non_ascii() {
        // "abe" + combining acute: 'e' must be rescanned with its mark.
        assert_eq!(ORACLE.fast_prefix("abe\u{0301}".as_bytes()), 2);
        let chars: Vec<char> = "ab漢".chars().collect();
        assert_eq!(ORACLE.fast_prefix(&chars[..]), 1);
        assert_eq!(ORACLE.fast_prefix("漢".as_bytes()), 0);
    }

    #[test]
    fn test_fast_prefix_leaves_crlf_to_the_scan() {
        assert_eq!(ORACLE.fast_prefix("ab\r\ncd".as_bytes()), 1);
        assert_eq!(ORACLE.fast_prefix("\r\n".as_bytes()), 0);
        // A lone CR or LF stays on the fast path.
        assert_eq!(ORACLE.fast_prefix("a\rb\nc".as_bytes()), 5);
        let chars: Vec<char> = "x\r\n".chars().collect();
        assert_eq!(ORACLE.fast_prefix(&chars[..]), 0);
    }

    #[test]
    fn test_bounded_width_bytes() {
        let text = "漢字ab".as_bytes();
        let all = ORACLE.bounded_width(text, usize::MAX);
        assert_eq!(all, ColumnWidthResult { position: 8, width: 6 });

        let cut = ORACLE.bounded_width(text, 3);
        assert_eq!(cut, ColumnWidthResult { position: 3, width: 2 });
    }

    #[test]
    fn test_bounded_width_invalid_utf8() {
        let text = [b'a', 0xFF, 0xFE, b'b'];
        assert_eq!(
            ORACLE.bounded_width(&text, 10),
            ColumnWidthResult { position: 4, width: 4 }
        );
        assert_eq!(
            ORACLE.bounded_width(&text, 2),
            ColumnWidthResult { position: 2, width: 2 }
        );
    }

    #[test]
    fn test_bounded_width_chars() {
        let chars: Vec<char> = "a漢b".chars().collect();
        assert_eq!(
            ORACLE.bounded_width(&chars[..], 2),
            ColumnWidthResult { position: 1, width: 1 }
        );
        assert_eq!(
            ORACLE.bounded_width(&chars[..], 4),
            ColumnWidthResult { position: 3, width: 4 }
        );
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(
            ORACLE.bounded_width("漢".as_bytes(), 0),
            ColumnWidthResult::default()
        );
    }

    #[test]
    fn test_narrow_oracle() {
        let text = "漢字".as_bytes();
        assert_eq!(NarrowOracle.fast_prefix(text), 6);
        assert_eq!(
            NarrowOracle.bounded_width(text, 4),
            ColumnWidthResult { position: 4, width: 4 }
        );
    }

    #[test]
    fn test_oracle_by_reference() {
        fn prefix_of<O: ColumnWidthOracle<u8>>(oracle: O) -> usize {
            oracle.fast_prefix(b"abc")
        }
        let dynamic: &dyn ColumnWidthOracle<u8> = &ORACLE;
        assert_eq!(prefix_of(&ORACLE), 3);
        assert_eq!(prefix_of(dynamic), 3);
    }
}
