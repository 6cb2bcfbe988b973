//! Cluster segmentation for bounded width scans.
//!
//! UTF-8 text is segmented with `unicode-segmentation`. Code point slices
//! cannot be handed to it without re-encoding, so they use a small
//! allocation-free approximation instead.

use crate::unicode::width::{
    WidthMethod, ascii_cluster_width, char_width, cluster_width, is_cluster_extender,
};
use unicode_segmentation::UnicodeSegmentation;

const ZWJ: char = '\u{200D}';

/// Outcome of a budgeted walk over clusters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClusterScan {
    /// Offset just past the last cluster that fit.
    pub end: usize,
    /// Columns consumed up to `end`.
    pub width: usize,
    /// True when a cluster was refused for exceeding the budget.
    pub exhausted: bool,
}

/// Walk the grapheme clusters of `s` until `budget` columns would be exceeded.
///
/// Offsets are bytes into `s`.
pub(crate) fn scan_str(s: &str, budget: usize, method: WidthMethod) -> ClusterScan {
    let mut width = 0usize;
    for (offset, cluster) in s.grapheme_indices(true) {
        let w = cluster_width(cluster, method);
        if width + w > budget {
            return ClusterScan {
                end: offset,
                width,
                exhausted: true,
            };
        }
        width += w;
    }
    ClusterScan {
        end: s.len(),
        width,
        exhausted: false,
    }
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Iterator over clusters of a code point slice, yielding `(start, end)`.
///
/// A cluster is a base code point plus every following code point that is
/// zero-width, follows a ZWJ, or completes a regional indicator pair. CR LF is
/// one cluster.
pub(crate) struct CharClusters<'a> {
    chars: &'a [char],
    pos: usize,
    method: WidthMethod,
}

impl<'a> CharClusters<'a> {
    pub(crate) fn new(chars: &'a [char], method: WidthMethod) -> Self {
        Self {
            chars,
            pos: 0,
            method,
        }
    }
}

impl Iterator for CharClusters<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let first = *self.chars.get(start)?;
        let mut end = start + 1;
        let mut open_pair = is_regional_indicator(first);

        while let Some(&c) = self.chars.get(end) {
            let prev = self.chars[end - 1];
            let joins = if prev == '\r' {
                c == '\n' && end == start + 1
            } else if prev == ZWJ || is_cluster_extender(c, self.method) {
                true
            } else if open_pair && is_regional_indicator(c) {
                open_pair = false;
                true
            } else {
                false
            };
            if !joins {
                break;
            }
            end += 1;
        }

        self.pos = end;
        Some((start, end))
    }
}

/// Walk the clusters of a code point slice until `budget` would be exceeded.
///
/// A cluster is as wide as its first code point, except that an ASCII base
/// counts every ASCII code point in the cluster. Offsets are indices into
/// `chars`.
pub(crate) fn scan_chars(chars: &[char], budget: usize, method: WidthMethod) -> ClusterScan {
    let mut width = 0usize;
    for (start, end) in CharClusters::new(chars, method) {
        let first = chars[start];
        let w = if first.is_ascii() {
            ascii_cluster_width(chars[start..end].iter().copied())
        } else {
            char_width(first, method)
        };
        if width + w > budget {
            return ClusterScan {
                end: start,
                width,
                exhausted: true,
            };
        }
        width += w;
    }
    ClusterScan {
        end: chars.len(),
        width,
        exhausted: false,
    }
}
