//! Width-aware output: copy, pad, and truncate formatted text.
//!
//! [`write`] pads content whose column width is already known.
//! [`write_unicode`] first resolves the width of text that may contain
//! multi-column or zero-width clusters, truncating it to the precision, then
//! hands off to [`write`]. The cheap checks run first so plain ASCII never
//! pays for a Unicode scan.

use crate::error::Result;
use crate::event::{LogLevel, emit_log_with};
use crate::format::padding::compute_padding;
use crate::format::sink::{Counter, Sink};
use crate::format::spec::{Element, FormatSpec};
use crate::unicode::ColumnWidthOracle;
#[cfg(feature = "unicode")]
use crate::unicode::UnicodeOracle;

/// Write `elements` padded to `specs.width`.
///
/// `size` is the display width of `elements` as measured by the caller; it is
/// trusted, not recomputed. For single-column text it equals
/// `elements.len()`. Content at least as wide as the field is copied
/// verbatim.
///
/// Returns the number of elements emitted.
pub fn write<T, S>(
    elements: &[T],
    sink: &mut S,
    specs: &FormatSpec<T>,
    size: usize,
) -> Result<usize>
where
    T: Element,
    S: Sink<T> + ?Sized,
{
    let width = specs.min_width();
    if size >= width {
        sink.put_slice(elements)?;
        return Ok(elements.len());
    }

    let padding = compute_padding(size, width, specs.alignment);
    sink.put_repeated(specs.fill, padding.before)?;
    sink.put_slice(elements)?;
    sink.put_repeated(specs.fill, padding.after)?;
    Ok(padding.total() + elements.len())
}

/// [`write`] for narrow elements under a spec of a wider element type.
///
/// Numeric conversions produce ASCII bytes even when the output is code
/// points; this widens each element on the way into the sink.
pub fn write_widened<N, W, S>(
    elements: &[N],
    sink: &mut S,
    specs: &FormatSpec<W>,
    size: usize,
) -> Result<usize>
where
    N: Copy + Into<W>,
    W: Element,
    S: Sink<W> + ?Sized,
{
    let width = specs.min_width();
    let padding = if size >= width {
        None
    } else {
        Some(compute_padding(size, width, specs.alignment))
    };

    if let Some(padding) = padding {
        sink.put_repeated(specs.fill, padding.before)?;
    }
    for &e in elements {
        sink.put(e.into())?;
    }
    if let Some(padding) = padding {
        sink.put_repeated(specs.fill, padding.after)?;
    }
    Ok(padding.map_or(0, |p| p.total()) + elements.len())
}

/// Write `text`, truncated to `specs.precision` columns and padded to
/// `specs.width` columns, measuring it with `oracle`.
pub fn write_unicode_with<T, S, O>(
    text: &[T],
    sink: &mut S,
    specs: &FormatSpec<T>,
    oracle: &O,
) -> Result<usize>
where
    T: Element,
    S: Sink<T> + ?Sized,
    O: ColumnWidthOracle<T> + ?Sized,
{
    let Some(precision) = specs.precision else {
        return write_unicode_no_precision(text, sink, specs, oracle);
    };

    // Single-column prefix covers the precision: element count is width.
    let prefix = oracle.fast_prefix(text);
    debug_assert!(prefix <= text.len(), "fast prefix beyond end of text");
    if prefix >= precision {
        if text.len() > precision {
            log_truncation(text.len(), precision);
        }
        return write(&text[..precision], sink, specs, precision);
    }

    // All single-column and shorter than the precision.
    if prefix == text.len() {
        return write(text, sink, specs, text.len());
    }

    let column = oracle.bounded_width(&text[prefix..], precision - prefix);
    let size = prefix + column.width;
    let end = prefix + column.position;
    if end != text.len() {
        log_truncation(text.len(), end);
    }
    write(&text[..end], sink, specs, size)
}

fn write_unicode_no_precision<T, S, O>(
    text: &[T],
    sink: &mut S,
    specs: &FormatSpec<T>,
    oracle: &O,
) -> Result<usize>
where
    T: Element,
    S: Sink<T> + ?Sized,
    O: ColumnWidthOracle<T> + ?Sized,
{
    debug_assert!(!specs.has_precision(), "use write_unicode_with");

    let Some(width) = specs.width else {
        sink.put_slice(text)?;
        return Ok(text.len());
    };

    let prefix = oracle.fast_prefix(text);
    let mut size = prefix;
    if size < width && prefix != text.len() {
        // A scan cut short by the budget means the text is wider than the
        // field, so no padding applies either way.
        let column = oracle.bounded_width(&text[prefix..], width - prefix);
        if prefix + column.position != text.len() {
            sink.put_slice(text)?;
            return Ok(text.len());
        }
        size += column.width;
    }

    write(text, sink, specs, size)
}

/// Every element is one column wide.
///
/// Truncates to the precision by element count, then pads.
pub fn write_narrow<T, S>(text: &[T], sink: &mut S, specs: &FormatSpec<T>) -> Result<usize>
where
    T: Element,
    S: Sink<T> + ?Sized,
{
    if let Some(precision) = specs.precision {
        if text.len() > precision {
            log_truncation(text.len(), precision);
            return write(&text[..precision], sink, specs, precision);
        }
    }
    write(text, sink, specs, text.len())
}

/// Write `text` truncated to `specs.precision` and padded to `specs.width`,
/// both measured in display columns.
///
/// Uses a [`UnicodeOracle`] with the process-wide width method.
#[cfg(feature = "unicode")]
pub fn write_unicode<T, S>(text: &[T], sink: &mut S, specs: &FormatSpec<T>) -> Result<usize>
where
    T: Element,
    S: Sink<T> + ?Sized,
    UnicodeOracle: ColumnWidthOracle<T>,
{
    write_unicode_with(text, sink, specs, &UnicodeOracle::current())
}

/// Write `text` truncated to `specs.precision` and padded to `specs.width`.
///
/// Built without the `unicode` feature: every element is one column.
#[cfg(not(feature = "unicode"))]
pub fn write_unicode<T, S>(text: &[T], sink: &mut S, specs: &FormatSpec<T>) -> Result<usize>
where
    T: Element,
    S: Sink<T> + ?Sized,
{
    write_narrow(text, sink, specs)
}

/// Number of elements [`write_unicode`] would emit for `text`.
#[cfg(feature = "unicode")]
#[must_use]
pub fn formatted_size<T>(text: &[T], specs: &FormatSpec<T>) -> usize
where
    T: Element,
    UnicodeOracle: ColumnWidthOracle<T>,
{
    let mut counter = Counter::default();
    // Counter never refuses an element.
    write_unicode(text, &mut counter, specs).unwrap_or_default()
}

/// Number of elements [`write_unicode`] would emit for `text`.
#[cfg(not(feature = "unicode"))]
#[must_use]
pub fn formatted_size<T: Element>(text: &[T], specs: &FormatSpec<T>) -> usize {
    let mut counter = Counter::default();
    // Counter never refuses an element.
    write_unicode(text, &mut counter, specs).unwrap_or_default()
}

fn log_truncation(from: usize, to: usize) {
    emit_log_with(LogLevel::Debug, || {
        format!("precision truncated text from {from} to {to} elements")
    });
}
