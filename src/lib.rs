//! `colfmt` - width-aware output for text formatting
//!
//! Pads and truncates already-rendered text to a format field's width and
//! precision, measuring both in display columns so wide and combining
//! characters line up. Output goes through a caller-supplied [`Sink`];
//! nothing is allocated on the write path unless a log callback is
//! installed, in which case each truncation formats one log message.
//!
//! ```
//! use colfmt::{Alignment, FormatSpec, UnicodeOracle, WidthMethod, write_unicode_with};
//!
//! let specs = FormatSpec::new()
//!     .with_width(8)
//!     .with_fill(b'*')
//!     .with_alignment(Alignment::Center);
//! let oracle = UnicodeOracle::new(WidthMethod::WcWidth);
//! let mut out = Vec::new();
//! write_unicode_with("漢字".as_bytes(), &mut out, &specs, &oracle).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "**漢字**");
//! ```
//!
//! With the default `unicode` feature, [`write_unicode`] does the same using
//! the process-wide [`WidthMethod`]. Without it, every element is one column.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow format::FormatSpec etc
#![allow(clippy::missing_errors_doc)] // Every error is a sink error
#![allow(clippy::missing_panics_doc)] // Panics are contract violations
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::must_use_candidate)] // Sink constructors are obvious

pub mod error;
pub mod event;
pub mod format;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, log_enabled, set_log_callback};
pub use format::{
    Alignment, Counter, Element, FmtSink, FnSink, FormatSpec, IoSink, PaddingResult, Sink,
    SliceSink, compute_padding, formatted_size, from_fn, write, write_narrow, write_unicode,
    write_unicode_with, write_widened,
};
pub use unicode::{
    ColumnWidthOracle, ColumnWidthResult, NarrowOracle, UnicodeOracle, WidthMethod,
    set_width_method, width_method,
};
