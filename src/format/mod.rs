//! Padding and truncation of formatted text.

mod output;
mod padding;
mod sink;
mod spec;

pub use output::{
    formatted_size, write, write_narrow, write_unicode, write_unicode_with, write_widened,
};
pub use padding::{PaddingResult, compute_padding};
pub use sink::{Counter, FmtSink, FnSink, IoSink, Sink, SliceSink, from_fn};
pub use spec::{Alignment, Element, FormatSpec};
