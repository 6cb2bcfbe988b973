//! Unicode column width estimation.

mod column;
mod grapheme;
mod width;

pub use column::{ColumnWidthOracle, ColumnWidthResult, NarrowOracle, UnicodeOracle};
pub use width::{WidthMethod, char_width, cluster_width, set_width_method, width_method};
