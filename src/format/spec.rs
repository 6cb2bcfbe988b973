//! Parsed format specifications.
//!
//! The parser that produces these lives upstream; the writer only reads them.

use std::fmt;

/// Element type of formatted text.
///
/// `u8` carries UTF-8 code units, `char` carries code points.
pub trait Element: Copy + Eq + fmt::Debug {
    /// Default fill element.
    const SPACE: Self;
}

impl Element for u8 {
    const SPACE: Self = b' ';
}

impl Element for char {
    const SPACE: Self = ' ';
}

/// Placement of fill relative to content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Not specified; the formatted type decides.
    #[default]
    Default,
    /// `<`
    Left,
    /// `^`
    Center,
    /// `>`
    Right,
    /// `0`: sign-aware zero padding, only meaningful for numbers.
    ZeroPadding,
}

impl Alignment {
    /// Parse an alignment from its format-spec character or its name.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "<" | "left" => Some(Self::Left),
            "^" | "center" | "centre" => Some(Self::Center),
            ">" | "right" => Some(Self::Right),
            "0" | "zero" => Some(Self::ZeroPadding),
            "" | "default" => Some(Self::Default),
            _ => None,
        }
    }

    /// Replace `Default` with `natural`, the formatted type's own alignment.
    ///
    /// Text output has no sign to pad after, so `ZeroPadding` becomes `Right`.
    /// A concrete policy passes through unchanged.
    #[must_use]
    pub const fn resolve(self, natural: Self) -> Self {
        match self {
            Self::Default => match natural {
                Self::Default | Self::ZeroPadding => Self::Right,
                concrete => concrete,
            },
            Self::ZeroPadding => Self::Right,
            concrete => concrete,
        }
    }

    /// Whether the padding calculator accepts this alignment.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Left | Self::Center | Self::Right)
    }
}

/// Width, precision, fill and alignment of one replacement field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSpec<T> {
    /// Minimum output width in columns.
    pub width: Option<usize>,
    /// Maximum content width in columns.
    pub precision: Option<usize>,
    pub fill: T,
    pub alignment: Alignment,
}

impl<T: Element> Default for FormatSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FormatSpec<T> {
    /// No width, no precision, space fill, left aligned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: None,
            precision: None,
            fill: T::SPACE,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: T) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl<T> FormatSpec<T> {
    #[must_use]
    pub const fn has_width(&self) -> bool {
        self.width.is_some()
    }

    #[must_use]
    pub const fn has_precision(&self) -> bool {
        self.precision.is_some()
    }

    /// Width with an unset width treated as zero.
    #[must_use]
    pub const fn min_width(&self) -> usize {
        match self.width {
            Some(w) => w,
            None => 0,
        }
    }
}
