//! Fill distribution for aligned output.

use crate::format::spec::Alignment;

/// Fill elements to emit around content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaddingResult {
    pub before: usize,
    pub after: usize,
}

impl PaddingResult {
    /// Total fill emitted.
    #[must_use]
    pub const fn total(self) -> usize {
        self.before + self.after
    }
}

/// Split `width - size` fill elements according to `alignment`.
///
/// Centered content gets the odd fill unit after it:
/// `before = floor(fill / 2)`, `after = ceil(fill / 2)`.
///
/// # Panics
///
/// When `alignment` is `Default` or `ZeroPadding`; callers resolve those
/// first (see [`Alignment::resolve`]). Debug builds also assert
/// `width > size`; release builds return no padding in that case.
#[must_use]
pub fn compute_padding(size: usize, width: usize, alignment: Alignment) -> PaddingResult {
    debug_assert!(
        width > size,
        "don't call compute_padding when no padding is required"
    );
    let fill = width.saturating_sub(size);

    match alignment {
        Alignment::Left => PaddingResult {
            before: 0,
            after: fill,
        },
        Alignment::Center => {
            let before = fill / 2;
            PaddingResult {
                before,
                after: fill - before,
            }
        }
        Alignment::Right => PaddingResult {
            before: fill,
            after: 0,
        },
        Alignment::Default => {
            unreachable!("the caller should resolve the default alignment for the type")
        }
        Alignment::ZeroPadding => unreachable!("the caller should have handled zero padding"),
    }
}
