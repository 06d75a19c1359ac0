mod dispatch;
mod grouped;
mod relocate;
#[allow(clippy::module_inception)]
mod tibble;

/// Grouped frame returned by `Tibble::group_by`.
pub use grouped::GroupedTibble;
/// The tidy frame and its sort-direction option.
pub use tibble::{Descending, Tibble};
