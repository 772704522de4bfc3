//! Error handling foundation for menage.
//!
//! Only the `Result` alias lives here. Each crate owns its domain error
//! enums and returns them wrapped in a rootcause `Report`, so a caller can
//! attach its own layer's context as the error travels upward.

use rootcause::Report;

/// A Result whose error side is a rootcause report over context `C`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;
