//! Each notation is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths explicit.
//!
//! ```rust
//! use tincture::models::Srgb;
//! let hsv = Srgb::from_bytes([210, 105, 30]) // create color in srgb.
//!     .to_hsl()                              // convert to hsl.
//!     .to_hsv();                             // convert to hsv.
//! ```

mod hsl;
mod hsv;
mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Srgb;
