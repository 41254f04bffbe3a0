//! # Ratecast Ext Pensford
//!
//! Pensford publication backend for the Ratecast pipeline:
//! - [`PensfordSource`]: retrieves the dated forward-curve workbook over
//!   HTTP, with same-day retries and a single previous-day fallback
//! - [`PensfordDecoder`]: decodes the "Forward Curve" sheet into a
//!   [`ratecast_traits::ForwardCurve`]

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod source;

pub use decode::{PensfordDecoder, FORWARD_CURVE_SHEET};
pub use source::{PensfordSource, DEFAULT_URL_TEMPLATE};
