//! Curve decoder trait.

use crate::curve::ForwardCurve;
use crate::error::DecodeError;

/// Decodes raw document bytes into a [`ForwardCurve`].
///
/// Decoders are schema-checked: an unexpected sheet or header layout fails
/// fast rather than silently selecting the wrong columns.
pub trait CurveDecoder: Send + Sync {
    /// Decode a workbook into a curve.
    fn decode(&self, bytes: &[u8]) -> Result<ForwardCurve, DecodeError>;
}
