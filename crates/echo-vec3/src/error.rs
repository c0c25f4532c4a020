// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors raised when building a [`crate::Vec3`] from untyped data.
///
/// The math itself never fails; this only covers boundary conversions such as
/// `Vec3::try_from(&[f64])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Vec3Error {
    /// The source slice did not hold exactly three components.
    #[error("expected 3 components, got {len}")]
    Length {
        /// Number of components actually supplied.
        len: usize,
    },
}
