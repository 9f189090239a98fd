//! 에러 타입 모듈
//!
//! - [`errors`] - `EnvelopeError`와 `EnvelopeResult`

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::{EnvelopeError, EnvelopeResult};
