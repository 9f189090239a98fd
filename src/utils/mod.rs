//! 공통 유틸리티 함수 모듈
//!
//! 크레이트 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`range_utils`] - 정수 범위 검사 유틸리티
//! - [`string_utils`] - 문자열 필드 역직렬화 유틸리티
//!
//! # Examples
//!
//! ```rust
//! use response_envelope::utils::range_utils::between;
//!
//! assert!(between(404, 400, 499));
//! ```

pub mod range_utils;
pub mod string_utils;
