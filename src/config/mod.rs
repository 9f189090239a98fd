//! # Configuration Module
//!
//! 엔벨로프 코덱의 설정을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`codec_config`] - JSON 출력 형식 설정
//!
//! ## 설계 원칙
//!
//! 이 크레이트는 라이브러리이므로 환경 변수를 읽지 않습니다.
//! 설정은 호출자가 구조체로 직접 구성하며, 기본값은 항상 와이어 형식 규약을 따릅니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use response_envelope::config::CodecConfig;
//!
//! let config = CodecConfig::default().with_pretty(true);
//! assert!(config.pretty);
//! ```

pub mod codec_config;

pub use codec_config::*;
