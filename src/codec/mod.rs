//! # Envelope Codec Module
//!
//! 엔벨로프를 JSON 와이어 형식으로 변환하는 모듈입니다.
//!
//! 이 모듈의 함수들은 기본 설정(compact 출력)의 [`JsonCodec`]을 사용합니다.
//! 출력 형식을 바꾸려면 [`JsonCodec::new`]에 [`CodecConfig`](crate::config::CodecConfig)를 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use response_envelope::codec;
//! use response_envelope::domain::Envelope;
//!
//! let envelope = Envelope::success(vec!["test", "data"]);
//! let json = codec::to_string(&envelope).unwrap();
//! assert_eq!(json, r#"{"code":200,"status":"success","data":["test","data"]}"#);
//!
//! let decoded = codec::from_str(&json).unwrap();
//! assert_eq!(decoded.code, 200);
//! assert_eq!(decoded.message, "");
//! ```

mod float_check;
pub mod json_codec;

pub use json_codec::JsonCodec;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::Envelope;
use crate::errors::EnvelopeResult;

/// 엔벨로프를 compact JSON 바이트로 직렬화합니다.
pub fn to_bytes<T: Serialize>(envelope: &Envelope<T>) -> EnvelopeResult<Vec<u8>> {
    JsonCodec::default().to_bytes(envelope)
}

/// 엔벨로프를 compact JSON 문자열로 직렬화합니다.
pub fn to_string<T: Serialize>(envelope: &Envelope<T>) -> EnvelopeResult<String> {
    JsonCodec::default().to_string(envelope)
}

/// JSON 바이트를 `serde_json::Value` 페이로드를 가진 엔벨로프로 역직렬화합니다.
pub fn from_bytes(bytes: &[u8]) -> EnvelopeResult<Envelope<Value>> {
    JsonCodec::default().from_bytes(bytes)
}

/// JSON 문자열을 `serde_json::Value` 페이로드를 가진 엔벨로프로 역직렬화합니다.
pub fn from_str(text: &str) -> EnvelopeResult<Envelope<Value>> {
    JsonCodec::default().from_str(text)
}

/// JSON 바이트를 강타입 페이로드를 가진 엔벨로프로 역직렬화합니다.
pub fn from_bytes_as<T: DeserializeOwned + Default>(bytes: &[u8]) -> EnvelopeResult<Envelope<T>> {
    JsonCodec::default().from_bytes_as(bytes)
}

/// JSON 문자열을 강타입 페이로드를 가진 엔벨로프로 역직렬화합니다.
pub fn from_str_as<T: DeserializeOwned + Default>(text: &str) -> EnvelopeResult<Envelope<T>> {
    JsonCodec::default().from_str_as(text)
}
