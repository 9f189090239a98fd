//! # JSON 엔벨로프 코덱
//!
//! [`Envelope`]를 JSON 바이트/문자열로 변환하고, 반대로 복원합니다.
//!
//! ## 와이어 규약
//!
//! - 필드 이름: `code`, `status`, `message`, `data`
//! - `message`가 비어 있으면 필드 자체를 생략
//! - NaN, ±Infinity는 JSON으로 표현할 수 없으므로 `null`로 바꾸지 않고 직렬화 에러로 처리
//! - `data`의 형태는 페이로드 자체의 직렬화 결과를 그대로 사용
//! - 역직렬화 시 `code`, `status`는 필수이며, `message`와 `data`는 누락/`null`을 허용
//! - 알 수 없는 추가 필드는 무시
//!
//! ## 에러
//!
//! | 연산 | 실패 시 |
//! |------|---------|
//! | `to_bytes`, `to_string` | `EnvelopeError::SerializationError` |
//! | `from_bytes`, `from_str` 및 `_as` 변형 | `EnvelopeError::ParseError` |

use log::{debug, trace};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::float_check::ensure_finite_floats;
use crate::config::CodecConfig;
use crate::domain::Envelope;
use crate::errors::{EnvelopeError, EnvelopeResult};

/// 설정을 가진 JSON 엔벨로프 코덱
///
/// 상태를 갖지 않으므로 여러 스레드에서 공유해도 안전합니다.
///
/// # Examples
///
/// ```rust
/// use response_envelope::codec::JsonCodec;
/// use response_envelope::config::CodecConfig;
/// use response_envelope::domain::Envelope;
///
/// let codec = JsonCodec::new(CodecConfig::default().with_pretty(true));
/// let text = codec.to_string(&Envelope::success(1)).unwrap();
/// assert!(text.contains('\n'));
///
/// let decoded = codec.from_str(&text).unwrap();
/// assert_eq!(decoded.code, 200);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// 엔벨로프를 JSON 바이트 시퀀스로 직렬화합니다.
    ///
    /// # Errors
    ///
    /// * `EnvelopeError::SerializationError` - 페이로드를 JSON으로 표현할 수 없는 경우
    pub fn to_bytes<T: Serialize>(&self, envelope: &Envelope<T>) -> EnvelopeResult<Vec<u8>> {
        Self::ensure_encodable(envelope)?;

        let result = if self.config.pretty {
            serde_json::to_vec_pretty(envelope)
        } else {
            serde_json::to_vec(envelope)
        };

        match result {
            Ok(bytes) => {
                trace!("엔벨로프 직렬화 완료: code={}, {} bytes", envelope.code, bytes.len());
                Ok(bytes)
            }
            Err(e) => {
                debug!("엔벨로프 직렬화 실패: code={}, {}", envelope.code, e);
                Err(EnvelopeError::SerializationError(e))
            }
        }
    }

    /// 엔벨로프를 JSON 문자열로 직렬화합니다.
    ///
    /// serde_json의 출력은 항상 UTF-8이므로 바이트→문자열 변환 단계는 실패하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `EnvelopeError::SerializationError` - 페이로드를 JSON으로 표현할 수 없는 경우
    pub fn to_string<T: Serialize>(&self, envelope: &Envelope<T>) -> EnvelopeResult<String> {
        Self::ensure_encodable(envelope)?;

        let result = if self.config.pretty {
            serde_json::to_string_pretty(envelope)
        } else {
            serde_json::to_string(envelope)
        };

        result.map_err(|e| {
            debug!("엔벨로프 직렬화 실패: code={}, {}", envelope.code, e);
            EnvelopeError::SerializationError(e)
        })
    }

    /// serde_json이 `null`로 바꿔 출력하는 NaN/±Infinity를 직렬화 전에 거부합니다.
    fn ensure_encodable<T: Serialize>(envelope: &Envelope<T>) -> EnvelopeResult<()> {
        ensure_finite_floats(envelope).map_err(|e| {
            debug!("엔벨로프 직렬화 실패: code={}, {}", envelope.code, e);
            EnvelopeError::SerializationError(e)
        })
    }

    /// JSON 바이트 시퀀스를 일반 구조화 페이로드를 가진 엔벨로프로 역직렬화합니다.
    ///
    /// # Errors
    ///
    /// * `EnvelopeError::ParseError` - JSON 문법 오류 또는 엔벨로프 구조 불일치
    pub fn from_bytes(&self, bytes: &[u8]) -> EnvelopeResult<Envelope<Value>> {
        self.from_bytes_as(bytes)
    }

    /// JSON 문자열을 일반 구조화 페이로드를 가진 엔벨로프로 역직렬화합니다.
    pub fn from_str(&self, text: &str) -> EnvelopeResult<Envelope<Value>> {
        self.from_bytes(text.as_bytes())
    }

    /// JSON 바이트 시퀀스를 강타입 페이로드 `T`를 가진 엔벨로프로 역직렬화합니다.
    ///
    /// `data` 필드가 없으면 `T::default()`가 사용됩니다.
    ///
    /// # Errors
    ///
    /// * `EnvelopeError::ParseError` - JSON 문법 오류, 엔벨로프 구조 불일치,
    ///   또는 `data`가 `T`와 맞지 않는 경우
    pub fn from_bytes_as<T>(&self, bytes: &[u8]) -> EnvelopeResult<Envelope<T>>
    where
        T: DeserializeOwned + Default,
    {
        match serde_json::from_slice::<Envelope<T>>(bytes) {
            Ok(envelope) => {
                trace!("엔벨로프 역직렬화 완료: code={}, status={}", envelope.code, envelope.status);
                Ok(envelope)
            }
            Err(e) => {
                debug!("엔벨로프 역직렬화 실패: {}", e);
                Err(EnvelopeError::ParseError(e))
            }
        }
    }

    /// JSON 문자열을 강타입 페이로드 `T`를 가진 엔벨로프로 역직렬화합니다.
    pub fn from_str_as<T>(&self, text: &str) -> EnvelopeResult<Envelope<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.from_bytes_as(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorDetail, Status};
    use serde_json::json;
    use std::collections::BTreeMap;

    const SUCCESS_JSON: &str = r#"{"code":200,"status":"success","data":["test","data"]}"#;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn codec() -> JsonCodec {
        init_logger();
        JsonCodec::default()
    }

    #[test]
    fn test_to_bytes_omits_empty_message() {
        let envelope = Envelope::success(vec!["test", "data"]);
        let bytes = codec().to_bytes(&envelope).unwrap();
        assert_eq!(bytes, SUCCESS_JSON.as_bytes());
    }

    #[test]
    fn test_to_string_matches_bytes() {
        let envelope = Envelope::success(vec!["test", "data"]);
        let text = codec().to_string(&envelope).unwrap();
        assert_eq!(text, SUCCESS_JSON);
    }

    #[test]
    fn test_message_is_emitted_when_present() {
        let envelope = Envelope::client_error("The request was faulty", ErrorDetail::new("This is a error"));
        let text = codec().to_string(&envelope).unwrap();
        assert_eq!(
            text,
            r#"{"code":400,"status":"error","message":"The request was faulty","data":{"error":"This is a error"}}"#
        );
    }

    #[test]
    fn test_unit_payload_serializes_as_null() {
        let text = codec().to_string(&Envelope::wrap(204, (), "")).unwrap();
        assert_eq!(text, r#"{"code":204,"status":"success","data":null}"#);
    }

    #[test]
    fn test_custom_status_survives_serialization() {
        let envelope = Envelope::wrap_manually(700, "undefined status", json!({"k": 1}), "custom");
        let text = codec().to_string(&envelope).unwrap();
        assert_eq!(
            text,
            r#"{"code":700,"status":"undefined status","message":"custom","data":{"k":1}}"#
        );

        let decoded = codec().from_str(&text).unwrap();
        assert_eq!(decoded.status, Status::Custom("undefined status".to_string()));
    }

    #[test]
    fn test_unencodable_payload_is_serialization_error() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), "tuple keys are not valid JSON object keys");
        let envelope = Envelope::success(map);

        assert!(matches!(
            codec().to_bytes(&envelope),
            Err(EnvelopeError::SerializationError(_))
        ));
        assert!(matches!(
            codec().to_string(&envelope),
            Err(EnvelopeError::SerializationError(_))
        ));
    }

    #[test]
    fn test_non_finite_payload_is_serialization_error() {
        let nan = Envelope::success(f64::NAN);
        let inf = Envelope::wrap(200, f64::INFINITY, "");
        let nested = Envelope::success(vec![1.0, f64::INFINITY]);

        for result in [
            codec().to_bytes(&nan).map(|_| ()),
            codec().to_bytes(&inf).map(|_| ()),
            codec().to_bytes(&nested).map(|_| ()),
        ] {
            assert!(matches!(result, Err(EnvelopeError::SerializationError(_))));
        }

        for result in [
            codec().to_string(&nan),
            codec().to_string(&inf),
            codec().to_string(&nested),
        ] {
            assert!(matches!(result, Err(EnvelopeError::SerializationError(_))));
        }
    }

    #[test]
    fn test_non_finite_payload_fails_in_pretty_mode() {
        let codec = JsonCodec::new(CodecConfig::new().with_pretty(true));
        let envelope = Envelope::server_error("bad reading", f32::NEG_INFINITY);

        assert!(matches!(codec.to_bytes(&envelope), Err(EnvelopeError::SerializationError(_))));
        assert!(matches!(codec.to_string(&envelope), Err(EnvelopeError::SerializationError(_))));
    }

    #[test]
    fn test_finite_floats_round_trip() {
        let original = Envelope::success(json!([1.0, -0.5, 2.75]));
        let bytes = codec().to_bytes(&original).unwrap();
        assert_eq!(codec().from_bytes(&bytes).unwrap(), original);
    }

    #[test]
    fn test_from_bytes() {
        let envelope = codec().from_bytes(SUCCESS_JSON.as_bytes()).unwrap();

        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.data, json!(["test", "data"]));
    }

    #[test]
    fn test_from_str_numeric_data() {
        let envelope = codec()
            .from_str(r#"{"code":222,"status":"success","data":[1,2,3]}"#)
            .unwrap();

        assert_eq!(envelope.code, 222);
        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.data, json!([1, 2, 3]));
        assert_eq!(envelope.data.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_from_str_tolerates_missing_or_null_data() {
        let envelope = codec().from_str(r#"{"code":500,"status":"fail"}"#).unwrap();
        assert_eq!(envelope.data, Value::Null);

        let envelope = codec()
            .from_str(r#"{"code":500,"status":"fail","message":null,"data":null}"#)
            .unwrap();
        assert_eq!(envelope.data, Value::Null);
        assert_eq!(envelope.message, "");
    }

    #[test]
    fn test_from_str_ignores_unknown_fields() {
        let envelope = codec()
            .from_str(r#"{"code":200,"status":"success","data":1,"trace_id":"abc"}"#)
            .unwrap();
        assert_eq!(envelope.data, json!(1));
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        let cases = [
            "",
            "not json",
            r#"{"code":200,"status":"success""#,
            r#"["code",200]"#,
            r#"{"code":"200","status":"success","data":null}"#,
            r#"{"code":200,"status":7,"data":null}"#,
            r#"{"code":200,"status":"success","message":3,"data":null}"#,
            r#"{"status":"success","data":null}"#,
            r#"{"code":200,"data":null}"#,
        ];

        for input in cases {
            assert!(
                matches!(codec().from_str(input), Err(EnvelopeError::ParseError(_))),
                "expected parse error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_from_str_as_typed_payload() {
        let envelope = codec()
            .from_str_as::<Vec<String>>(SUCCESS_JSON)
            .unwrap();
        assert_eq!(envelope.data, vec!["test".to_string(), "data".to_string()]);

        let envelope = codec()
            .from_bytes_as::<ErrorDetail>(br#"{"code":400,"status":"error","message":"bad"}"#)
            .unwrap();
        assert_eq!(envelope.data, ErrorDetail::default());
    }

    #[test]
    fn test_from_str_as_type_mismatch_is_parse_error() {
        let result = codec().from_str_as::<Vec<u32>>(SUCCESS_JSON);
        assert!(matches!(result, Err(EnvelopeError::ParseError(_))));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let envelopes = vec![
            Envelope::success(json!({"items": [1, 2, 3], "total": 3})),
            Envelope::wrap(418, json!("teapot"), "short and stout"),
            Envelope::wrap(-1, Value::Null, ""),
            Envelope::wrap_manually(299, "partial", json!([true, null, 1.5]), "some items skipped"),
            Envelope::client_error("bad request", json!({"error": "missing field"})),
            Envelope::server_error("", json!({"error": "db down"})),
        ];

        for original in envelopes {
            let bytes = codec().to_bytes(&original).unwrap();
            let decoded = codec().from_bytes(&bytes).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_pretty_output_round_trips() {
        let codec = JsonCodec::new(CodecConfig::new().with_pretty(true));
        let original = Envelope::wrap(201, json!({"id": 1}), "created");

        let text = codec.to_string(&original).unwrap();
        assert!(text.contains("\n  \"code\": 201"));

        let bytes = codec.to_bytes(&original).unwrap();
        assert_eq!(bytes, text.as_bytes());

        assert_eq!(codec.from_str(&text).unwrap(), original);
    }
}
