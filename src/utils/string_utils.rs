//! # 문자열 유틸리티
//!
//! 문자열 필드의 역직렬화와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// null 허용 문자열 필드를 위한 serde deserializer
///
/// JSON `null`은 빈 문자열로 변환하고, 문자열 값은 내용 변경 없이 그대로 반환합니다.
/// 엔벨로프에서 빈 문자열은 "메시지 없음"과 같은 의미이므로
/// `null`, 빈 문자열, 필드 누락이 모두 동일하게 취급됩니다.
/// 필드 누락은 `#[serde(default)]`와 함께 사용하여 처리합니다.
///
/// # 인자
/// * `deserializer` - serde deserializer 인스턴스
///
/// # 반환값
/// * `Ok(String)` - 원본 문자열 또는 `null`인 경우 빈 문자열
/// * `Err(D::Error)` - 문자열도 `null`도 아닌 경우
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_nullable_string;
///
/// #[derive(Deserialize)]
/// struct Reply {
///     #[serde(default, deserialize_with = "deserialize_nullable_string")]
///     message: String,
/// }
///
/// // JSON: {"message": "  hi  "} → "  hi  "
/// // JSON: {"message": null} → ""
/// // JSON: {} → ""
/// ```
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_nullable_string")]
        field: String,
    }

    #[test]
    fn test_deserialize_nullable_string_with_value() {
        let result: TestStruct = serde_json::from_str(r#"{"field": "  hello  "}"#).unwrap();
        assert_eq!(result.field, "  hello  ");
    }

    #[test]
    fn test_deserialize_nullable_string_with_null_and_missing() {
        let result: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(result.field, "");

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.field, "");
    }

    #[test]
    fn test_deserialize_nullable_string_with_korean() {
        let result: TestStruct = serde_json::from_str(r#"{"field": "요청 실패"}"#).unwrap();
        assert_eq!(result.field, "요청 실패");
    }

    #[test]
    fn test_deserialize_nullable_string_rejects_other_types() {
        let result = serde_json::from_str::<TestStruct>(r#"{"field": 42}"#);
        assert!(result.is_err());
    }
}
