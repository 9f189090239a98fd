//! 에러 정보 페이로드
//!
//! `std::error::Error`를 엔벨로프의 `data` 필드에 담을 수 있는 직렬화 가능한 형태로 변환합니다.

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

/// 직렬화 가능한 에러 설명
///
/// ```json
/// { "error": "최상위 에러 메시지", "causes": ["원인 1", "원인 2"] }
/// ```
///
/// `causes`는 비어 있으면 직렬화에서 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// 최상위 에러의 Display 문자열
    pub error: String,

    /// `source()` 체인을 따라간 원인 에러 메시지들 (가까운 원인부터)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl ErrorDetail {
    /// 메시지만으로 에러 정보를 생성합니다.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            causes: Vec::new(),
        }
    }

    /// 에러와 그 원인 체인 전체로부터 에러 정보를 생성합니다.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use response_envelope::domain::ErrorDetail;
    ///
    /// let err = "abc".parse::<i32>().unwrap_err();
    /// let detail = ErrorDetail::from_error(&err);
    /// assert_eq!(detail.error, "invalid digit found in string");
    /// assert!(detail.causes.is_empty());
    /// ```
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            error: err.to_string(),
            causes,
        }
    }
}
