//! # 응답 상태 분류 (Status Category)
//!
//! 엔벨로프의 `status` 필드를 표현하는 모듈입니다.
//! 표준 분류 4가지(`success`, `fail`, `error`, `unclassified`)는 열거형 변형으로,
//! 수동 생성 시 전달되는 임의의 문자열은 [`Status::Custom`]으로 보존합니다.
//!
//! ## 코드 범위별 분류
//!
//! | 코드 범위 | 상태 | 의미 |
//! |-----------|------|------|
//! | 100 - 399 | `success` | 정상 처리 |
//! | 400 - 499 | `error` | 클라이언트 요청 오류 |
//! | 500 - 599 | `fail` | 서버 측 실패 |
//! | 그 외 | `unclassified` | 분류 불가 |
//!
//! 와이어 형식에서는 항상 평문 문자열로 직렬화됩니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::range_utils::between;

/// 성공 상태 문자열
pub const STATUS_SUCCESS: &str = "success";
/// 서버 측 실패 상태 문자열
pub const STATUS_FAIL: &str = "fail";
/// 클라이언트 오류 상태 문자열
pub const STATUS_ERROR: &str = "error";
/// 분류되지 않은 상태 문자열
pub const STATUS_UNCLASSIFIED: &str = "unclassified";

/// 엔벨로프의 상태 분류
///
/// 표준 4가지 분류 외의 값은 `Custom`으로 그대로 보존되며,
/// 직렬화/역직렬화 시 원래 문자열이 변경 없이 유지됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    /// 100-399
    Success,
    /// 500-599
    Fail,
    /// 400-499
    Error,
    /// 범위 밖의 모든 코드
    Unclassified,
    /// 수동 생성 시 지정된 비표준 상태
    Custom(String),
}

impl Status {
    /// 상태 코드를 범위에 따라 분류합니다.
    ///
    /// 범위는 success, error, fail 순서로 검사하며 양 끝을 포함합니다.
    /// 모든 정수에 대해 정의된 전함수입니다.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use response_envelope::domain::Status;
    ///
    /// assert_eq!(Status::classify(204), Status::Success);
    /// assert_eq!(Status::classify(404), Status::Error);
    /// assert_eq!(Status::classify(503), Status::Fail);
    /// assert_eq!(Status::classify(700), Status::Unclassified);
    /// ```
    pub fn classify(code: i64) -> Self {
        if between(code, 100, 399) {
            Status::Success
        } else if between(code, 400, 499) {
            Status::Error
        } else if between(code, 500, 599) {
            Status::Fail
        } else {
            Status::Unclassified
        }
    }

    /// 와이어 형식의 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Success => STATUS_SUCCESS,
            Status::Fail => STATUS_FAIL,
            Status::Error => STATUS_ERROR,
            Status::Unclassified => STATUS_UNCLASSIFIED,
            Status::Custom(s) => s.as_str(),
        }
    }

    /// 표준 4가지 분류 중 하나인지 확인합니다.
    pub fn is_standard(&self) -> bool {
        !matches!(self, Status::Custom(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            STATUS_SUCCESS => Status::Success,
            STATUS_FAIL => Status::Fail,
            STATUS_ERROR => Status::Error,
            STATUS_UNCLASSIFIED => Status::Unclassified,
            other => Status::Custom(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            STATUS_SUCCESS => Status::Success,
            STATUS_FAIL => Status::Fail,
            STATUS_ERROR => Status::Error,
            STATUS_UNCLASSIFIED => Status::Unclassified,
            _ => Status::Custom(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Custom(s) => s,
            standard => standard.as_str().to_string(),
        }
    }
}

impl PartialEq<str> for Status {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Status {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(STATUS_SUCCESS, "success");
        assert_eq!(STATUS_FAIL, "fail");
        assert_eq!(STATUS_ERROR, "error");
        assert_eq!(STATUS_UNCLASSIFIED, "unclassified");
    }

    #[test]
    fn test_classify_success_range() {
        for code in 100..=399 {
            assert_eq!(Status::classify(code), Status::Success, "code {}", code);
        }
    }

    #[test]
    fn test_classify_error_range() {
        for code in 400..=499 {
            assert_eq!(Status::classify(code), Status::Error, "code {}", code);
        }
    }

    #[test]
    fn test_classify_fail_range() {
        for code in 500..=599 {
            assert_eq!(Status::classify(code), Status::Fail, "code {}", code);
        }
    }

    #[test]
    fn test_classify_outside_ranges() {
        for code in [i64::MIN, -200, -1, 0, 99, 600, 700, 999, i64::MAX] {
            assert_eq!(Status::classify(code), Status::Unclassified, "code {}", code);
        }
    }

    #[test]
    fn test_from_str_maps_standard_values() {
        assert_eq!(Status::from("success"), Status::Success);
        assert_eq!(Status::from("fail"), Status::Fail);
        assert_eq!(Status::from("error"), Status::Error);
        assert_eq!(Status::from("unclassified"), Status::Unclassified);
    }

    #[test]
    fn test_from_owned_string_maps_standard_values() {
        assert_eq!(Status::from("success".to_string()), Status::Success);
        assert_eq!(Status::from("fail".to_string()), Status::Fail);
        assert_eq!(Status::from("error".to_string()), Status::Error);
        assert_eq!(Status::from("unclassified".to_string()), Status::Unclassified);
    }

    #[test]
    fn test_custom_status_is_preserved() {
        let status = Status::from("undefined status".to_string());
        assert_eq!(status, Status::Custom("undefined status".to_string()));
        assert!(!status.is_standard());
        assert_eq!(String::from(status), "undefined status");

        // 대소문자가 다르면 표준 값으로 취급하지 않음
        assert_eq!(Status::from("Success"), Status::Custom("Success".to_string()));
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        assert_eq!(serde_json::to_string(&Status::Fail).unwrap(), r#""fail""#);
        assert_eq!(
            serde_json::to_string(&Status::Custom("pending".to_string())).unwrap(),
            r#""pending""#
        );

        let status: Status = serde_json::from_str(r#""error""#).unwrap();
        assert_eq!(status, Status::Error);

        let status: Status = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, "pending");
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::Unclassified.to_string(), "unclassified");
        assert_eq!(Status::Custom("x".into()).to_string(), "x");
    }
}
