//! # 응답 엔벨로프 (Response Envelope)
//!
//! API 응답을 일관된 형태로 감싸는 값 객체입니다.
//! 성공/실패 여부와 관계없이 항상 동일한 구조를 반환하므로,
//! 클라이언트는 `status` 필드 하나로 분기할 수 있습니다.
//!
//! ## 와이어 형식
//!
//! ```json
//! {
//!   "code": 200,
//!   "status": "success",
//!   "message": "선택적 메시지 (비어 있으면 생략)",
//!   "data": ["임의의", "페이로드"]
//! }
//! ```
//!
//! ## 생성 방법
//!
//! | 함수 | code | status | 용도 |
//! |------|------|--------|------|
//! | [`Envelope::wrap`] | 지정 | 코드로 자동 분류 | 일반 |
//! | [`Envelope::wrap_manually`] | 지정 | 지정 (검증 없음) | 비표준 상태 |
//! | [`Envelope::success`] | 200 | `success` | 정상 응답 |
//! | [`Envelope::client_error`] | 400 | `error` | 잘못된 요청 |
//! | [`Envelope::server_error`] | 500 | `fail` | 서버 측 실패 |
//!
//! ## 사용 예제
//!
//! ```rust
//! use response_envelope::domain::{Envelope, Status};
//!
//! let ok = Envelope::success(vec!["test", "data"]);
//! assert_eq!(ok.code, 200);
//! assert!(ok.is_success());
//!
//! let not_found = Envelope::wrap(404, (), "user not found");
//! assert_eq!(not_found.status, Status::Error);
//! ```

use std::error::Error as StdError;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error_detail::ErrorDetail;
use crate::domain::status::Status;
use crate::errors::{EnvelopeError, EnvelopeResult};
use crate::utils::string_utils::deserialize_nullable_string;

/// 응답 엔벨로프
///
/// 페이로드 타입 `T`의 기본값은 [`serde_json::Value`]로,
/// 정적 타입을 알 수 없는 페이로드를 일반 구조화 값으로 담습니다.
/// 호출 측에서 `T`를 지정하면 강타입 페이로드를 사용할 수 있습니다.
///
/// 필드 순서(`code`, `status`, `message`, `data`)가 직렬화 순서입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T = Value> {
    /// HTTP 스타일 상태 코드 (검증하지 않음)
    pub code: i64,

    /// 상태 분류
    pub status: Status,

    /// 사람이 읽을 수 있는 메시지. 비어 있으면 직렬화에서 생략됩니다.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub message: String,

    /// 페이로드. 누락된 경우 `T::default()`로 복원됩니다.
    #[serde(default)]
    pub data: T,
}

impl<T> Envelope<T> {
    /// 상태 코드를 범위에 따라 분류하여 엔벨로프를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `code` - HTTP 스타일 상태 코드 (어떤 정수든 허용)
    /// * `data` - 페이로드 또는 에러 정보
    /// * `message` - 메시지 (빈 문자열 가능)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use response_envelope::domain::{Envelope, Status};
    ///
    /// let envelope = Envelope::wrap(555, vec![1, 2, 3], "a custom message");
    /// assert_eq!(envelope.status, Status::Fail);
    /// ```
    pub fn wrap(code: i64, data: T, message: impl Into<String>) -> Self {
        Self {
            code,
            status: Status::classify(code),
            message: message.into(),
            data,
        }
    }

    /// 어떤 분류 로직도 적용하지 않고 네 필드 그대로 엔벨로프를 생성합니다.
    ///
    /// `status`와 `code` 사이의 일관성은 검사하지 않습니다.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use response_envelope::domain::Envelope;
    ///
    /// let envelope = Envelope::wrap_manually(700, "undefined status", "payload", "");
    /// assert_eq!(envelope.status, "undefined status");
    /// ```
    pub fn wrap_manually(
        code: i64,
        status: impl Into<Status>,
        data: T,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            status: status.into(),
            message: message.into(),
            data,
        }
    }

    /// 성공 응답 (200, `success`, 메시지 없음)
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            status: Status::Success,
            message: String::new(),
            data,
        }
    }

    /// 클라이언트 요청 오류 응답 (400, `error`)
    ///
    /// 클라이언트의 요청이 잘못된 경우에 사용합니다.
    /// 빈 메시지는 직렬화 시 `message` 필드가 생략됩니다.
    pub fn client_error(message: impl Into<String>, error_info: T) -> Self {
        Self {
            code: 400,
            status: Status::Error,
            message: message.into(),
            data: error_info,
        }
    }

    /// 서버 측 실패 응답 (500, `fail`)
    ///
    /// 서버 내부 오류가 발생한 경우에 사용합니다.
    /// 빈 메시지는 직렬화 시 `message` 필드가 생략됩니다.
    pub fn server_error(message: impl Into<String>, error_info: T) -> Self {
        Self {
            code: 500,
            status: Status::Fail,
            message: message.into(),
            data: error_info,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    pub fn is_fail(&self) -> bool {
        self.status == Status::Fail
    }

    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }

    /// code, status, message를 유지한 채 페이로드만 변환합니다.
    pub fn map_data<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            code: self.code,
            status: self.status,
            message: self.message,
            data: f(self.data),
        }
    }
}

impl Envelope<ErrorDetail> {
    /// `std::error::Error`의 원인 체인을 페이로드로 담은 클라이언트 오류 응답
    ///
    /// # Examples
    ///
    /// ```rust
    /// use response_envelope::domain::Envelope;
    ///
    /// let err = "abc".parse::<u32>().unwrap_err();
    /// let envelope = Envelope::client_error_from("The request was faulty", &err);
    /// assert_eq!(envelope.code, 400);
    /// assert_eq!(envelope.data.error, "invalid digit found in string");
    /// ```
    pub fn client_error_from(
        message: impl Into<String>,
        err: &(dyn StdError + 'static),
    ) -> Self {
        Self::client_error(message, ErrorDetail::from_error(err))
    }

    /// `std::error::Error`의 원인 체인을 페이로드로 담은 서버 실패 응답
    pub fn server_error_from(
        message: impl Into<String>,
        err: &(dyn StdError + 'static),
    ) -> Self {
        Self::server_error(message, ErrorDetail::from_error(err))
    }
}

impl Envelope<Value> {
    /// 일반 구조화 값으로 디코딩된 페이로드를 강타입 페이로드로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `EnvelopeError::ParseError` - 페이로드 구조가 `U`와 맞지 않는 경우
    ///
    /// # Examples
    ///
    /// ```rust
    /// use response_envelope::codec;
    ///
    /// let envelope = codec::from_str(r#"{"code":222,"status":"success","data":[1,2,3]}"#).unwrap();
    /// let typed = envelope.into_typed::<Vec<u8>>().unwrap();
    /// assert_eq!(typed.data, vec![1, 2, 3]);
    /// ```
    pub fn into_typed<U: DeserializeOwned>(self) -> EnvelopeResult<Envelope<U>> {
        let data = serde_json::from_value(self.data).map_err(EnvelopeError::ParseError)?;
        Ok(Envelope {
            code: self.code,
            status: self.status,
            message: self.message,
            data,
        })
    }
}
