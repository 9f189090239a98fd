//! 엔벨로프 코덱에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//! 엔벨로프 생성 함수는 실패하지 않으므로, 에러는 직렬화/역직렬화에서만 발생합니다.
//!
//! ## 사용 예제
//!
//! ```rust
//! use response_envelope::codec;
//! use response_envelope::errors::EnvelopeError;
//!
//! match codec::from_str("{not json") {
//!     Err(EnvelopeError::ParseError(e)) => println!("잘못된 입력: {}", e),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | EnvelopeError | HTTP Status | 응답 엔벨로프 status |
//! |---------------|-------------|----------------------|
//! | `ParseError` | 400 Bad Request | `error` |
//! | `SerializationError` | 500 Internal Server Error | `fail` |

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::codec;
use crate::domain::{Envelope, ErrorDetail};

/// 엔벨로프 직렬화/역직렬화 에러 타입
///
/// 모든 연산은 완전히 성공하거나 아래 두 종류 중 하나로 원자적으로 실패합니다.
/// 내부에서 재시도하거나 복구하지 않고 호출자에게 그대로 전달합니다.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// 페이로드나 엔벨로프를 와이어 형식으로 변환할 수 없음
    ///
    /// # 발생 시나리오
    /// - 문자열이 아닌 키를 가진 맵
    /// - `Serialize` 구현이 에러를 반환하는 값
    #[error("Serialization error: {0}")]
    SerializationError(#[source] serde_json::Error),

    /// 입력이 유효한 JSON이 아니거나 엔벨로프 구조와 맞지 않음
    ///
    /// # 발생 시나리오
    /// - JSON 문법 오류
    /// - `code`가 정수가 아니거나 `status`가 문자열이 아닌 경우
    /// - 필수 필드(`code`, `status`) 누락
    /// - 페이로드가 요청한 타입과 구조가 다른 경우
    #[error("Parse error: {0}")]
    ParseError(#[source] serde_json::Error),
}

impl EnvelopeError {
    /// 에러를 설명하는 실패 엔벨로프를 생성합니다.
    ///
    /// 파싱 에러는 클라이언트 오류(400, `error`),
    /// 직렬화 에러는 서버 실패(500, `fail`)로 변환됩니다.
    pub fn to_envelope(&self) -> Envelope<ErrorDetail> {
        match self {
            EnvelopeError::ParseError(_) => {
                Envelope::client_error_from("요청 본문을 해석할 수 없습니다", self)
            }
            EnvelopeError::SerializationError(_) => {
                Envelope::server_error_from("응답을 직렬화할 수 없습니다", self)
            }
        }
    }
}

impl ResponseError for EnvelopeError {
    fn status_code(&self) -> StatusCode {
        match self {
            EnvelopeError::ParseError(_) => StatusCode::BAD_REQUEST,
            EnvelopeError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 에러 정보를 담은 엔벨로프를 JSON 본문으로 사용합니다.
    fn error_response(&self) -> HttpResponse {
        match codec::to_bytes(&self.to_envelope()) {
            Ok(body) => HttpResponse::build(self.status_code())
                .content_type(ContentType::json())
                .body(body),
            Err(e) => {
                error!("에러 엔벨로프 직렬화 실패: {}", e);
                HttpResponse::build(self.status_code()).finish()
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
