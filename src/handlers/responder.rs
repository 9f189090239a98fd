//! # Envelope HTTP Responder
//!
//! 핸들러가 [`Envelope`]를 그대로 반환할 수 있도록 `actix_web::Responder`를 구현합니다.
//!
//! ## 동작
//!
//! - HTTP 상태 코드: 엔벨로프의 `code`가 유효한 HTTP 상태(100-999)이면 그대로 사용, 아니면 500.
//!   `unclassified`로 분류되는 600-999 코드(예: 700)도 그대로 HTTP 상태로 전송됩니다.
//! - 본문: compact JSON, `Content-Type: application/json`
//! - 페이로드 직렬화 실패 시: 500과 함께 에러 정보를 담은 `fail` 엔벨로프
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use actix_web::{get, web};
//! use response_envelope::domain::Envelope;
//!
//! #[get("/users/{id}")]
//! pub async fn get_user(user_id: web::Path<String>) -> Envelope<UserResponse> {
//!     let user = UserResponse { id: user_id.into_inner() };
//!     Envelope::success(user)
//! }
//! ```

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use log::error;
use serde::Serialize;

use crate::codec;
use crate::domain::Envelope;

impl<T> Envelope<T> {
    /// 엔벨로프의 `code`에 대응하는 HTTP 상태 코드를 반환합니다.
    ///
    /// HTTP 상태로 표현할 수 없는 코드(예: 음수, 1000 이상)는 500으로 대체됩니다.
    /// 600-999는 분류상 `unclassified`이지만 유효한 HTTP 상태이므로 그대로 반환됩니다.
    /// 본문의 `code` 필드는 원래 값을 그대로 유지합니다.
    pub fn http_status(&self) -> StatusCode {
        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> Responder for Envelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match codec::to_bytes(&self) {
            Ok(body) => HttpResponse::build(self.http_status())
                .content_type(ContentType::json())
                .body(body),
            Err(e) => {
                error!("응답 엔벨로프 직렬화 실패 (code={}): {}", self.code, e);
                e.error_response()
            }
        }
    }
}
