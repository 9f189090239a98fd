//! # HTTP Handler Integration Module
//!
//! actix-web 핸들러에서 엔벨로프를 직접 응답으로 사용할 수 있게 하는 어댑터 모듈입니다.
//! 엔벨로프 생성과 직렬화 위에 얹힌 얇은 계층이며, 전송이나 콘텐츠 협상은 다루지 않습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────┐
//! │    Handlers     │ ← Envelope<T>를 반환
//! └─────────────────┘
//!          │ Responder
//!          ▼
//! ┌─────────────────┐
//! │      codec      │ ← JSON 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HttpResponse   │ ← 상태 코드 + application/json 본문
//! └─────────────────┘
//! ```
//!
//! `EnvelopeError`도 `ResponseError`를 구현하므로,
//! 핸들러에서 `?`로 코덱 에러를 전파하면 실패 엔벨로프 응답으로 변환됩니다.
//!
//! ```rust,ignore
//! use actix_web::{post, web};
//! use response_envelope::{codec, domain::Envelope, errors::EnvelopeError};
//!
//! #[post("/relay")]
//! pub async fn relay(body: web::Bytes) -> Result<Envelope, EnvelopeError> {
//!     let upstream = codec::from_bytes(&body)?;
//!     Ok(Envelope::success(upstream.data))
//! }
//! ```

pub mod responder;
