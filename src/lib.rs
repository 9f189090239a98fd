//! 응답 엔벨로프 (Response Envelope)
//!
//! API 페이로드를 일관된 형태로 감싸는 규약 기반 응답 엔벨로프 라이브러리입니다.
//! 성공이든 실패든 항상 같은 구조(`code`, `status`, `message`, `data`)를 반환하므로,
//! API 소비자는 코드를 직접 해석하지 않고 `status` 필드 하나로 분기할 수 있습니다.
//!
//! # Features
//!
//! - **엔벨로프 생성**: 상태 코드 범위에 따른 자동 분류, 수동 생성, 성공/실패 단축 함수
//! - **JSON 코덱**: 바이트/문자열 직렬화 및 역직렬화, 빈 메시지 필드 생략
//! - **강타입 페이로드**: 제네릭 `Envelope<T>`, 기본값은 `serde_json::Value`
//! - **actix-web 통합**: `Envelope<T>`를 핸들러 반환값으로 사용 (`Responder`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    handlers     │ ← actix-web Responder 어댑터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      codec      │ ← JSON 직렬화/역직렬화 (config로 출력 형식 설정)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     domain      │ ← Envelope, Status, ErrorDetail
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use response_envelope::codec;
//! use response_envelope::domain::{Envelope, Status};
//!
//! let envelope = Envelope::wrap(404, serde_json::json!({"id": 7}), "user not found");
//! assert_eq!(envelope.status, Status::Error);
//!
//! let json = codec::to_string(&envelope)?;
//! let decoded = codec::from_str(&json)?;
//! assert_eq!(decoded, envelope);
//! # Ok::<(), response_envelope::errors::EnvelopeError>(())
//! ```

pub mod codec;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod utils;

pub use domain::{Envelope, ErrorDetail, Status};
pub use errors::{EnvelopeError, EnvelopeResult};
