//! # Domain Module
//!
//! 응답 엔벨로프의 도메인 모델을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! domain/
//! ├── envelope.rs      # Envelope<T> 값 객체와 생성 함수
//! ├── status.rs        # Status 분류 열거형과 상태 문자열 상수
//! └── error_detail.rs  # std::error::Error → 직렬화 가능한 에러 정보
//! ```
//!
//! 모든 생성 함수는 순수 함수이며 공유 상태가 없으므로
//! 여러 스레드에서 동기화 없이 호출할 수 있습니다.

pub mod envelope;
pub mod error_detail;
pub mod status;

pub use envelope::Envelope;
pub use error_detail::ErrorDetail;
pub use status::{Status, STATUS_ERROR, STATUS_FAIL, STATUS_SUCCESS, STATUS_UNCLASSIFIED};
