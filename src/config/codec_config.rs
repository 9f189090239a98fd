//! 코덱 출력 형식 설정 모듈

/// JSON 코덱 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// 들여쓰기된 JSON 출력 여부
    ///
    /// 기본값은 `false`(공백 없는 compact 출력)입니다.
    /// pretty 출력도 유효한 JSON이므로 그대로 역직렬화할 수 있습니다.
    pub pretty: bool,
}

impl CodecConfig {
    /// compact 출력 설정을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// pretty 출력 여부를 설정합니다.
    ///
    /// # Arguments
    ///
    /// * `pretty` - `true`이면 들여쓰기된 JSON을 출력
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
