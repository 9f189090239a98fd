//! # 범위 유틸리티
//!
//! 정수 범위 검사와 관련된 공통 유틸리티 함수입니다.

/// 값이 주어진 하한과 상한 사이에 있는지 확인합니다 (양 끝 포함).
///
/// # 인자
/// * `value` - 확인할 값
/// * `lower` - 하한 (포함)
/// * `upper` - 상한 (포함)
///
/// # 반환값
/// * `true` - `lower <= value <= upper`
/// * `false` - 범위 밖인 경우
///
/// # 예제
/// ```rust
/// use response_envelope::utils::range_utils::between;
///
/// assert!(between(100, 100, 399));
/// assert!(between(399, 100, 399));
/// assert!(!between(400, 100, 399));
/// ```
pub fn between(value: i64, lower: i64, upper: i64) -> bool {
    value >= lower && value <= upper
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_inside_range() {
        assert!(between(100, 50, 200));
    }

    #[test]
    fn test_between_is_inclusive_on_both_bounds() {
        assert!(between(100, 100, 101));
        assert!(between(101, 100, 101));
    }

    #[test]
    fn test_between_outside_range() {
        assert!(!between(10, 100, 101));
        assert!(!between(102, 100, 101));
        assert!(!between(-1, 0, 10));
    }
}
