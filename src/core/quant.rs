//! Q8.8 고정소수점 양자화 유틸리티

/// Q8.8 스케일 계수 (정수 8비트 + 소수 8비트)
pub const Q88_SCALE: f64 = 256.0;

/// 양자화 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantMode {
    /// [-32768, 32767] 클램핑 후 u16 비트 패턴으로 재해석
    Signed,
    /// [0, 65535] 클램핑
    Unsigned,
}

/// 실수 값을 Q8.8 저장 비트 패턴으로 양자화
///
/// 256을 곱한 뒤 가장 가까운 정수로 반올림한다 (0.5는 0에서 먼 쪽으로,
/// `f64::round` 의미 그대로). 모드별 범위로 클램핑한 정수의 하위 16비트가
/// 저장 값이며, 리틀엔디언 직렬화 대상이다. 순수 함수, 오류 경로 없음.
pub fn q88(x: f64, mode: QuantMode) -> u16 {
    let v = (x * Q88_SCALE).round() as i64;
    match mode {
        QuantMode::Signed => v.clamp(-32768, 32767) as i16 as u16,
        QuantMode::Unsigned => v.clamp(0, 65535) as u16,
    }
}

/// 부호 있는 Q8.8 비트 패턴을 실수로 복원 (검증용)
pub fn q88_to_signed(bits: u16) -> f64 {
    (bits as i16) as f64 / Q88_SCALE
}

/// 부호 없는 Q8.8 비트 패턴을 실수로 복원 (검증용)
pub fn q88_to_unsigned(bits: u16) -> f64 {
    bits as f64 / Q88_SCALE
}
