//! EXP256.LUT 생성기
//!
//! 소프트맥스 정규화용 지수 근사 테이블. 인자는 항상 비양수이므로
//! (러닝 맥스를 뺀 뒤 사용) x_i = -i/64 그리드에서 exp(x)를 샘플링한다.
//! 256개 샘플 × 1값, 부호 없는 Q8.8, 총 512바이트.

use std::path::Path;

use anyhow::Result;

use super::writer::{write_table, LutStatus};
use crate::core::basis::exp_grid_point;
use crate::core::quant::QuantMode;

pub const EXP_LUT_NAME: &str = "EXP256.LUT";

/// 지수 근사 테이블 생성
///
/// exp(x)는 이 도메인에서 (0, 1] 범위이므로 양자화 결과는 최대 256이지만
/// 부호 없는 클램핑 규칙은 그대로 적용된다.
pub fn generate_exp_lut(dir: &Path) -> Result<LutStatus> {
    write_table(dir, EXP_LUT_NAME, QuantMode::Unsigned, |i| {
        [exp_grid_point(i).exp()]
    })
}

/// 소비자 측 인덱스 공식 (안정 인터페이스, 비트 단위 호환 유지 필수)
///
/// Q8.8 형식의 비양수 인자 x에 대해 `min(255, (-x) >> 2)`.
/// 테이블 해상도(실수 x 기준 1/64)가 Q8.8 입력 해상도(1/256)보다 거칠기
/// 때문에 크기의 하위 2비트를 시프트로 버린다. 정확도-크기 트레이드오프.
pub fn exp_lut_index(x_q88: i16) -> usize {
    debug_assert!(x_q88 <= 0, "지수 테이블 인자는 비양수여야 함");
    let magnitude = (-(x_q88 as i32)).max(0);
    (magnitude >> 2).min(255) as usize
}
