//! BASIS256.LUT 생성기
//!
//! 256개 샘플 × (B0,B1,B2,B3), 부호 있는 Q8.8, 총 2048바이트.

use std::path::Path;

use anyhow::Result;

use super::writer::{write_table, LutStatus};
use crate::core::basis::{b0, b1, b2, b3, basis_grid_point};
use crate::core::quant::QuantMode;

pub const BASIS_LUT_NAME: &str = "BASIS256.LUT";

/// 큐빅 B-스플라인 기저 테이블 생성
///
/// t_i = i/255 그리드에서 네 기저 함수를 평가해 샘플 우선 순서로 기록한다.
/// 파일이 이미 있으면 no-op 성공.
pub fn generate_basis_lut(dir: &Path) -> Result<LutStatus> {
    write_table(dir, BASIS_LUT_NAME, QuantMode::Signed, |i| {
        let t = basis_grid_point(i);
        [b0(t), b1(t), b2(t), b3(t)]
    })
}
