//! DERIV256.LUT 생성기
//!
//! BASIS256.LUT와 동일한 그리드/레이아웃, 값만 해석적 도함수 dB0..dB3.

use std::path::Path;

use anyhow::Result;

use super::writer::{write_table, LutStatus};
use crate::core::basis::{basis_grid_point, db0, db1, db2, db3};
use crate::core::quant::QuantMode;

pub const DERIV_LUT_NAME: &str = "DERIV256.LUT";

/// B-스플라인 도함수 테이블 생성
pub fn generate_deriv_lut(dir: &Path) -> Result<LutStatus> {
    write_table(dir, DERIV_LUT_NAME, QuantMode::Signed, |i| {
        let t = basis_grid_point(i);
        [db0(t), db1(t), db2(t), db3(t)]
    })
}
