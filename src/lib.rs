//! spline_lut - 고정소수점 스플라인 룩업 테이블 생성기
//!
//! 큐빅 B-스플라인 기저 함수, 해당 도함수, 제한된 지수 근사를
//! Q8.8 고정소수점으로 양자화해 바이너리 테이블로 출력하는 라이브러리.
//! 소비자 런타임은 부동소수점 하드웨어 없이 정수 룩업만으로 평가를 수행한다.

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 양자화
    q88, q88_to_signed, q88_to_unsigned, QuantMode,
    // 샘플링 법칙
    b0, b1, b2, b3, db0, db1, db2, db3, basis_grid_point, exp_grid_point, TABLE_SIZE,
    // 테이블 생성기
    exp_lut_index, generate_basis_lut, generate_deriv_lut, generate_exp_lut, LutStatus,
    BASIS_LUT_NAME, DERIV_LUT_NAME, EXP_LUT_NAME,
};
