//! 테이블 생성기 모듈 - 세 개의 독립 LUT 아티팩트 생성
//!
//! 세 생성기는 구조적으로 평행하며 서로 의존하지 않는다. 공통 패턴
//! (그리드 샘플링 → Q8.8 양자화 → 리틀엔디언 패킹 → 멱등 기록)은
//! `writer`에 한 번만 구현되어 있다.

pub mod basis_table;
pub mod deriv_table;
pub mod exp_table;
pub mod writer;


pub use basis_table::{generate_basis_lut, BASIS_LUT_NAME};
pub use deriv_table::{generate_deriv_lut, DERIV_LUT_NAME};
pub use exp_table::{exp_lut_index, generate_exp_lut, EXP_LUT_NAME};
pub use writer::LutStatus;
