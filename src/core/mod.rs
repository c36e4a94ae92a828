//! # spline_lut 핵심 모듈
//!
//! Q8.8 양자화기, 스플라인/지수 샘플링 법칙, 테이블 생성기로 구성

pub mod basis;
pub mod quant;
pub mod tables;

// 주요 타입들 재수출
pub use basis::*;
pub use quant::*;
pub use tables::*;
