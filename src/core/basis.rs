//! 큐빅 균일 B-스플라인 기저 함수와 샘플링 그리드
//!
//! 네 기저 함수 B0..B3는 [0,1]에서 partition of unity를 만족하고
//! (B0+B1+B2+B3 = 1), 도함수 합은 항등적으로 0이다.

/// 테이블 샘플 수 (고정, 설정 불가)
pub const TABLE_SIZE: usize = 256;

/// 기저/도함수 테이블의 그리드: t_i = i/255, [0, 1]
pub fn basis_grid_point(i: usize) -> f64 {
    i as f64 / 255.0
}

/// 지수 테이블의 그리드: x_i = -i/64, [0, -3.984375]
pub fn exp_grid_point(i: usize) -> f64 {
    -(i as f64) / 64.0
}

pub fn b0(t: f64) -> f64 {
    (1.0 - t).powi(3) / 6.0
}

pub fn b1(t: f64) -> f64 {
    (3.0 * t.powi(3) - 6.0 * t.powi(2) + 4.0) / 6.0
}

pub fn b2(t: f64) -> f64 {
    (-3.0 * t.powi(3) + 3.0 * t.powi(2) + 3.0 * t + 1.0) / 6.0
}

pub fn b3(t: f64) -> f64 {
    t.powi(3) / 6.0
}

/// B0의 해석적 도함수
pub fn db0(t: f64) -> f64 {
    -0.5 * (1.0 - t).powi(2)
}

pub fn db1(t: f64) -> f64 {
    0.5 * (3.0 * t * t - 4.0 * t)
}

pub fn db2(t: f64) -> f64 {
    0.5 * (-3.0 * t * t + 2.0 * t + 1.0)
}

pub fn db3(t: f64) -> f64 {
    0.5 * t * t
}
