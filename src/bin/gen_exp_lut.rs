//! EXP256.LUT 생성 엔트리 포인트 (인자 없음, 현재 디렉토리에 기록)

use std::path::Path;

use anyhow::Result;
use spline_lut::generate_exp_lut;

fn main() -> Result<()> {
    env_logger::init();
    generate_exp_lut(Path::new("."))?;
    Ok(())
}
