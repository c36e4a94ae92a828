//! 그리드 샘플 → Q8.8 패킹 → 멱등 파일 기록 공용 루틴

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use byteorder::{LittleEndian, WriteBytesExt};

use crate::core::basis::TABLE_SIZE;
use crate::core::quant::{q88, QuantMode};

/// 생성 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LutStatus {
    /// 아티팩트를 새로 생성함
    Generated,
    /// 아티팩트가 이미 존재하여 아무 작업도 하지 않음 (성공)
    AlreadyExists,
}

/// 256개 그리드 샘플을 양자화해 리틀엔디언 u16 워드로 패킹
///
/// 샘플당 N개 값을 행 순서 그대로 이어 붙인다. 헤더, 패딩 없음.
pub(crate) fn pack_table<const N: usize>(
    mode: QuantMode,
    sample: impl Fn(usize) -> [f64; N],
) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(TABLE_SIZE * N * 2);
    for i in 0..TABLE_SIZE {
        for v in sample(i) {
            buf.write_u16::<LittleEndian>(q88(v, mode))?;
        }
    }
    Ok(buf)
}

/// 멱등 가드가 있는 테이블 기록
///
/// 대상 파일이 이미 있으면 읽거나 수정하지 않고 즉시 성공 반환한다.
/// 파일 존재 확인이 실행 간 유일한 상태이며, 동일 아티팩트를 놓고
/// 동시 실행이 경합하는 경우는 원본과 마찬가지로 잠금 없이 허용한다.
/// I/O 실패는 치명적이고 재시도하지 않는다. 부분 기록된 파일의 정리는
/// 호출자 몫이다 (삭제 후 재생성).
pub(crate) fn write_table<const N: usize>(
    dir: &Path,
    name: &str,
    mode: QuantMode,
    sample: impl Fn(usize) -> [f64; N],
) -> Result<LutStatus> {
    let path = dir.join(name);
    if path.exists() {
        log::info!("{} 이미 존재, 생성 건너뜀", name);
        return Ok(LutStatus::AlreadyExists);
    }

    let bytes = pack_table(mode, sample)?;
    fs::write(&path, &bytes).with_context(|| format!("{} 기록 실패", path.display()))?;

    log::info!("{} 생성 완료 ({} bytes)", name, bytes.len());
    Ok(LutStatus::Generated)
}
