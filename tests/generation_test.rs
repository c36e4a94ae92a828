//! 테이블 생성 통합 테스트 - 멱등성, 결정성, 역양자화 속성 검증

use std::fs;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use tempfile::tempdir;

use spline_lut::{
    basis_grid_point, generate_basis_lut, generate_deriv_lut, generate_exp_lut, q88_to_signed,
    q88_to_unsigned, LutStatus, BASIS_LUT_NAME, DERIV_LUT_NAME, EXP_LUT_NAME, TABLE_SIZE,
};

/// 파일을 u16 워드 배열로 읽기
fn read_words(path: &Path) -> Vec<u16> {
    let bytes = fs::read(path).unwrap();
    assert_eq!(bytes.len() % 2, 0);
    let mut words = vec![0u16; bytes.len() / 2];
    LittleEndian::read_u16_into(&bytes, &mut words);
    words
}

#[test]
fn 멱등성_검증() {
    let dir = tempdir().unwrap();

    // 첫 실행: 생성
    assert_eq!(
        generate_basis_lut(dir.path()).unwrap(),
        LutStatus::Generated
    );
    let path = dir.path().join(BASIS_LUT_NAME);
    let first = fs::read(&path).unwrap();

    // 두 번째 실행: no-op 성공, 바이트 불변
    assert_eq!(
        generate_basis_lut(dir.path()).unwrap(),
        LutStatus::AlreadyExists
    );
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second, "재실행이 아티팩트를 수정함");
}

#[test]
fn 기존_파일_내용_보존_검증() {
    // 생성기는 기존 파일을 읽지도 검증하지도 않는다. 내용이 무엇이든 보존.
    let dir = tempdir().unwrap();
    let path = dir.path().join(EXP_LUT_NAME);
    fs::write(&path, b"sentinel").unwrap();

    assert_eq!(
        generate_exp_lut(dir.path()).unwrap(),
        LutStatus::AlreadyExists
    );
    assert_eq!(fs::read(&path).unwrap(), b"sentinel");
}

#[test]
fn 결정성_검증() {
    // 삭제 후 재생성 시 바이트 단위 동일 출력
    let dir = tempdir().unwrap();

    for (name, generate) in [
        (
            BASIS_LUT_NAME,
            generate_basis_lut as fn(&Path) -> anyhow::Result<LutStatus>,
        ),
        (DERIV_LUT_NAME, generate_deriv_lut),
        (EXP_LUT_NAME, generate_exp_lut),
    ] {
        let path = dir.path().join(name);
        generate(dir.path()).unwrap();
        let first = fs::read(&path).unwrap();

        fs::remove_file(&path).unwrap();
        assert_eq!(generate(dir.path()).unwrap(), LutStatus::Generated);
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second, "{} 재생성 결과가 다름", name);
    }
}

#[test]
fn 기저_테이블_partition_of_unity_검증() {
    let dir = tempdir().unwrap();
    generate_basis_lut(dir.path()).unwrap();
    let words = read_words(&dir.path().join(BASIS_LUT_NAME));
    assert_eq!(words.len(), TABLE_SIZE * 4);

    // 역양자화한 네 기저값의 합은 1, 오차는 양자화 스텝 이내
    for i in 0..TABLE_SIZE {
        let row = &words[i * 4..i * 4 + 4];
        let sum: f64 = row.iter().map(|&w| q88_to_signed(w)).sum();
        assert!(
            (sum - 1.0).abs() <= 1.0 / 256.0,
            "i={} (t={}): 기저 합 {} ≠ 1",
            i,
            basis_grid_point(i),
            sum
        );
    }
}

#[test]
fn 도함수_테이블_합_zero_검증() {
    let dir = tempdir().unwrap();
    generate_deriv_lut(dir.path()).unwrap();
    let words = read_words(&dir.path().join(DERIV_LUT_NAME));
    assert_eq!(words.len(), TABLE_SIZE * 4);

    for i in 0..TABLE_SIZE {
        let row = &words[i * 4..i * 4 + 4];
        let sum: f64 = row.iter().map(|&w| q88_to_signed(w)).sum();
        assert!(
            sum.abs() <= 1.0 / 256.0,
            "i={}: 도함수 합 {} ≠ 0",
            i,
            sum
        );
    }
}

#[test]
fn 지수_테이블_단조성_검증() {
    let dir = tempdir().unwrap();
    generate_exp_lut(dir.path()).unwrap();
    let words = read_words(&dir.path().join(EXP_LUT_NAME));
    assert_eq!(words.len(), TABLE_SIZE);

    // x가 음으로 갈수록 exp(x)는 감소, 테이블 값도 비증가
    for i in 1..TABLE_SIZE {
        assert!(
            q88_to_unsigned(words[i - 1]) >= q88_to_unsigned(words[i]),
            "i={}: 단조성 위반 ({} < {})",
            i,
            words[i - 1],
            words[i]
        );
    }

    // 경계값: exp(0) = 1.0 → 256
    assert_eq!(words[0], 256);
}

#[test]
fn io_실패_전파_검증() {
    // 존재하지 않는 디렉토리에 기록 시도 → 오류 반환 (패닉 없음)
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no_such_dir");
    assert!(generate_basis_lut(&missing).is_err());
}
