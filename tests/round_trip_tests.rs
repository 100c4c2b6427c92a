//!
//! 往返校验集成测试
//!
//! 覆盖各算法、模式与参数组合下 生成密钥 -> 加密 -> 解密 -> 比较 的完整流程，
//! 以及每一类失败如何报告给调用方。
//!

mod common;

use cipher_roundtrip::prelude::*;

fn iv(len: usize) -> Vec<u8> {
    (0..len as u8).collect()
}

// === 成功路径 ===

#[test]
fn test_aes_cbc_with_iv() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC", 128);
    let parameters = AlgorithmParameters::from_iv("AES", iv(16));
    assert!(checker.test(&parameters).is_ok());
}

#[test]
fn test_des_default_transformation_without_parameters() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::new("DES", 56);
    assert_eq!(checker.transformation(), "DES");
    assert!(checker.test(&AlgorithmParameters::empty("DES")).is_ok());
}

#[test]
fn test_aes_all_key_sizes_cbc() {
    common::init_tracing();
    let parameters = AlgorithmParameters::from_iv("AES", iv(16));
    for bits in [128, 192, 256] {
        let checker =
            SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC/PKCS5Padding", bits);
        checker.test(&parameters).unwrap();
    }
}

#[test]
fn test_desede_cbc() {
    common::init_tracing();
    let parameters = AlgorithmParameters::from_iv("DESede", iv(8));
    for bits in [112, 168] {
        let checker = SymmetricParameterRoundTripChecker::with_block_mode("DESede", "CBC", bits);
        checker.test(&parameters).unwrap();
    }
}

#[test]
fn test_aes_modes_paddings_and_key_sizes() {
    common::init_tracing();
    for bits in [128, 192, 256] {
        for mode in ["ECB", "CBC"] {
            for padding in ["PKCS5Padding", "NoPadding"] {
                let block_mode = format!("{}/{}", mode, padding);
                let parameters = match mode {
                    "CBC" => AlgorithmParameters::from_iv("AES", iv(16)),
                    _ => AlgorithmParameters::empty("AES"),
                };
                let checker =
                    SymmetricParameterRoundTripChecker::with_block_mode("AES", &block_mode, bits);
                checker
                    .test(&parameters)
                    .unwrap_or_else(|e| panic!("AES/{} {} bits: {}", block_mode, bits, e));
            }
        }
    }
}

#[test]
fn test_des_family_modes_and_key_sizes() {
    common::init_tracing();
    let cases = [("DES", 56), ("DES", 64), ("DESede", 112), ("DESede", 168)];
    let block_modes = [
        None,
        Some("ECB"),
        Some("ECB/NoPadding"),
        Some("CBC"),
        Some("CBC/NoPadding"),
    ];
    for (algorithm, bits) in cases {
        for block_mode in block_modes {
            let (checker, parameters) = match block_mode {
                None => (
                    SymmetricParameterRoundTripChecker::new(algorithm, bits),
                    AlgorithmParameters::empty(algorithm),
                ),
                Some(mode) => {
                    let parameters = if mode.starts_with("CBC") {
                        AlgorithmParameters::from_iv(algorithm, iv(8))
                    } else {
                        AlgorithmParameters::empty(algorithm)
                    };
                    (
                        SymmetricParameterRoundTripChecker::with_block_mode(algorithm, mode, bits),
                        parameters,
                    )
                }
            };
            checker.test(&parameters).unwrap_or_else(|e| {
                panic!("{} {} bits: {}", checker.transformation(), bits, e)
            });
        }
    }
}

#[test]
fn test_aes_ecb_no_padding_on_block_aligned_plaintext() {
    common::init_tracing();
    // 固定明文恰好 32 字节，NoPadding 也能通过
    assert_eq!(PLAIN_DATA.len() % 16, 0);
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "ECB/NoPadding", 128);
    checker.test(&AlgorithmParameters::empty("AES")).unwrap();
}

#[test]
fn test_aes_gcm() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "GCM/NoPadding", 256);
    checker
        .test(&AlgorithmParameters::gcm("AES", 128, iv(12)))
        .unwrap();
    // 只给出 IV 时使用 128 位标签
    checker
        .test(&AlgorithmParameters::from_iv("AES", iv(12)))
        .unwrap();
}

#[test]
fn test_chacha20_poly1305() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::new("ChaCha20", 256);
    checker
        .test(&AlgorithmParameters::from_iv("ChaCha20", iv(12)))
        .unwrap();
}

#[test]
fn test_alias_algorithm_name() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("TripleDES", "CBC", 168);
    checker
        .test(&AlgorithmParameters::from_iv("DESede", iv(8)))
        .unwrap();
}

#[test]
fn test_repeated_checks_are_independent() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC", 128);
    let parameters = AlgorithmParameters::from_iv("AES", iv(16));
    for _ in 0..5 {
        checker.test(&parameters).unwrap();
    }
}

#[test]
fn test_checker_shared_across_threads() {
    common::init_tracing();
    let checker = std::sync::Arc::new(SymmetricParameterRoundTripChecker::with_block_mode(
        "AES", "CBC", 256,
    ));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let checker = std::sync::Arc::clone(&checker);
            std::thread::spawn(move || {
                checker.test(&AlgorithmParameters::from_iv("AES", iv(16)))
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }
}

// === 失败路径 ===

#[test]
fn test_unsupported_key_size() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC", 999);
    let result = checker.test(&AlgorithmParameters::from_iv("AES", iv(16)));
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKeySize);
    assert!(matches!(err, Error::InvalidKeySize { bits: 999, .. }));
}

#[test]
fn test_unknown_algorithm() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::new("Blowfish", 128);
    let err = checker
        .test(&AlgorithmParameters::empty("Blowfish"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlgorithmUnavailable);
}

#[test]
fn test_unknown_block_mode() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "XTS", 128);
    let err = checker.test(&AlgorithmParameters::empty("AES")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlgorithmUnavailable);
}

#[test]
fn test_mode_not_offered_by_algorithm() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("DES", "GCM", 56);
    let err = checker.test(&AlgorithmParameters::empty("DES")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlgorithmUnavailable);
}

#[test]
fn test_wrong_iv_length() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC", 128);
    let err = checker
        .test(&AlgorithmParameters::from_iv("AES", iv(8)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_cbc_without_iv_fails_on_decrypt() {
    common::init_tracing();
    // 加密时会随机生成 IV，但解密时同一组空参数无法还原它
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC", 128);
    let err = checker.test(&AlgorithmParameters::empty("AES")).unwrap_err();
    assert!(matches!(err, Error::InvalidParameters(m) if m.contains("requires an IV")));
}

#[test]
fn test_ecb_with_iv_is_rejected() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::new("DES", 56);
    let err = checker
        .test(&AlgorithmParameters::from_iv("DES", iv(8)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_gcm_with_short_tag_is_rejected() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "GCM", 128);
    let err = checker
        .test(&AlgorithmParameters::gcm("AES", 96, iv(12)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_malformed_transformation() {
    common::init_tracing();
    let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC//", 128);
    let err = checker.test(&AlgorithmParameters::empty("AES")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlgorithmUnavailable);
}
