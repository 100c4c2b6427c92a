//!
//! Provider 与配置的集成测试
//!

mod common;

use cipher_roundtrip::prelude::*;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_config_from_file() {
    common::init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "default_mode": "CBC", "default_padding": "PKCS5Padding" }}"#
    )
    .unwrap();

    let config = ProviderConfig::from_file(file.path()).unwrap();
    assert_eq!(config.default_mode, BlockMode::Cbc);
    assert!(config.generate_missing_iv);

    let provider = Provider::with_config(config);
    let cipher = provider.cipher("AES").unwrap();
    assert_eq!(cipher.mode(), BlockMode::Cbc);
    assert_eq!(cipher.padding(), Padding::Pkcs5);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ProviderConfig::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let result = ProviderConfig::from_file(file.path());
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_checker_with_custom_provider() {
    common::init_tracing();
    // 默认模式改为 CBC 后，不带模式的 "AES" 需要 IV
    let provider = Arc::new(Provider::with_config(ProviderConfig {
        default_mode: BlockMode::Cbc,
        ..Default::default()
    }));
    let checker = SymmetricParameterRoundTripChecker::new("AES", 128).using_provider(provider);

    checker
        .test(&AlgorithmParameters::from_iv("AES", vec![7u8; 16]))
        .unwrap();
    let err = checker.test(&AlgorithmParameters::empty("AES")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_algorithms_listing() {
    let provider = Provider::shared();
    assert_eq!(provider.algorithms(), &["AES", "ChaCha20", "DES", "DESede"]);
}

#[test]
fn test_aliases() {
    let provider = Provider::shared();
    assert_eq!(provider.canonical_name("3DES"), Some("DESede"));
    assert_eq!(provider.canonical_name("chacha20-poly1305"), Some("ChaCha20"));

    let generator = KeyGenerator::get_instance("tripledes").unwrap();
    assert_eq!(generator.algorithm(), "DESede");
    assert_eq!(generator.key_size(), 168);
}

#[test]
fn test_key_export_import_drives_cipher() {
    let mut generator = KeyGenerator::get_instance("AES").unwrap();
    generator.init(192).unwrap();
    let key = generator.generate_key().unwrap();

    let restored = SecretKey::import_base64("AES", &key.export_base64()).unwrap();
    assert_eq!(restored, key);
    assert_eq!(restored.bit_len(), 192);

    let parameters = AlgorithmParameters::from_iv("AES", vec![0u8; 16]);
    let mut cipher = Cipher::get_instance("AES/CBC/PKCS5Padding").unwrap();
    cipher
        .init(OperationMode::Encrypt, &key, Some(&parameters))
        .unwrap();
    let ciphertext = cipher.do_final(PLAIN_DATA).unwrap();

    cipher
        .init(OperationMode::Decrypt, &restored, Some(&parameters))
        .unwrap();
    assert_eq!(cipher.do_final(&ciphertext).unwrap(), PLAIN_DATA);
}

#[test]
fn test_wrong_key_is_a_cipher_operation_error() {
    let generator = KeyGenerator::get_instance("AES").unwrap();
    let key = generator.generate_key().unwrap();
    let other = generator.generate_key().unwrap();
    let parameters = AlgorithmParameters::from_iv("AES", vec![0u8; 12]);

    let mut cipher = Cipher::get_instance("AES/GCM/NoPadding").unwrap();
    cipher
        .init(OperationMode::Encrypt, &key, Some(&parameters))
        .unwrap();
    let ciphertext = cipher.do_final(PLAIN_DATA).unwrap();

    cipher
        .init(OperationMode::Decrypt, &other, Some(&parameters))
        .unwrap();
    assert!(matches!(
        cipher.do_final(&ciphertext),
        Err(Error::CipherOperation(CipherOperationError::AuthenticationFailed))
    ));
}
