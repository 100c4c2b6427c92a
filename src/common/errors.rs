use thiserror::Error;

/// `do_final` 阶段可能出现的失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherOperationError {
    #[error("illegal block size: {0}")]
    IllegalBlockSize(String),

    #[error("bad padding")]
    BadPadding,

    #[error("authentication tag mismatch")]
    AuthenticationFailed,

    #[error("cipher is not initialized")]
    NotInitialized,
}

/// 错误分类，对应往返校验的失败种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlgorithmUnavailable,
    InvalidKeySize,
    InvalidKey,
    InvalidParameters,
    CipherOperation,
    RoundTripMismatch,
    Other,
}

/// 加密操作可能遇到的错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),

    #[error("invalid key size: {algorithm} does not support {bits}-bit keys")]
    InvalidKeySize { algorithm: String, bits: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("cipher operation error: {0}")]
    CipherOperation(#[from] CipherOperationError),

    #[error(
        "round-trip assertion failure: decrypted {actual_len} bytes do not match the {expected_len}-byte plaintext"
    )]
    RoundTripMismatch {
        expected_len: usize,
        actual_len: usize,
    },

    #[error("Key generation failed: {0}")]
    KeyGeneration(#[from] rand_core::OsError),

    #[error("Base64 decoding failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] serde_json::Error),
}

impl Error {
    /// 返回该错误所属的分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlgorithmUnavailable(_) => ErrorKind::AlgorithmUnavailable,
            Error::InvalidKeySize { .. } => ErrorKind::InvalidKeySize,
            Error::InvalidKey(_) => ErrorKind::InvalidKey,
            Error::InvalidParameters(_) => ErrorKind::InvalidParameters,
            Error::CipherOperation(_) => ErrorKind::CipherOperation,
            Error::RoundTripMismatch { .. } => ErrorKind::RoundTripMismatch,
            Error::KeyGeneration(_)
            | Error::Base64Decode(_)
            | Error::Io(_)
            | Error::Configuration(_) => ErrorKind::Other,
        }
    }
}
