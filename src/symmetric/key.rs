//! 对称密钥
use crate::common::errors::Error;
use base64::{Engine, engine::general_purpose};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 带算法标签的对称密钥，离开作用域时自动擦除
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    #[zeroize(skip)]
    algorithm: String,
    bytes: Vec<u8>,
}

impl SecretKey {
    /// 用原始字节构造密钥，不做长度校验（由 `Cipher::init` 负责）
    pub fn from_bytes(algorithm: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm: algorithm.into(),
            bytes: bytes.into(),
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// 原始密钥字节
    pub fn encoded(&self) -> &[u8] {
        &self.bytes
    }

    /// 密钥长度（比特）
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// 导出密钥为 Base64 字符串
    pub fn export_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// 从 Base64 字符串导入密钥
    pub fn import_base64(algorithm: impl Into<String>, encoded: &str) -> Result<Self, Error> {
        let bytes = general_purpose::STANDARD.decode(encoded)?;
        Ok(Self::from_bytes(algorithm, bytes))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &self.bit_len())
            .finish_non_exhaustive()
    }
}
