//! 算法参数
//!
//! 往返校验本身不解读参数内容，只把它原样交给 `Cipher::init`。

/// 参数的具体内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterSpec {
    /// 无参数，只适用于 ECB；加密时 CBC/GCM 可由 Provider 自动生成 IV
    Empty,
    /// 初始化向量（CBC）或 nonce（GCM、ChaCha20-Poly1305）
    Iv(Vec<u8>),
    /// GCM 参数：标签长度（比特）与 IV
    Gcm { tag_len_bits: usize, iv: Vec<u8> },
}

/// 某个算法族的参数值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmParameters {
    algorithm: String,
    spec: ParameterSpec,
}

impl AlgorithmParameters {
    pub fn new(algorithm: impl Into<String>, spec: ParameterSpec) -> Self {
        Self {
            algorithm: algorithm.into(),
            spec,
        }
    }

    pub fn empty(algorithm: impl Into<String>) -> Self {
        Self::new(algorithm, ParameterSpec::Empty)
    }

    pub fn from_iv(algorithm: impl Into<String>, iv: impl Into<Vec<u8>>) -> Self {
        Self::new(algorithm, ParameterSpec::Iv(iv.into()))
    }

    pub fn gcm(algorithm: impl Into<String>, tag_len_bits: usize, iv: impl Into<Vec<u8>>) -> Self {
        Self::new(
            algorithm,
            ParameterSpec::Gcm {
                tag_len_bits,
                iv: iv.into(),
            },
        )
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn spec(&self) -> &ParameterSpec {
        &self.spec
    }

    /// 参数中携带的 IV/nonce
    pub fn iv(&self) -> Option<&[u8]> {
        match &self.spec {
            ParameterSpec::Empty => None,
            ParameterSpec::Iv(iv) | ParameterSpec::Gcm { iv, .. } => Some(iv),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.spec, ParameterSpec::Empty)
    }
}
