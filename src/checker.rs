//! 对称算法参数的往返校验
//!
//! 对一组给定的算法参数：生成新密钥，加密固定明文，再用同一密钥和参数解密，
//! 最后逐字节比较。任何一步失败都原样返回给调用方，不做重试或恢复。
use crate::common::errors::Error;
use crate::common::utils::constant_time_eq;
use crate::symmetric::params::AlgorithmParameters;
use crate::symmetric::provider::Provider;
use crate::symmetric::traits::{OperationMode, ParametersCheck};
use crate::symmetric::transformation::Transformation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// 往返校验使用的固定明文
pub const PLAIN_DATA: &[u8] = b"some data to encrypt and decrypt";

/// 校验器配置：算法名、可选分组模式（可带填充，如 `CBC/PKCS5Padding`）与密钥长度
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundTripConfig {
    pub algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_mode: Option<String>,
    /// 密钥长度（比特）
    pub key_size: usize,
}

/// 对称算法参数往返校验器
///
/// 构造时不做任何校验；算法名或密钥长度无效只会在 `test` 时报告。
#[derive(Debug, Clone)]
pub struct SymmetricParameterRoundTripChecker {
    config: RoundTripConfig,
    provider: Arc<Provider>,
}

impl SymmetricParameterRoundTripChecker {
    pub fn new(algorithm: impl Into<String>, key_size: usize) -> Self {
        Self::from_config(RoundTripConfig {
            algorithm: algorithm.into(),
            block_mode: None,
            key_size,
        })
    }

    pub fn with_block_mode(
        algorithm: impl Into<String>,
        block_mode: impl Into<String>,
        key_size: usize,
    ) -> Self {
        Self::from_config(RoundTripConfig {
            algorithm: algorithm.into(),
            block_mode: Some(block_mode.into()),
            key_size,
        })
    }

    pub fn from_config(config: RoundTripConfig) -> Self {
        Self {
            config,
            provider: Provider::shared(),
        }
    }

    /// 改用指定的 Provider
    pub fn using_provider(mut self, provider: Arc<Provider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn config(&self) -> &RoundTripConfig {
        &self.config
    }

    /// 变换字符串：没有分组模式时就是算法名本身
    pub fn transformation(&self) -> String {
        Transformation::compose(&self.config.algorithm, self.config.block_mode.as_deref())
    }
}

impl ParametersCheck<AlgorithmParameters> for SymmetricParameterRoundTripChecker {
    fn test(&self, parameters: &AlgorithmParameters) -> Result<(), Error> {
        let mut generator = self.provider.key_generator(&self.config.algorithm)?;
        generator.init(self.config.key_size)?;
        let key = generator.generate_key()?;

        let transformation = self.transformation();
        debug!(
            %transformation,
            key_size = self.config.key_size,
            parameters = parameters.algorithm(),
            "starting round trip"
        );

        let mut cipher = self.provider.cipher(&transformation)?;
        cipher.init(OperationMode::Encrypt, &key, Some(parameters))?;
        let ciphertext = cipher.do_final(PLAIN_DATA)?;

        cipher.init(OperationMode::Decrypt, &key, Some(parameters))?;
        let decrypted = cipher.do_final(&ciphertext)?;

        verify_round_trip(PLAIN_DATA, &decrypted).inspect_err(|_| {
            warn!(%transformation, "decrypted data does not match the plaintext");
        })?;
        debug!(%transformation, ciphertext_len = ciphertext.len(), "round trip succeeded");
        Ok(())
    }
}

/// 逐字节比较解密结果与原文
pub fn verify_round_trip(expected: &[u8], actual: &[u8]) -> Result<(), Error> {
    if constant_time_eq(expected, actual) {
        Ok(())
    } else {
        Err(Error::RoundTripMismatch {
            expected_len: expected.len(),
            actual_len: actual.len(),
        })
    }
}
