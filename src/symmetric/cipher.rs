use crate::common::config::ProviderConfig;
use crate::common::errors::{CipherOperationError, Error};
use crate::common::utils::random_bytes;
use crate::symmetric::key::SecretKey;
use crate::symmetric::modes::AEAD_TAG_BITS;
use crate::symmetric::params::{AlgorithmParameters, ParameterSpec};
use crate::symmetric::provider::Provider;
use crate::symmetric::traits::{CipherSpi, OperationMode};
use crate::symmetric::transformation::{BlockMode, Padding, Transformation};
use tracing::{debug, trace};
use zeroize::Zeroizing;

struct CipherState {
    operation: OperationMode,
    key: Zeroizing<Vec<u8>>,
    iv: Option<Vec<u8>>,
}

/// 按变换字符串解析出的加密上下文
///
/// 生命周期：`Provider::cipher` 解析 -> `init` 绑定方向、密钥与参数 -> `do_final`。
/// 同一个实例可以重复 `init`，例如先加密再用同样的密钥和参数解密。
pub struct Cipher {
    transformation: Transformation,
    spi: Box<dyn CipherSpi>,
    config: ProviderConfig,
    state: Option<CipherState>,
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher")
            .field("transformation", &self.transformation.to_string())
            .field("spi", &self.spi)
            .field("operation", &self.state.as_ref().map(|s| s.operation))
            .finish()
    }
}

impl Cipher {
    pub(crate) fn new(
        transformation: Transformation,
        spi: Box<dyn CipherSpi>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            transformation,
            spi,
            config,
            state: None,
        }
    }

    /// 从共享的默认 Provider 解析变换
    pub fn get_instance(transformation: &str) -> Result<Self, Error> {
        Provider::shared().cipher(transformation)
    }

    /// 创建时使用的变换字符串
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    pub fn algorithm(&self) -> &'static str {
        self.spi.algorithm()
    }

    pub fn mode(&self) -> BlockMode {
        self.spi.mode()
    }

    pub fn padding(&self) -> Padding {
        self.spi.padding()
    }

    pub fn block_size(&self) -> usize {
        self.spi.block_size()
    }

    /// 绑定方向、密钥与参数
    ///
    /// 失败时实例回到未初始化状态。
    pub fn init(
        &mut self,
        operation: OperationMode,
        key: &SecretKey,
        parameters: Option<&AlgorithmParameters>,
    ) -> Result<(), Error> {
        self.state = None;
        self.spi.check_key(key.encoded())?;
        let iv = self.resolve_iv(operation, parameters)?;

        debug!(
            transformation = %self.transformation,
            ?operation,
            has_iv = iv.is_some(),
            "cipher initialized"
        );
        self.state = Some(CipherState {
            operation,
            key: Zeroizing::new(key.encoded().to_vec()),
            iv,
        });
        Ok(())
    }

    fn resolve_iv(
        &self,
        operation: OperationMode,
        parameters: Option<&AlgorithmParameters>,
    ) -> Result<Option<Vec<u8>>, Error> {
        let mode = self.spi.mode();
        let spec = parameters.map_or(&ParameterSpec::Empty, AlgorithmParameters::spec);

        let Some(iv_len) = self.spi.iv_len() else {
            return match spec {
                ParameterSpec::Empty => Ok(None),
                _ => Err(Error::InvalidParameters(format!(
                    "{} mode cannot use an IV",
                    mode
                ))),
            };
        };

        let iv = match spec {
            ParameterSpec::Empty => {
                if operation == OperationMode::Encrypt && self.config.generate_missing_iv {
                    trace!(%mode, iv_len, "generating IV");
                    return Ok(Some(random_bytes(iv_len)?));
                }
                return Err(Error::InvalidParameters(format!(
                    "{} mode requires an IV",
                    mode
                )));
            }
            ParameterSpec::Iv(iv) => iv,
            ParameterSpec::Gcm { tag_len_bits, iv } => {
                if mode != BlockMode::Gcm {
                    return Err(Error::InvalidParameters(format!(
                        "GCM parameters cannot be used with {} mode",
                        mode
                    )));
                }
                if *tag_len_bits != AEAD_TAG_BITS {
                    return Err(Error::InvalidParameters(format!(
                        "unsupported GCM tag length: {} bits",
                        tag_len_bits
                    )));
                }
                iv
            }
        };

        if iv.len() != iv_len {
            return Err(Error::InvalidParameters(format!(
                "{} mode expects a {}-byte IV, got {}",
                mode,
                iv_len,
                iv.len()
            )));
        }
        Ok(Some(iv.clone()))
    }

    /// 当前生效的参数；加密时自动生成的 IV 也通过这里取回
    pub fn parameters(&self) -> Option<AlgorithmParameters> {
        let iv = self.iv()?;
        let algorithm = self.spi.algorithm();
        Some(match self.spi.mode() {
            BlockMode::Gcm => AlgorithmParameters::gcm(algorithm, AEAD_TAG_BITS, iv),
            _ => AlgorithmParameters::from_iv(algorithm, iv),
        })
    }

    pub fn iv(&self) -> Option<&[u8]> {
        self.state.as_ref()?.iv.as_deref()
    }

    /// 一次性处理全部输入
    pub fn do_final(&mut self, input: &[u8]) -> Result<Vec<u8>, Error> {
        let state = self
            .state
            .as_ref()
            .ok_or(CipherOperationError::NotInitialized)?;

        let output = match state.operation {
            OperationMode::Encrypt => self.spi.encrypt(&state.key, state.iv.as_deref(), input),
            OperationMode::Decrypt => self.spi.decrypt(&state.key, state.iv.as_deref(), input),
        }?;

        trace!(
            operation = ?state.operation,
            input_len = input.len(),
            output_len = output.len(),
            "do_final"
        );
        Ok(output)
    }
}
