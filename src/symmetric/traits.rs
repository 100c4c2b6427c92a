use crate::common::errors::Error;
use crate::symmetric::transformation::{BlockMode, Padding};
use std::fmt::Debug;

/// 加密/解密方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    Encrypt,
    Decrypt,
}

/// 对称密钥生成器的公共特征
pub trait KeyGeneratorSpi: Debug + Send + Sync {
    /// 规范算法名
    fn algorithm(&self) -> &'static str;

    /// 未调用 `init` 时使用的密钥长度（比特）
    fn default_key_size(&self) -> usize;

    /// 校验密钥长度，返回需要生成的字节数
    fn key_bytes(&self, bits: usize) -> Result<usize, Error>;

    /// 对随机字节做算法相关的整理（例如 DES 奇偶校验位）
    fn finish_key(&self, _bits: usize, _bytes: &mut [u8]) {}
}

/// 已确定模式与填充的对称加密实现
///
/// 实现本身无状态；密钥与 IV 由 `Cipher` 在 `init` 时解析后逐次传入。
pub trait CipherSpi: Debug + Send + Sync {
    /// 规范算法名
    fn algorithm(&self) -> &'static str;

    fn mode(&self) -> BlockMode;

    fn padding(&self) -> Padding;

    /// 分组长度（字节），流式 AEAD 为 0
    fn block_size(&self) -> usize;

    /// 模式需要的 IV/nonce 长度，ECB 为 `None`
    fn iv_len(&self) -> Option<usize>;

    /// 校验密钥字节长度
    fn check_key(&self, key: &[u8]) -> Result<(), Error>;

    fn encrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error>;

    fn decrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error>;
}

/// 以某种参数类型为输入的校验
pub trait ParametersCheck<T: ?Sized> {
    /// 对给定参数执行一次完整校验，失败时返回对应错误
    fn test(&self, parameters: &T) -> Result<(), Error>;
}
