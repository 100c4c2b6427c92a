use crate::common::errors::Error;
use crate::common::utils::random_bytes;
use crate::symmetric::key::SecretKey;
use crate::symmetric::provider::Provider;
use crate::symmetric::traits::KeyGeneratorSpi;
use tracing::trace;
use zeroize::Zeroizing;

/// 对称密钥生成器
///
/// 通过 `Provider::key_generator` 或 `KeyGenerator::get_instance` 获得。
/// 密钥长度在 `init` 时立即校验，每次 `generate_key` 都从系统随机源取新密钥。
#[derive(Debug)]
pub struct KeyGenerator {
    spi: &'static dyn KeyGeneratorSpi,
    key_size: usize,
}

impl KeyGenerator {
    pub(crate) fn new(spi: &'static dyn KeyGeneratorSpi) -> Self {
        Self {
            spi,
            key_size: spi.default_key_size(),
        }
    }

    /// 从共享的默认 Provider 获取生成器
    pub fn get_instance(algorithm: &str) -> Result<Self, Error> {
        Provider::shared().key_generator(algorithm)
    }

    pub fn algorithm(&self) -> &'static str {
        self.spi.algorithm()
    }

    /// 当前密钥长度（比特）
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// 设置密钥长度（比特）；不支持的长度返回 `Error::InvalidKeySize`
    pub fn init(&mut self, key_size: usize) -> Result<(), Error> {
        self.spi.key_bytes(key_size)?;
        self.key_size = key_size;
        Ok(())
    }

    pub fn generate_key(&self) -> Result<SecretKey, Error> {
        let len = self.spi.key_bytes(self.key_size)?;
        let mut bytes = Zeroizing::new(random_bytes(len)?);
        self.spi.finish_key(self.key_size, &mut bytes);
        trace!(algorithm = self.algorithm(), bits = self.key_size, "generated key");
        Ok(SecretKey::from_bytes(self.algorithm(), bytes.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key() {
        let mut generator = KeyGenerator::get_instance("AES").unwrap();
        assert_eq!(generator.key_size(), 128);
        generator.init(256).unwrap();

        let key = generator.generate_key().unwrap();
        assert_eq!(key.algorithm(), "AES");
        assert_eq!(key.encoded().len(), 32);
    }

    #[test]
    fn test_keys_are_fresh() {
        let generator = KeyGenerator::get_instance("AES").unwrap();
        let key1 = generator.generate_key().unwrap();
        let key2 = generator.generate_key().unwrap();
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_invalid_key_size_keeps_previous() {
        let mut generator = KeyGenerator::get_instance("AES").unwrap();
        generator.init(192).unwrap();
        let result = generator.init(999);
        assert!(matches!(
            result,
            Err(Error::InvalidKeySize { ref algorithm, bits: 999 }) if algorithm == "AES"
        ));
        assert_eq!(generator.key_size(), 192);
    }

    #[test]
    fn test_alias_generates_canonical_key() {
        let mut generator = KeyGenerator::get_instance("TripleDES").unwrap();
        generator.init(112).unwrap();
        let key = generator.generate_key().unwrap();
        assert_eq!(key.algorithm(), "DESede");
        assert_eq!(key.encoded().len(), 24);
        assert_eq!(key.encoded()[0..8], key.encoded()[16..24]);
        assert!(key.encoded().iter().all(|b| b.count_ones() % 2 == 1));
    }
}
