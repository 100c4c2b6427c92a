//! ChaCha20-Poly1305 对称加密实现
use crate::common::config::ProviderConfig;
use crate::common::errors::Error;
use crate::symmetric::modes;
use crate::symmetric::provider::Registration;
use crate::symmetric::traits::{CipherSpi, KeyGeneratorSpi};
use crate::symmetric::transformation::{BlockMode, Padding};
use chacha20poly1305::ChaCha20Poly1305;

pub const ALGORITHM: &str = "ChaCha20";
const KEY_SIZE: usize = 32;

pub(crate) const REGISTRATION: Registration = Registration {
    algorithm: ALGORITHM,
    aliases: &["ChaCha20-Poly1305"],
    key_generator: &ChaCha20KeyGenerator,
    cipher: ChaCha20Cipher::create,
};

/// ChaCha20 密钥生成器：仅 256 位
#[derive(Debug)]
pub struct ChaCha20KeyGenerator;

impl KeyGeneratorSpi for ChaCha20KeyGenerator {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn default_key_size(&self) -> usize {
        KEY_SIZE * 8
    }

    fn key_bytes(&self, bits: usize) -> Result<usize, Error> {
        if bits == KEY_SIZE * 8 {
            Ok(KEY_SIZE)
        } else {
            Err(Error::InvalidKeySize {
                algorithm: ALGORITHM.to_string(),
                bits,
            })
        }
    }
}

/// ChaCha20-Poly1305 加密系统，模式固定为 `Poly1305/NoPadding`
#[derive(Debug)]
pub struct ChaCha20Cipher;

impl ChaCha20Cipher {
    pub fn create(
        mode: Option<BlockMode>,
        padding: Option<Padding>,
        config: &ProviderConfig,
    ) -> Result<Box<dyn CipherSpi>, Error> {
        modes::resolve_mode(
            ALGORITHM,
            mode,
            padding,
            BlockMode::Poly1305,
            &[BlockMode::Poly1305],
            config.default_padding,
        )?;
        Ok(Box::new(Self))
    }
}

impl CipherSpi for ChaCha20Cipher {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn mode(&self) -> BlockMode {
        BlockMode::Poly1305
    }

    fn padding(&self) -> Padding {
        Padding::NoPadding
    }

    fn block_size(&self) -> usize {
        0
    }

    fn iv_len(&self) -> Option<usize> {
        Some(modes::AEAD_NONCE_SIZE)
    }

    fn check_key(&self, key: &[u8]) -> Result<(), Error> {
        if key.len() == KEY_SIZE {
            Ok(())
        } else {
            Err(Error::InvalidKey(format!(
                "ChaCha20 key must be {} bytes, got {}",
                KEY_SIZE,
                key.len()
            )))
        }
    }

    fn encrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_key(key)?;
        modes::aead_encrypt::<ChaCha20Poly1305>(key, modes::require_iv(iv)?, input)
    }

    fn decrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_key(key)?;
        modes::aead_decrypt::<ChaCha20Poly1305>(key, modes::require_iv(iv)?, input)
    }
}
