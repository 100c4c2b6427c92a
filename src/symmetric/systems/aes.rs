//! AES 对称加密实现（ECB、CBC、GCM）
use crate::common::config::ProviderConfig;
use crate::common::errors::Error;
use crate::symmetric::modes;
use crate::symmetric::provider::Registration;
use crate::symmetric::traits::{CipherSpi, KeyGeneratorSpi};
use crate::symmetric::transformation::{BlockMode, Padding};
use ::aes::{Aes128, Aes192, Aes256};

#[cfg(feature = "aes-gcm-feature")]
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, aead::consts::U12};

#[cfg(feature = "aes-gcm-feature")]
type Aes192Gcm = AesGcm<Aes192, U12>;

pub const ALGORITHM: &str = "AES";
const BLOCK_SIZE: usize = 16;
const KEY_SIZES: [usize; 3] = [128, 192, 256];

#[cfg(feature = "aes-gcm-feature")]
const SUPPORTED_MODES: &[BlockMode] = &[BlockMode::Ecb, BlockMode::Cbc, BlockMode::Gcm];
#[cfg(not(feature = "aes-gcm-feature"))]
const SUPPORTED_MODES: &[BlockMode] = &[BlockMode::Ecb, BlockMode::Cbc];

pub(crate) const REGISTRATION: Registration = Registration {
    algorithm: ALGORITHM,
    aliases: &[],
    key_generator: &AesKeyGenerator,
    cipher: AesCipher::create,
};

/// AES 密钥生成器：128/192/256 位
#[derive(Debug)]
pub struct AesKeyGenerator;

impl KeyGeneratorSpi for AesKeyGenerator {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn default_key_size(&self) -> usize {
        128
    }

    fn key_bytes(&self, bits: usize) -> Result<usize, Error> {
        if KEY_SIZES.contains(&bits) {
            Ok(bits / 8)
        } else {
            Err(Error::InvalidKeySize {
                algorithm: ALGORITHM.to_string(),
                bits,
            })
        }
    }
}

/// AES 加密系统
#[derive(Debug)]
pub struct AesCipher {
    mode: BlockMode,
    padding: Padding,
}

impl AesCipher {
    pub fn create(
        mode: Option<BlockMode>,
        padding: Option<Padding>,
        config: &ProviderConfig,
    ) -> Result<Box<dyn CipherSpi>, Error> {
        let (mode, padding) = modes::resolve_mode(
            ALGORITHM,
            mode,
            padding,
            config.default_mode,
            SUPPORTED_MODES,
            config.default_padding,
        )?;
        Ok(Box::new(Self { mode, padding }))
    }
}

impl CipherSpi for AesCipher {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn mode(&self) -> BlockMode {
        self.mode
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn iv_len(&self) -> Option<usize> {
        match self.mode {
            BlockMode::Ecb => None,
            BlockMode::Gcm => Some(modes::AEAD_NONCE_SIZE),
            _ => Some(BLOCK_SIZE),
        }
    }

    fn check_key(&self, key: &[u8]) -> Result<(), Error> {
        if KEY_SIZES.contains(&(key.len() * 8)) {
            Ok(())
        } else {
            Err(Error::InvalidKey(format!(
                "AES key must be 16, 24 or 32 bytes, got {}",
                key.len()
            )))
        }
    }

    fn encrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_key(key)?;
        let padding = self.padding;
        match (self.mode, key.len()) {
            (BlockMode::Ecb, 16) => modes::ecb_encrypt::<Aes128>(key, padding, input),
            (BlockMode::Ecb, 24) => modes::ecb_encrypt::<Aes192>(key, padding, input),
            (BlockMode::Ecb, _) => modes::ecb_encrypt::<Aes256>(key, padding, input),
            (BlockMode::Cbc, 16) => {
                modes::cbc_encrypt::<Aes128>(key, modes::require_iv(iv)?, padding, input)
            }
            (BlockMode::Cbc, 24) => {
                modes::cbc_encrypt::<Aes192>(key, modes::require_iv(iv)?, padding, input)
            }
            (BlockMode::Cbc, _) => {
                modes::cbc_encrypt::<Aes256>(key, modes::require_iv(iv)?, padding, input)
            }
            #[cfg(feature = "aes-gcm-feature")]
            (BlockMode::Gcm, 16) => modes::aead_encrypt::<Aes128Gcm>(key, modes::require_iv(iv)?, input),
            #[cfg(feature = "aes-gcm-feature")]
            (BlockMode::Gcm, 24) => modes::aead_encrypt::<Aes192Gcm>(key, modes::require_iv(iv)?, input),
            #[cfg(feature = "aes-gcm-feature")]
            (BlockMode::Gcm, _) => modes::aead_encrypt::<Aes256Gcm>(key, modes::require_iv(iv)?, input),
            (mode, _) => Err(Error::AlgorithmUnavailable(format!("{}/{}", ALGORITHM, mode))),
        }
    }

    fn decrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_key(key)?;
        let padding = self.padding;
        match (self.mode, key.len()) {
            (BlockMode::Ecb, 16) => modes::ecb_decrypt::<Aes128>(key, padding, input),
            (BlockMode::Ecb, 24) => modes::ecb_decrypt::<Aes192>(key, padding, input),
            (BlockMode::Ecb, _) => modes::ecb_decrypt::<Aes256>(key, padding, input),
            (BlockMode::Cbc, 16) => {
                modes::cbc_decrypt::<Aes128>(key, modes::require_iv(iv)?, padding, input)
            }
            (BlockMode::Cbc, 24) => {
                modes::cbc_decrypt::<Aes192>(key, modes::require_iv(iv)?, padding, input)
            }
            (BlockMode::Cbc, _) => {
                modes::cbc_decrypt::<Aes256>(key, modes::require_iv(iv)?, padding, input)
            }
            #[cfg(feature = "aes-gcm-feature")]
            (BlockMode::Gcm, 16) => modes::aead_decrypt::<Aes128Gcm>(key, modes::require_iv(iv)?, input),
            #[cfg(feature = "aes-gcm-feature")]
            (BlockMode::Gcm, 24) => modes::aead_decrypt::<Aes192Gcm>(key, modes::require_iv(iv)?, input),
            #[cfg(feature = "aes-gcm-feature")]
            (BlockMode::Gcm, _) => modes::aead_decrypt::<Aes256Gcm>(key, modes::require_iv(iv)?, input),
            (mode, _) => Err(Error::AlgorithmUnavailable(format!("{}/{}", ALGORITHM, mode))),
        }
    }
}
