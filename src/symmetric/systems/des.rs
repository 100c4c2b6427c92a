//! DES 与 DESede（三重 DES）对称加密实现（ECB、CBC）
use crate::common::config::ProviderConfig;
use crate::common::errors::Error;
use crate::symmetric::modes;
use crate::symmetric::provider::Registration;
use crate::symmetric::traits::{CipherSpi, KeyGeneratorSpi};
use crate::symmetric::transformation::{BlockMode, Padding};
use ::des::{Des, TdesEde3};

pub const DES_ALGORITHM: &str = "DES";
pub const DESEDE_ALGORITHM: &str = "DESede";
const BLOCK_SIZE: usize = 8;
const DES_KEY_LEN: usize = 8;
const DESEDE_KEY_LEN: usize = 24;
const SUPPORTED_MODES: &[BlockMode] = &[BlockMode::Ecb, BlockMode::Cbc];

pub(crate) const DES_REGISTRATION: Registration = Registration {
    algorithm: DES_ALGORITHM,
    aliases: &[],
    key_generator: &DesKeyGenerator,
    cipher: DesCipher::create_des,
};

pub(crate) const DESEDE_REGISTRATION: Registration = Registration {
    algorithm: DESEDE_ALGORITHM,
    aliases: &["TripleDES", "3DES"],
    key_generator: &DesEdeKeyGenerator,
    cipher: DesCipher::create_desede,
};

/// 把每个字节的最低位设置为奇校验位
pub fn set_odd_parity(key: &mut [u8]) {
    for byte in key.iter_mut() {
        let high = *byte & 0xfe;
        *byte = if high.count_ones() % 2 == 0 { high | 1 } else { high };
    }
}

/// DES 密钥生成器：56 位有效长度，64 位含校验位
#[derive(Debug)]
pub struct DesKeyGenerator;

impl KeyGeneratorSpi for DesKeyGenerator {
    fn algorithm(&self) -> &'static str {
        DES_ALGORITHM
    }

    fn default_key_size(&self) -> usize {
        56
    }

    fn key_bytes(&self, bits: usize) -> Result<usize, Error> {
        match bits {
            56 | 64 => Ok(DES_KEY_LEN),
            _ => Err(Error::InvalidKeySize {
                algorithm: DES_ALGORITHM.to_string(),
                bits,
            }),
        }
    }

    fn finish_key(&self, _bits: usize, bytes: &mut [u8]) {
        set_odd_parity(bytes);
    }
}

/// DESede 密钥生成器：112 位（双密钥，K1 K2 K1）或 168 位（三密钥）
#[derive(Debug)]
pub struct DesEdeKeyGenerator;

impl KeyGeneratorSpi for DesEdeKeyGenerator {
    fn algorithm(&self) -> &'static str {
        DESEDE_ALGORITHM
    }

    fn default_key_size(&self) -> usize {
        168
    }

    fn key_bytes(&self, bits: usize) -> Result<usize, Error> {
        match bits {
            112 | 168 => Ok(DESEDE_KEY_LEN),
            _ => Err(Error::InvalidKeySize {
                algorithm: DESEDE_ALGORITHM.to_string(),
                bits,
            }),
        }
    }

    fn finish_key(&self, bits: usize, bytes: &mut [u8]) {
        if bits == 112 {
            bytes.copy_within(0..DES_KEY_LEN, 2 * DES_KEY_LEN);
        }
        set_odd_parity(bytes);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Single,
    Triple,
}

/// DES/DESede 加密系统
#[derive(Debug)]
pub struct DesCipher {
    variant: Variant,
    mode: BlockMode,
    padding: Padding,
}

impl DesCipher {
    pub fn create_des(
        mode: Option<BlockMode>,
        padding: Option<Padding>,
        config: &ProviderConfig,
    ) -> Result<Box<dyn CipherSpi>, Error> {
        Self::create(Variant::Single, mode, padding, config)
    }

    pub fn create_desede(
        mode: Option<BlockMode>,
        padding: Option<Padding>,
        config: &ProviderConfig,
    ) -> Result<Box<dyn CipherSpi>, Error> {
        Self::create(Variant::Triple, mode, padding, config)
    }

    fn create(
        variant: Variant,
        mode: Option<BlockMode>,
        padding: Option<Padding>,
        config: &ProviderConfig,
    ) -> Result<Box<dyn CipherSpi>, Error> {
        let algorithm = match variant {
            Variant::Single => DES_ALGORITHM,
            Variant::Triple => DESEDE_ALGORITHM,
        };
        let (mode, padding) = modes::resolve_mode(
            algorithm,
            mode,
            padding,
            config.default_mode,
            SUPPORTED_MODES,
            config.default_padding,
        )?;
        Ok(Box::new(Self {
            variant,
            mode,
            padding,
        }))
    }

    fn key_len(&self) -> usize {
        match self.variant {
            Variant::Single => DES_KEY_LEN,
            Variant::Triple => DESEDE_KEY_LEN,
        }
    }
}

impl CipherSpi for DesCipher {
    fn algorithm(&self) -> &'static str {
        match self.variant {
            Variant::Single => DES_ALGORITHM,
            Variant::Triple => DESEDE_ALGORITHM,
        }
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
            _ => Some(BLOCK_SIZE),
        }
    }

    fn check_key(&self, key: &[u8]) -> Result<(), Error> {
        if key.len() == self.key_len() {
            Ok(())
        } else {
            Err(Error::InvalidKey(format!(
                "{} key must be {} bytes, got {}",
                self.algorithm(),
                self.key_len(),
                key.len()
            )))
        }
    }

    fn encrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_key(key)?;
        let padding = self.padding;
        match (self.mode, self.variant) {
            (BlockMode::Ecb, Variant::Single) => modes::ecb_encrypt::<Des>(key, padding, input),
            (BlockMode::Ecb, Variant::Triple) => modes::ecb_encrypt::<TdesEde3>(key, padding, input),
            (BlockMode::Cbc, Variant::Single) => {
                modes::cbc_encrypt::<Des>(key, modes::require_iv(iv)?, padding, input)
            }
            (BlockMode::Cbc, Variant::Triple) => {
                modes::cbc_encrypt::<TdesEde3>(key, modes::require_iv(iv)?, padding, input)
            }
            (mode, _) => Err(Error::AlgorithmUnavailable(format!(
                "{}/{}",
                self.algorithm(),
                mode
            ))),
        }
    }

    fn decrypt(&self, key: &[u8], iv: Option<&[u8]>, input: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_key(key)?;
        let padding = self.padding;
        match (self.mode, self.variant) {
            (BlockMode::Ecb, Variant::Single) => modes::ecb_decrypt::<Des>(key, padding, input),
            (BlockMode::Ecb, Variant::Triple) => modes::ecb_decrypt::<TdesEde3>(key, padding, input),
            (BlockMode::Cbc, Variant::Single) => {
                modes::cbc_decrypt::<Des>(key, modes::require_iv(iv)?, padding, input)
            }
            (BlockMode::Cbc, Variant::Triple) => {
                modes::cbc_decrypt::<TdesEde3>(key, modes::require_iv(iv)?, padding, input)
            }
            (mode, _) => Err(Error::AlgorithmUnavailable(format!(
                "{}/{}",
                self.algorithm(),
                mode
            ))),
        }
    }
}
