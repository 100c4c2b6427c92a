//! 分组模式与 AEAD 的通用实现，供各算法系统复用
use crate::common::errors::{CipherOperationError, Error};
use crate::symmetric::transformation::{BlockMode, Padding};
use cipher::block_padding::{self, Pkcs7};
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

#[cfg(feature = "aes-gcm-feature")]
use aes_gcm::aead;
#[cfg(all(feature = "chacha", not(feature = "aes-gcm-feature")))]
use chacha20poly1305::aead;

/// GCM 与 ChaCha20-Poly1305 的 nonce 长度
pub const AEAD_NONCE_SIZE: usize = 12;
/// 支持的 AEAD 标签长度（比特）
pub const AEAD_TAG_BITS: usize = 128;

/// 按算法支持的模式补全变换中省略的模式和填充
///
/// AEAD 模式只接受 `NoPadding`，其余模式缺省时取 `default_padding`。
pub fn resolve_mode(
    algorithm: &str,
    mode: Option<BlockMode>,
    padding: Option<Padding>,
    default_mode: BlockMode,
    supported: &[BlockMode],
    default_padding: Padding,
) -> Result<(BlockMode, Padding), Error> {
    let mode = mode.unwrap_or(default_mode);
    if !supported.contains(&mode) {
        return Err(Error::AlgorithmUnavailable(format!("{}/{}", algorithm, mode)));
    }

    let padding = if mode.is_aead() {
        match padding {
            None | Some(Padding::NoPadding) => Padding::NoPadding,
            Some(other) => {
                return Err(Error::AlgorithmUnavailable(format!(
                    "{}/{}/{}",
                    algorithm, mode, other
                )));
            }
        }
    } else {
        padding.unwrap_or(default_padding)
    };

    Ok((mode, padding))
}

pub fn require_iv(iv: Option<&[u8]>) -> Result<&[u8], Error> {
    iv.ok_or_else(|| Error::InvalidParameters("IV is required for this mode".to_string()))
}

pub fn ecb_encrypt<C>(key: &[u8], padding: Padding, input: &[u8]) -> Result<Vec<u8>, Error>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = ecb::Encryptor::<C>::new_from_slice(key)
        .map_err(|_| Error::InvalidKey(format!("unexpected key length {}", key.len())))?;
    encrypt_padded(encryptor, padding, input)
}

pub fn ecb_decrypt<C>(key: &[u8], padding: Padding, input: &[u8]) -> Result<Vec<u8>, Error>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = ecb::Decryptor::<C>::new_from_slice(key)
        .map_err(|_| Error::InvalidKey(format!("unexpected key length {}", key.len())))?;
    decrypt_padded(decryptor, padding, input)
}

pub fn cbc_encrypt<C>(
    key: &[u8],
    iv: &[u8],
    padding: Padding,
    input: &[u8],
) -> Result<Vec<u8>, Error>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let encryptor = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidParameters(format!("unexpected IV length {}", iv.len())))?;
    encrypt_padded(encryptor, padding, input)
}

pub fn cbc_decrypt<C>(
    key: &[u8],
    iv: &[u8],
    padding: Padding,
    input: &[u8],
) -> Result<Vec<u8>, Error>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let decryptor = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| Error::InvalidParameters(format!("unexpected IV length {}", iv.len())))?;
    decrypt_padded(decryptor, padding, input)
}

fn encrypt_padded<E: BlockEncryptMut>(
    encryptor: E,
    padding: Padding,
    input: &[u8],
) -> Result<Vec<u8>, Error> {
    match padding {
        Padding::Pkcs5 => Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(input)),
        Padding::NoPadding => {
            let block_size = E::block_size();
            if input.len() % block_size != 0 {
                return Err(CipherOperationError::IllegalBlockSize(format!(
                    "input length {} is not a multiple of {} bytes",
                    input.len(),
                    block_size
                ))
                .into());
            }
            Ok(encryptor.encrypt_padded_vec_mut::<block_padding::NoPadding>(input))
        }
    }
}

fn decrypt_padded<D: BlockDecryptMut>(
    decryptor: D,
    padding: Padding,
    input: &[u8],
) -> Result<Vec<u8>, Error> {
    let block_size = D::block_size();
    if input.len() % block_size != 0 || (padding == Padding::Pkcs5 && input.is_empty()) {
        return Err(CipherOperationError::IllegalBlockSize(format!(
            "ciphertext length {} is not a positive multiple of {} bytes",
            input.len(),
            block_size
        ))
        .into());
    }

    match padding {
        Padding::Pkcs5 => decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(input)
            .map_err(|_| CipherOperationError::BadPadding.into()),
        Padding::NoPadding => decryptor
            .decrypt_padded_vec_mut::<block_padding::NoPadding>(input)
            .map_err(|_| CipherOperationError::BadPadding.into()),
    }
}

#[cfg(any(feature = "aes-gcm-feature", feature = "chacha"))]
pub fn aead_encrypt<A>(key: &[u8], nonce: &[u8], input: &[u8]) -> Result<Vec<u8>, Error>
where
    A: aead::Aead + aead::KeyInit,
{
    let cipher = A::new_from_slice(key)
        .map_err(|_| Error::InvalidKey(format!("unexpected key length {}", key.len())))?;
    check_nonce(nonce)?;
    cipher
        .encrypt(aead::Nonce::<A>::from_slice(nonce), input)
        .map_err(|_| {
            CipherOperationError::IllegalBlockSize(format!(
                "input of {} bytes is too long",
                input.len()
            ))
            .into()
        })
}

#[cfg(any(feature = "aes-gcm-feature", feature = "chacha"))]
pub fn aead_decrypt<A>(key: &[u8], nonce: &[u8], input: &[u8]) -> Result<Vec<u8>, Error>
where
    A: aead::Aead + aead::KeyInit,
{
    let cipher = A::new_from_slice(key)
        .map_err(|_| Error::InvalidKey(format!("unexpected key length {}", key.len())))?;
    check_nonce(nonce)?;
    cipher
        .decrypt(aead::Nonce::<A>::from_slice(nonce), input)
        .map_err(|_| CipherOperationError::AuthenticationFailed.into())
}

#[cfg(any(feature = "aes-gcm-feature", feature = "chacha"))]
fn check_nonce(nonce: &[u8]) -> Result<(), Error> {
    if nonce.len() != AEAD_NONCE_SIZE {
        return Err(Error::InvalidParameters(format!(
            "nonce must be {} bytes, got {}",
            AEAD_NONCE_SIZE,
            nonce.len()
        )));
    }
    Ok(())
}
