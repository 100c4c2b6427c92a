//! # Symmetric Cryptographic Systems Module
//!
//! This module serves as a façade for the symmetric algorithms the built-in provider registers.
//! AES, DES and DESede are always available. ChaCha20-Poly1305 is compiled in behind the
//! `chacha` feature, and AES-GCM behind `aes-gcm-feature`.
//!
//! Each system exposes a key generator implementing `KeyGeneratorSpi` and a cipher factory
//! returning a `CipherSpi`.
//!
//! ---
//!
//! # 对称加密系统模块
//!
//! 本模块是内置 Provider 所注册的对称算法的"门面"(façade)。
//! 每个系统提供一个实现 `KeyGeneratorSpi` 的密钥生成器，以及返回 `CipherSpi` 的工厂函数。

pub mod aes;
#[cfg(feature = "chacha")]
pub mod chacha20;
pub mod des;
