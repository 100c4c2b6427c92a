//! # cipher-roundtrip: 对称算法参数的往返校验
//!
//! 按名称解析对称加密算法（仿照 `Cipher.getInstance("AES/CBC/PKCS5Padding")` 的命名方式），
//! 并对一组算法参数执行 生成密钥 -> 加密 -> 解密 -> 比较 的往返校验。
//!
//! ## Core Concepts
//!
//! - **`Provider`**: 算法注册表，按名称或别名解析 `KeyGenerator` 与 `Cipher`。
//! - **`Cipher`**: 由变换字符串得到的加密上下文，`init` 之后 `do_final`。
//! - **`SymmetricParameterRoundTripChecker`**: 对 `AlgorithmParameters` 执行往返校验。
//!
//! ## Quick Start
//!
//! ```rust
//! use cipher_roundtrip::prelude::*;
//!
//! fn main() -> Result<(), Error> {
//!     let checker = SymmetricParameterRoundTripChecker::with_block_mode("AES", "CBC", 128);
//!     let parameters = AlgorithmParameters::from_iv("AES", vec![0u8; 16]);
//!     checker.test(&parameters)?;
//!
//!     // 不带模式时使用默认的 ECB/PKCS5Padding，不需要 IV
//!     let checker = SymmetricParameterRoundTripChecker::new("DES", 56);
//!     checker.test(&AlgorithmParameters::empty("DES"))?;
//!     Ok(())
//! }
//! ```

pub mod checker;
pub mod common;
pub mod symmetric;

// --- Prelude ---
pub mod prelude {
    pub use crate::checker::{PLAIN_DATA, RoundTripConfig, SymmetricParameterRoundTripChecker};
    pub use crate::common::{CipherOperationError, Error, ErrorKind, ProviderConfig};
    pub use crate::symmetric::{
        AlgorithmParameters, BlockMode, Cipher, KeyGenerator, OperationMode, Padding,
        ParameterSpec, ParametersCheck, Provider, SecretKey,
    };
}

/// The version of the `cipher-roundtrip` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
