//! 对称加密核心模块

pub mod cipher;
pub mod key;
pub mod key_generator;
pub mod modes;
pub mod params;
pub mod provider;
pub mod systems;
pub mod traits;
pub mod transformation;

pub use self::cipher::Cipher;
pub use self::key::SecretKey;
pub use self::key_generator::KeyGenerator;
pub use self::params::{AlgorithmParameters, ParameterSpec};
pub use self::provider::Provider;
pub use self::traits::{CipherSpi, KeyGeneratorSpi, OperationMode, ParametersCheck};
pub use self::transformation::{BlockMode, Padding, Transformation};
