//! 内置 Provider：按名称解析密钥生成器与加密实现
use crate::common::config::ProviderConfig;
use crate::common::errors::Error;
use crate::symmetric::cipher::Cipher;
use crate::symmetric::key_generator::KeyGenerator;
use crate::symmetric::systems;
use crate::symmetric::traits::{CipherSpi, KeyGeneratorSpi};
use crate::symmetric::transformation::{BlockMode, Padding, Transformation};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

/// 由模式、填充和配置构造加密实现的工厂函数
pub type CipherFactory =
    fn(Option<BlockMode>, Option<Padding>, &ProviderConfig) -> Result<Box<dyn CipherSpi>, Error>;

/// 一个算法在注册表中的条目
#[derive(Debug, Clone, Copy)]
pub(crate) struct Registration {
    pub algorithm: &'static str,
    pub aliases: &'static [&'static str],
    pub key_generator: &'static dyn KeyGeneratorSpi,
    pub cipher: CipherFactory,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    key_generator: &'static dyn KeyGeneratorSpi,
    cipher: CipherFactory,
}

static SHARED: LazyLock<Arc<Provider>> = LazyLock::new(|| Arc::new(Provider::new()));

/// 算法注册表；构造后不可变，可在线程间共享
#[derive(Debug)]
pub struct Provider {
    config: ProviderConfig,
    entries: HashMap<String, Entry>,
    algorithms: Vec<&'static str>,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider {
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    pub fn with_config(config: ProviderConfig) -> Self {
        let mut provider = Self {
            config,
            entries: HashMap::new(),
            algorithms: Vec::new(),
        };
        for registration in builtin_registrations() {
            provider.register(registration);
        }
        provider.algorithms.sort_unstable();
        debug!(algorithms = ?provider.algorithms, "provider initialized");
        provider
    }

    /// 进程级默认 Provider，首次使用时初始化
    pub fn shared() -> Arc<Provider> {
        Arc::clone(&SHARED)
    }

    fn register(&mut self, registration: Registration) {
        let entry = Entry {
            key_generator: registration.key_generator,
            cipher: registration.cipher,
        };
        for name in std::iter::once(&registration.algorithm).chain(registration.aliases) {
            self.entries.insert(name.to_ascii_uppercase(), entry);
        }
        self.algorithms.push(registration.algorithm);
    }

    fn entry(&self, algorithm: &str) -> Result<&Entry, Error> {
        self.entries
            .get(&algorithm.trim().to_ascii_uppercase())
            .ok_or_else(|| Error::AlgorithmUnavailable(algorithm.to_string()))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// 已注册的规范算法名，按字典序排列
    pub fn algorithms(&self) -> &[&'static str] {
        &self.algorithms
    }

    /// 把别名解析为规范算法名
    pub fn canonical_name(&self, algorithm: &str) -> Option<&'static str> {
        self.entry(algorithm)
            .ok()
            .map(|entry| entry.key_generator.algorithm())
    }

    pub fn key_generator(&self, algorithm: &str) -> Result<KeyGenerator, Error> {
        let entry = self.entry(algorithm)?;
        trace!(algorithm, "resolved key generator");
        Ok(KeyGenerator::new(entry.key_generator))
    }

    pub fn cipher(&self, transformation: &str) -> Result<Cipher, Error> {
        let transformation = Transformation::parse(transformation)?;
        let entry = self.entry(transformation.algorithm())?;
        let spi = (entry.cipher)(transformation.mode(), transformation.padding(), &self.config)?;
        debug!(
            %transformation,
            mode = %spi.mode(),
            padding = %spi.padding(),
            "resolved cipher"
        );
        Ok(Cipher::new(transformation, spi, self.config.clone()))
    }
}

fn builtin_registrations() -> Vec<Registration> {
    let registrations = [
        systems::aes::REGISTRATION,
        systems::des::DES_REGISTRATION,
        systems::des::DESEDE_REGISTRATION,
    ]
    .into_iter();
    #[cfg(feature = "chacha")]
    let registrations = registrations.chain([systems::chacha20::REGISTRATION]);
    registrations.collect()
}
