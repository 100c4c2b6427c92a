//! 变换字符串（`ALG`、`ALG/MODE`、`ALG/MODE/PADDING`）的解析与组合
use crate::common::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = '/';

/// 分组模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockMode {
    Ecb,
    Cbc,
    Gcm,
    /// ChaCha20 的 AEAD 构造
    Poly1305,
}

impl BlockMode {
    pub fn name(&self) -> &'static str {
        match self {
            BlockMode::Ecb => "ECB",
            BlockMode::Cbc => "CBC",
            BlockMode::Gcm => "GCM",
            BlockMode::Poly1305 => "Poly1305",
        }
    }

    /// AEAD 模式自带认证，不接受填充
    pub fn is_aead(&self) -> bool {
        matches!(self, BlockMode::Gcm | BlockMode::Poly1305)
    }
}

impl FromStr for BlockMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ECB" => Ok(BlockMode::Ecb),
            "CBC" => Ok(BlockMode::Cbc),
            "GCM" => Ok(BlockMode::Gcm),
            "POLY1305" => Ok(BlockMode::Poly1305),
            _ => Err(Error::AlgorithmUnavailable(format!("unknown mode: {}", s))),
        }
    }
}

impl TryFrom<String> for BlockMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlockMode> for String {
    fn from(mode: BlockMode) -> Self {
        mode.name().to_string()
    }
}

impl fmt::Display for BlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 填充方案
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Padding {
    /// PKCS#5/PKCS#7 填充
    Pkcs5,
    NoPadding,
}

impl Padding {
    pub fn name(&self) -> &'static str {
        match self {
            Padding::Pkcs5 => "PKCS5Padding",
            Padding::NoPadding => "NoPadding",
        }
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PKCS5PADDING" | "PKCS7PADDING" => Ok(Padding::Pkcs5),
            "NOPADDING" => Ok(Padding::NoPadding),
            _ => Err(Error::AlgorithmUnavailable(format!(
                "unknown padding: {}",
                s
            ))),
        }
    }
}

impl TryFrom<String> for Padding {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Padding> for String {
    fn from(padding: Padding) -> Self {
        padding.name().to_string()
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 解析后的变换
///
/// 模式和填充可以省略，由具体算法按 `ProviderConfig` 补全。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    raw: String,
    algorithm: String,
    mode: Option<BlockMode>,
    padding: Option<Padding>,
}

impl Transformation {
    pub fn parse(transformation: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = transformation.split(SEPARATOR).map(str::trim).collect();
        if parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(Error::AlgorithmUnavailable(format!(
                "invalid transformation format: {}",
                transformation
            )));
        }

        let mode: Option<BlockMode> = parts.get(1).map(|m| m.parse()).transpose()?;
        let padding: Option<Padding> = parts.get(2).map(|p| p.parse()).transpose()?;

        Ok(Self {
            raw: transformation.to_string(),
            algorithm: parts[0].to_string(),
            mode,
            padding,
        })
    }

    /// 由算法名和可选的模式拼出变换字符串；没有模式时不带分隔符
    pub fn compose(algorithm: &str, block_mode: Option<&str>) -> String {
        match block_mode {
            Some(mode) => format!("{}{}{}", algorithm, SEPARATOR, mode),
            None => algorithm.to_string(),
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn mode(&self) -> Option<BlockMode> {
        self.mode
    }

    pub fn padding(&self) -> Option<Padding> {
        self.padding
    }
}

impl FromStr for Transformation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
