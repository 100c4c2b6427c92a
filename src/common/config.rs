//!
//! # 通用配置模块
//!
//! `Provider` 的默认行为：省略模式/填充时的取值，以及加密时缺少 IV 是否自动生成。
//!
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::common::errors::Error;
use crate::symmetric::transformation::{BlockMode, Padding};

/// Provider 配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    /// 变换字符串未指定模式时，分组密码使用的模式
    pub default_mode: BlockMode,
    /// 变换字符串未指定填充时，ECB/CBC 使用的填充
    pub default_padding: Padding,
    /// 加密模式下缺少 IV 时是否随机生成
    pub generate_missing_iv: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_mode: BlockMode::Ecb,
            default_padding: Padding::Pkcs5,
            generate_missing_iv: true,
        }
    }
}

impl ProviderConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    /// 从 JSON 字符串加载配置，缺失字段取默认值
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
