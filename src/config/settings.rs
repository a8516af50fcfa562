// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 配置加载失败
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// 未找到指定名称的连接字符串
    #[error("Connection string '{0}' not found")]
    MissingConnectionString(String),
}

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 以名称索引的连接字符串
    #[serde(default)]
    pub connection_strings: HashMap<String, String>,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

impl DatabaseSettings {
    /// 按名称获取连接字符串
    pub fn connection_string(&self, key: &str) -> Result<&str, SettingsError> {
        self.connection_strings
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| SettingsError::MissingConnectionString(key.to_string()))
    }
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// tracing 过滤表达式
    pub filter: String,
    /// 是否输出 JSON 格式
    pub json: bool,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 与 `DALKIT__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 配置加载失败
    pub fn new() -> Result<Self, SettingsError> {
        Self::load(Path::new("config"))
    }

    /// 从指定目录加载配置
    pub fn load(config_dir: &Path) -> Result<Self, SettingsError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default DB pool settings
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default logging settings
            .set_default("logging.filter", "info,dalkit=debug")?
            .set_default("logging.json", false)?
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(&env)).required(false))
            .add_source(Environment::with_prefix("DALKIT").separator("__"));

        Ok(builder.build()?.try_deserialize()?)
    }
}
