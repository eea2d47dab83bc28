// 配置管理模块

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 下载文件保存目录
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
    /// 上传文件后自动设置的提取码
    #[serde(default)]
    pub default_file_pwd: Option<String>,
    /// 上传文件夹后自动设置的提取码
    #[serde(default)]
    pub default_dir_pwd: Option<String>,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

fn default_save_path() -> PathBuf {
    PathBuf::from("downloads")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            default_file_pwd: None,
            default_dir_pwd: None,
            log: LogConfig::default(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 是否写日志文件
    #[serde(default = "default_log_enabled")]
    pub enabled: bool,
    /// 日志文件保存目录
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_enabled() -> bool {
    true
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: default_log_enabled(),
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("读取配置文件失败")?;
        let config: AppConfig = toml::from_str(&content).context("解析配置文件失败")?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("序列化配置失败")?;

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("创建配置目录失败")?;
            }
        }

        fs::write(path, content).context("写入配置文件失败")?;
        tracing::info!("✓ 配置已保存: {}", path.display());
        Ok(())
    }

    /// 加载配置，失败时回退到默认配置并尝试落盘
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => {
                tracing::info!("配置文件加载成功: {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("配置文件加载失败，使用默认配置: {:#}", e);
                let config = Self::default();

                // 首次启动：自动创建默认下载目录
                if !config.save_path.exists() {
                    if let Err(e) = fs::create_dir_all(&config.save_path) {
                        tracing::error!("无法创建默认下载目录 {:?}: {}", config.save_path, e);
                    } else {
                        tracing::info!("✓ 已创建默认下载目录: {:?}", config.save_path);
                    }
                }

                if let Err(e) = config.save_to_file(path) {
                    tracing::error!("保存默认配置失败: {:#}", e);
                }
                config
            }
        }
    }
}
