// LanZou Netdisk Rust Library
// 蓝奏云命令行客户端后台任务层核心库

// 配置管理模块
pub mod config;

// 日志模块
pub mod logging;

// 网盘 SDK 边界模块
pub mod netdisk;

// 公共模块（任务状态与进度工具）
pub mod common;

// 下载任务模块
pub mod downloader;

// 上传任务模块
pub mod uploader;

// 任务管理模块
pub mod manager;

// 导出常用类型
pub use common::{format_size, percent, SpeedCalculator, Task, TaskState, TaskType};
pub use config::{AppConfig, LogConfig};
pub use downloader::{ConsolePrompter, DownType, Downloader, PasswordPrompter};
pub use manager::{TaskManager, TaskSnapshot};
pub use netdisk::{
    is_file_url, is_folder_url, FailedCallback, FailedFile, NetdiskClient, ProgressCallback,
    ResultCode, UploadFailedCallback, UploadedHandler,
};
pub use uploader::{UploadType, Uploader};
