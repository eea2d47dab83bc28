// 下载任务

use crate::common::{Task, TaskState, TaskType};
use crate::netdisk::url::{is_file_url, is_folder_url};
use crate::netdisk::{FailedFile, NetdiskClient, ResultCode};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, warn};

/// 下载目标类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownType {
    /// 无效的分享链接
    InvalidUrl { url: String },
    /// 文件分享链接
    FileUrl { url: String },
    /// 文件夹分享链接
    FolderUrl { url: String },
    /// 网盘文件 ID
    FileId { fid: i64 },
    /// 网盘文件夹 ID
    FolderId { fid: i64 },
}

/// 提取码输入接口
///
/// 下载任务遇到缺少提取码时在工作线程上阻塞询问，
/// 这是任务线程唯一的挂起点
pub trait PasswordPrompter: Send + Sync {
    /// 提示并读取提取码，读取失败时返回空串
    fn ask(&self, hint: &str) -> String;
}

/// 控制台提取码输入
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl PasswordPrompter for ConsolePrompter {
    fn ask(&self, hint: &str) -> String {
        print!("{}", hint);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => line.trim().to_string(),
            Err(_) => String::new(),
        }
    }
}

/// 下载任务
///
/// 每个任务独占一个后台线程，进度与错误通过共享状态轮询。
/// 任务只运行一次，不可复用
pub struct Downloader {
    disk: Arc<dyn NetdiskClient>,
    /// 本地保存目录（来自配置）
    save_path: PathBuf,
    state: Arc<TaskState>,
    down_type: Option<DownType>,
    /// 文件(夹)在网盘中的路径，仅 ID 下载时使用
    f_path: Option<String>,
    prompter: Arc<dyn PasswordPrompter>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Downloader {
    pub fn new(disk: Arc<dyn NetdiskClient>, save_path: impl Into<PathBuf>) -> Self {
        Self {
            disk,
            save_path: save_path.into(),
            state: Arc::new(TaskState::new()),
            down_type: None,
            f_path: None,
            prompter: Arc::new(ConsolePrompter),
            handle: Mutex::new(None),
        }
    }

    /// 替换提取码输入方式
    pub fn set_prompter(&mut self, prompter: Arc<dyn PasswordPrompter>) {
        self.prompter = prompter;
    }

    /// 设置链接下载目标，按链接形式识别文件/文件夹
    pub fn set_url(&mut self, url: &str) {
        self.down_type = Some(if is_file_url(url) {
            DownType::FileUrl {
                url: url.to_string(),
            }
        } else if is_folder_url(url) {
            DownType::FolderUrl {
                url: url.to_string(),
            }
        } else {
            DownType::InvalidUrl {
                url: url.to_string(),
            }
        });
    }

    /// 设置 ID 下载目标，f_path 为文件(夹)在网盘中的路径
    pub fn set_fid(&mut self, fid: i64, is_file: bool, f_path: Option<String>) {
        self.f_path = f_path;
        self.down_type = Some(if is_file {
            DownType::FileId { fid }
        } else {
            DownType::FolderId { fid }
        });
    }

    /// 当前下载目标
    pub fn down_type(&self) -> Option<&DownType> {
        self.down_type.as_ref()
    }

    /// 同步执行下载，start() 在后台线程中调用的就是这里
    pub fn run(&self) {
        Self::execute(
            &self.disk,
            &self.save_path,
            self.down_type.clone(),
            self.f_path.clone(),
            &self.prompter,
            &self.state,
        );
    }

    fn execute(
        disk: &Arc<dyn NetdiskClient>,
        save_path: &Path,
        down_type: Option<DownType>,
        f_path: Option<String>,
        prompter: &Arc<dyn PasswordPrompter>,
        state: &TaskState,
    ) {
        let progress = |_name: &str, total: u64, now: u64| state.update_progress(total, now);
        let failed = |code: ResultCode, file: &FailedFile| {
            state.push_err(down_failed_msg(code, file));
        };

        match down_type {
            None => warn!("下载任务未设置目标，直接结束"),

            Some(DownType::InvalidUrl { .. }) => {
                state.push_err("(。>︿<) 该分享链接无效".to_string());
            }

            Some(DownType::FileUrl { url }) => {
                let code = disk.down_file_by_url(&url, "", save_path, &progress);
                if code.lacks_password() {
                    let pwd = prompter.ask("输入该文件的提取码 : ");
                    let code2 = disk.down_file_by_url(&url, &pwd, save_path, &progress);
                    if !code2.is_success() {
                        state.push_err(format!("文件下载失败: {} -> {}", code2.description(), url));
                    }
                } else if !code.is_success() {
                    state.push_err(format!("文件下载失败: {} -> {}", code.description(), url));
                }
            }

            Some(DownType::FolderUrl { url }) => {
                let code = disk.down_dir_by_url(&url, "", save_path, &progress, true, &failed);
                if code.lacks_password() {
                    let pwd = prompter.ask("输入该文件夹的提取码 : ");
                    let code2 = disk.down_dir_by_url(&url, &pwd, save_path, &progress, true, &failed);
                    if !code2.is_success() {
                        state.push_err(format!(
                            "文件夹下载失败: {} -> {}",
                            code2.description(),
                            url
                        ));
                    }
                } else if !code.is_success() {
                    state.push_err(format!("文件夹下载失败: {} -> {}", code.description(), url));
                }
            }

            Some(DownType::FileId { fid }) => {
                let code = disk.down_file_by_id(fid, save_path, &progress);
                if !code.is_success() {
                    let target = f_path.unwrap_or_else(|| fid.to_string());
                    state.push_err(format!("文件下载失败: {} -> {}", code.description(), target));
                }
            }

            Some(DownType::FolderId { fid }) => {
                let code = disk.down_dir_by_id(fid, save_path, &progress, true, &failed);
                if !code.is_success() {
                    let target = f_path.unwrap_or_else(|| fid.to_string());
                    state.push_err(format!(
                        "文件夹下载失败: {} -> {}",
                        code.description(),
                        target
                    ));
                }
            }
        }
        debug!("下载任务 [{}] 结束", state.task_id());
    }
}

/// 批量下载中单个文件失败的错误信息
fn down_failed_msg(code: ResultCode, file: &FailedFile) -> String {
    if let Some(url) = &file.url {
        format!(
            "文件下载失败: {} -> 文件名: {}, URL: {}",
            code.description(),
            file.name,
            url
        )
    } else if let Some(id) = file.id {
        format!(
            "文件下载失败: {} -> 文件名: {}, ID: {}",
            code.description(),
            file.name,
            id
        )
    } else {
        format!("文件下载失败: {} -> 文件名: {}", code.description(), file.name)
    }
}

impl Task for Downloader {
    fn task_type(&self) -> TaskType {
        TaskType::Download
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn describe(&self) -> String {
        match &self.down_type {
            Some(DownType::FileUrl { url })
            | Some(DownType::FolderUrl { url })
            | Some(DownType::InvalidUrl { url }) => url.clone(),
            Some(DownType::FileId { fid }) | Some(DownType::FolderId { fid }) => self
                .f_path
                .clone()
                .unwrap_or_else(|| fid.to_string()),
            None => "<未设置>".to_string(),
        }
    }

    fn start(&self) {
        let mut handle = self.handle.lock();
        if handle.is_some() {
            warn!("下载任务 [{}] 已启动，忽略重复 start", self.task_id());
            return;
        }

        let disk = Arc::clone(&self.disk);
        let save_path = self.save_path.clone();
        let down_type = self.down_type.clone();
        let f_path = self.f_path.clone();
        let prompter = Arc::clone(&self.prompter);
        let state = Arc::clone(&self.state);
        *handle = Some(std::thread::spawn(move || {
            Downloader::execute(&disk, &save_path, down_type, f_path, &prompter, &state);
        }));
    }

    fn is_alive(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }

    fn wait(&self) {
        if let Some(handle) = self.handle.lock().take() {
            let _ = handle.join();
        }
    }
}
