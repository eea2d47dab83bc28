// 上传任务
//
// 复用下载任务的线程与共享状态设计

use crate::common::{Task, TaskState, TaskType};
use crate::netdisk::{NetdiskClient, ResultCode};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, warn};

/// 上传目标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadType {
    /// 单个文件
    File,
    /// 文件夹
    Folder,
}

/// 上传任务
///
/// 上传完成后按配置自动为文件(夹)设置提取码
pub struct Uploader {
    disk: Arc<dyn NetdiskClient>,
    state: Arc<TaskState>,
    up_path: Option<PathBuf>,
    up_type: Option<UploadType>,
    /// 网盘保存文件夹 ID，-1 表示根目录
    folder_id: i64,
    /// 网盘保存文件夹名，仅用于展示
    folder_name: String,
    /// 上传文件后自动设置的提取码
    default_file_pwd: Option<String>,
    /// 上传文件夹后自动设置的提取码
    default_dir_pwd: Option<String>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Uploader {
    pub fn new(disk: Arc<dyn NetdiskClient>) -> Self {
        Self {
            disk,
            state: Arc::new(TaskState::new()),
            up_path: None,
            up_type: None,
            folder_id: -1,
            folder_name: String::new(),
            default_file_pwd: None,
            default_dir_pwd: None,
            handle: Mutex::new(None),
        }
    }

    /// 设置上传路径信息
    pub fn set_upload_path(&mut self, path: impl Into<PathBuf>, is_file: bool) {
        self.up_path = Some(path.into());
        self.up_type = Some(if is_file {
            UploadType::File
        } else {
            UploadType::Folder
        });
    }

    /// 设置网盘保存文件夹信息
    pub fn set_target(&mut self, folder_id: i64, folder_name: &str) {
        self.folder_id = folder_id;
        self.folder_name = folder_name.to_string();
    }

    /// 设置上传完成后自动应用的提取码
    pub fn set_default_pwd(&mut self, file_pwd: Option<String>, dir_pwd: Option<String>) {
        self.default_file_pwd = file_pwd;
        self.default_dir_pwd = dir_pwd;
    }

    /// 当前上传目标类型
    pub fn upload_type(&self) -> Option<UploadType> {
        self.up_type
    }

    /// 同步执行上传，start() 在后台线程中调用的就是这里
    pub fn run(&self) {
        Self::execute(
            &self.disk,
            self.up_path.clone(),
            self.up_type,
            self.folder_id,
            self.default_file_pwd.clone(),
            self.default_dir_pwd.clone(),
            &self.state,
        );
    }

    fn execute(
        disk: &Arc<dyn NetdiskClient>,
        up_path: Option<PathBuf>,
        up_type: Option<UploadType>,
        folder_id: i64,
        default_file_pwd: Option<String>,
        default_dir_pwd: Option<String>,
        state: &TaskState,
    ) {
        let (path, up_type) = match (up_path, up_type) {
            (Some(path), Some(up_type)) => (path, up_type),
            _ => {
                warn!("上传任务未设置路径，直接结束");
                return;
            }
        };

        let progress = |_name: &str, total: u64, now: u64| state.update_progress(total, now);
        // 上传完成自动设置提取码，未配置时不触碰 SDK
        let uploaded = |fid: i64, is_file: bool| {
            apply_default_pwd(disk.as_ref(), fid, is_file, &default_file_pwd, &default_dir_pwd);
        };

        match up_type {
            UploadType::File => {
                let code = disk.upload_file(&path, folder_id, &progress, &uploaded);
                if !code.is_success() {
                    state.push_err(format!(
                        "文件上传失败: {} -> {}",
                        code.description(),
                        path.display()
                    ));
                }
            }
            UploadType::Folder => {
                let failed = |code: ResultCode, filename: &str| {
                    state.push_err(format!("上传失败: {} -> {}", code.description(), filename));
                };
                let code = disk.upload_dir(&path, folder_id, &progress, &failed, &uploaded);
                if !code.is_success() {
                    state.push_err(format!(
                        "文件夹上传失败: {} -> {}",
                        code.description(),
                        path.display()
                    ));
                }
            }
        }
        debug!("上传任务 [{}] 结束", state.task_id());
    }
}

/// 按文件/文件夹选择对应的默认提取码并应用
fn apply_default_pwd(
    disk: &dyn NetdiskClient,
    fid: i64,
    is_file: bool,
    default_file_pwd: &Option<String>,
    default_dir_pwd: &Option<String>,
) {
    let pwd = if is_file {
        default_file_pwd
    } else {
        default_dir_pwd
    };
    if let Some(pwd) = pwd {
        let code = disk.set_passwd(fid, pwd, is_file);
        if !code.is_success() {
            warn!("设置提取码失败: {} -> fid={}", code.description(), fid);
        }
    }
}

impl Task for Uploader {
    fn task_type(&self) -> TaskType {
        TaskType::Upload
    }

    fn state(&self) -> &TaskState {
        &self.state
    }

    fn describe(&self) -> String {
        let path = self
            .up_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<未设置>".to_string());
        let target = if self.folder_name.is_empty() {
            self.folder_id.to_string()
        } else {
            self.folder_name.clone()
        };
        format!("{} -> {}", path, target)
    }

    fn start(&self) {
        let mut handle = self.handle.lock();
        if handle.is_some() {
            warn!("上传任务 [{}] 已启动，忽略重复 start", self.task_id());
            return;
        }

        let disk = Arc::clone(&self.disk);
        let up_path = self.up_path.clone();
        let up_type = self.up_type;
        let folder_id = self.folder_id;
        let default_file_pwd = self.default_file_pwd.clone();
        let default_dir_pwd = self.default_dir_pwd.clone();
        let state = Arc::clone(&self.state);
        *handle = Some(std::thread::spawn(move || {
            Uploader::execute(
                &disk,
                up_path,
                up_type,
                folder_id,
                default_file_pwd,
                default_dir_pwd,
                &state,
            );
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
