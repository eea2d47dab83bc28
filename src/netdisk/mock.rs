// 测试用的脚本化网盘客户端

use super::{
    FailedCallback, FailedFile, NetdiskClient, ProgressCallback, ResultCode, UploadFailedCallback,
    UploadedHandler,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// MockDisk 记录的一次调用
#[derive(Debug, Clone, PartialEq)]
pub enum DiskCall {
    DownFileByUrl { url: String, pwd: String },
    DownDirByUrl { url: String, pwd: String, mkdir: bool },
    DownFileById { fid: i64 },
    DownDirById { fid: i64, mkdir: bool },
    UploadFile { path: PathBuf, folder_id: i64 },
    UploadDir { path: PathBuf, folder_id: i64 },
    SetPasswd { fid: i64, passwd: String, is_file: bool },
}

/// 脚本化的网盘客户端
///
/// 按脚本依次返回状态码并回放进度/失败/完成回调，同时记录全部调用
#[derive(Default)]
pub struct MockDisk {
    /// 依次返回的状态码，用尽后一律返回 Success
    codes: Mutex<VecDeque<ResultCode>>,
    /// 记录的调用序列
    pub calls: Mutex<Vec<DiskCall>>,
    /// 每次传输调用时回放的进度序列：(文件名, 总大小, 已完成大小)
    progress_script: Vec<(String, u64, u64)>,
    /// 目录传输时回放的失败条目
    failed_script: Vec<(ResultCode, FailedFile)>,
    /// 上传成功时回放的完成回调：(fid, 是否为文件)
    uploaded_script: Vec<(i64, bool)>,
    /// 传输调用的模拟耗时
    delay: Option<Duration>,
}

impl MockDisk {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定依次返回的状态码
    pub fn with_codes(mut self, codes: Vec<ResultCode>) -> Self {
        self.codes = Mutex::new(codes.into());
        self
    }

    /// 指定传输时回放的进度序列
    pub fn with_progress(mut self, script: Vec<(&str, u64, u64)>) -> Self {
        self.progress_script = script
            .into_iter()
            .map(|(name, total, now)| (name.to_string(), total, now))
            .collect();
        self
    }

    /// 指定目录传输时回放的失败条目
    pub fn with_failures(mut self, script: Vec<(ResultCode, FailedFile)>) -> Self {
        self.failed_script = script;
        self
    }

    /// 指定上传成功时回放的完成回调
    pub fn with_uploaded(mut self, script: Vec<(i64, bool)>) -> Self {
        self.uploaded_script = script;
        self
    }

    /// 让每次传输调用阻塞一段时间，用于测试存活状态
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// 已记录的调用
    pub fn recorded_calls(&self) -> Vec<DiskCall> {
        self.calls.lock().clone()
    }

    fn next_code(&self) -> ResultCode {
        self.codes.lock().pop_front().unwrap_or(ResultCode::Success)
    }

    fn simulate_transfer(&self, progress: ProgressCallback<'_>) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        for (name, total, now) in &self.progress_script {
            progress(name, *total, *now);
        }
    }

    fn replay_failures(&self, failed: FailedCallback<'_>) {
        for (code, file) in &self.failed_script {
            failed(*code, file);
        }
    }
}

impl NetdiskClient for MockDisk {
    fn down_file_by_url(
        &self,
        url: &str,
        pwd: &str,
        _save_path: &Path,
        progress: ProgressCallback<'_>,
    ) -> ResultCode {
        self.calls.lock().push(DiskCall::DownFileByUrl {
            url: url.to_string(),
            pwd: pwd.to_string(),
        });
        self.simulate_transfer(progress);
        self.next_code()
    }

    fn down_dir_by_url(
        &self,
        url: &str,
        pwd: &str,
        _save_path: &Path,
        progress: ProgressCallback<'_>,
        mkdir: bool,
        failed: FailedCallback<'_>,
    ) -> ResultCode {
        self.calls.lock().push(DiskCall::DownDirByUrl {
            url: url.to_string(),
            pwd: pwd.to_string(),
            mkdir,
        });
        self.simulate_transfer(progress);
        let code = self.next_code();
        if !code.lacks_password() {
            self.replay_failures(failed);
        }
        code
    }

    fn down_file_by_id(
        &self,
        fid: i64,
        _save_path: &Path,
        progress: ProgressCallback<'_>,
    ) -> ResultCode {
        self.calls.lock().push(DiskCall::DownFileById { fid });
        self.simulate_transfer(progress);
        self.next_code()
    }

    fn down_dir_by_id(
        &self,
        fid: i64,
        _save_path: &Path,
        progress: ProgressCallback<'_>,
        mkdir: bool,
        failed: FailedCallback<'_>,
    ) -> ResultCode {
        self.calls.lock().push(DiskCall::DownDirById { fid, mkdir });
        self.simulate_transfer(progress);
        let code = self.next_code();
        if !code.lacks_password() {
            self.replay_failures(failed);
        }
        code
    }

    fn upload_file(
        &self,
        path: &Path,
        folder_id: i64,
        progress: ProgressCallback<'_>,
        uploaded: UploadedHandler<'_>,
    ) -> ResultCode {
        self.calls.lock().push(DiskCall::UploadFile {
            path: path.to_path_buf(),
            folder_id,
        });
        self.simulate_transfer(progress);
        let code = self.next_code();
        if code.is_success() {
            for (fid, is_file) in &self.uploaded_script {
                uploaded(*fid, *is_file);
            }
        }
        code
    }

    fn upload_dir(
        &self,
        path: &Path,
        folder_id: i64,
        progress: ProgressCallback<'_>,
        failed: UploadFailedCallback<'_>,
        uploaded: UploadedHandler<'_>,
    ) -> ResultCode {
        self.calls.lock().push(DiskCall::UploadDir {
            path: path.to_path_buf(),
            folder_id,
        });
        self.simulate_transfer(progress);
        for (code, file) in &self.failed_script {
            failed(*code, &file.name);
        }
        let code = self.next_code();
        if code.is_success() {
            for (fid, is_file) in &self.uploaded_script {
                uploaded(*fid, *is_file);
            }
        }
        code
    }

    fn set_passwd(&self, fid: i64, passwd: &str, is_file: bool) -> ResultCode {
        self.calls.lock().push(DiskCall::SetPasswd {
            fid,
            passwd: passwd.to_string(),
            is_file,
        });
        self.next_code()
    }
}
