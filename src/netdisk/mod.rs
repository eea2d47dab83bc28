// 网盘 SDK 边界模块
//
// 认证、HTTP 传输、目录遍历与断点重试都在外部 SDK 内部实现，
// 这里只定义任务层依赖的方法签名与状态码契约

pub mod types;
pub mod url;

#[cfg(test)]
pub mod mock;

pub use types::{FailedFile, ResultCode};
pub use url::{is_file_url, is_folder_url};

use std::path::Path;

/// 传输进度回调：(文件名, 总大小, 已完成大小)
///
/// 批量传输时按单个文件上报，已完成大小在文件之间会重新从 0 开始
pub type ProgressCallback<'a> = &'a (dyn Fn(&str, u64, u64) + Sync);

/// 批量下载失败回调：(状态码, 失败条目)
pub type FailedCallback<'a> = &'a (dyn Fn(ResultCode, &FailedFile) + Sync);

/// 批量上传失败回调：(状态码, 文件名)
pub type UploadFailedCallback<'a> = &'a (dyn Fn(ResultCode, &str) + Sync);

/// 上传完成回调：(文件(夹) ID, 是否为文件)
pub type UploadedHandler<'a> = &'a (dyn Fn(i64, bool) + Sync);

/// 网盘客户端接口
///
/// 外部 SDK 的方法表面，所有调用都是阻塞的，在任务线程中执行
pub trait NetdiskClient: Send + Sync {
    /// 通过分享链接下载文件
    fn down_file_by_url(
        &self,
        url: &str,
        pwd: &str,
        save_path: &Path,
        progress: ProgressCallback<'_>,
    ) -> ResultCode;

    /// 通过分享链接下载文件夹
    fn down_dir_by_url(
        &self,
        url: &str,
        pwd: &str,
        save_path: &Path,
        progress: ProgressCallback<'_>,
        mkdir: bool,
        failed: FailedCallback<'_>,
    ) -> ResultCode;

    /// 通过文件 ID 下载文件
    fn down_file_by_id(
        &self,
        fid: i64,
        save_path: &Path,
        progress: ProgressCallback<'_>,
    ) -> ResultCode;

    /// 通过文件夹 ID 下载文件夹
    fn down_dir_by_id(
        &self,
        fid: i64,
        save_path: &Path,
        progress: ProgressCallback<'_>,
        mkdir: bool,
        failed: FailedCallback<'_>,
    ) -> ResultCode;

    /// 上传文件到指定文件夹，每个文件上传完成后调用一次 uploaded
    fn upload_file(
        &self,
        path: &Path,
        folder_id: i64,
        progress: ProgressCallback<'_>,
        uploaded: UploadedHandler<'_>,
    ) -> ResultCode;

    /// 上传文件夹到指定文件夹
    fn upload_dir(
        &self,
        path: &Path,
        folder_id: i64,
        progress: ProgressCallback<'_>,
        failed: UploadFailedCallback<'_>,
        uploaded: UploadedHandler<'_>,
    ) -> ResultCode;

    /// 设置文件(夹)的提取码
    fn set_passwd(&self, fid: i64, passwd: &str, is_file: bool) -> ResultCode;
}
