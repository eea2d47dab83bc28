// 任务共享状态

use parking_lot::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use tracing::warn;

/// 后台任务的共享状态
///
/// 工作线程写入，轮询方并发读取。进度计数只用于展示，
/// 读写都使用 Relaxed 即可
#[derive(Debug)]
pub struct TaskState {
    /// 任务 id，由管理器分配，-1 表示未分配
    task_id: AtomicI64,
    /// 已完成字节数
    now_size: AtomicU64,
    /// 总字节数，初始为 1，避免进度计算除零
    total_size: AtomicU64,
    /// 后台运行期间收集的错误信息，只增不减
    err_msg: Mutex<Vec<String>>,
    /// 创建时间 (Unix timestamp)
    created_at: i64,
}

impl TaskState {
    pub fn new() -> Self {
        Self {
            task_id: AtomicI64::new(-1),
            now_size: AtomicU64::new(0),
            total_size: AtomicU64::new(1),
            err_msg: Mutex::new(Vec::new()),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// 设置任务 id
    pub fn set_task_id(&self, id: i64) {
        self.task_id.store(id, Ordering::Relaxed);
    }

    /// 获取任务 id
    pub fn task_id(&self) -> i64 {
        self.task_id.load(Ordering::Relaxed)
    }

    /// 更新进度，由 SDK 的进度回调调用
    pub fn update_progress(&self, total: u64, now: u64) {
        self.total_size.store(total, Ordering::Relaxed);
        self.now_size.store(now, Ordering::Relaxed);
    }

    /// 获取进度：(已完成, 总大小)
    pub fn progress(&self) -> (u64, u64) {
        (
            self.now_size.load(Ordering::Relaxed),
            self.total_size.load(Ordering::Relaxed),
        )
    }

    /// 记录一条错误信息
    pub fn push_err(&self, msg: String) {
        warn!("任务 [{}] {}", self.task_id(), msg);
        self.err_msg.lock().push(msg);
    }

    /// 获取已收集的错误信息
    pub fn err_msgs(&self) -> Vec<String> {
        self.err_msg.lock().clone()
    }

    /// 创建时间 (Unix timestamp)
    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}

impl Default for TaskState {
    fn default() -> Self {
        Self::new()
    }
}
