// 后台任务管理
//
// 登记任务、分配任务 id、启动后台线程，并向前端提供轮询快照

use crate::common::{format_size, percent, SpeedCalculator, Task, TaskType};
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::info;

/// 任务展示快照
#[derive(Debug, Clone, Serialize)]
pub struct TaskSnapshot {
    /// 任务 id
    pub id: i64,
    /// 任务类型
    pub kind: TaskType,
    /// 已完成字节数
    pub now_size: u64,
    /// 总字节数
    pub total_size: u64,
    /// 进度百分比
    pub percent: f64,
    /// 传输速度 (bytes/s)
    pub speed: u64,
    /// 后台线程是否仍在运行
    pub alive: bool,
    /// 展示信息（目标链接、路径等）
    pub info: String,
    /// 已收集的错误信息
    pub err_msgs: Vec<String>,
}

impl fmt::Display for TaskSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {:.1}% {}/{} {}/s {}",
            self.id,
            self.kind.description(),
            self.percent,
            format_size(self.now_size),
            format_size(self.total_size),
            format_size(self.speed),
            self.info
        )
    }
}

/// 后台任务管理器
///
/// 任务按登记顺序保存，id 从 1 开始递增分配。
/// 没有取消与超时，任务只运行一次
pub struct TaskManager {
    /// 按登记顺序保存的任务
    tasks: Mutex<Vec<Arc<dyn Task>>>,
    /// 速度采样，任务 id -> 采样器
    speed: DashMap<i64, SpeedCalculator>,
    /// 下一个待分配的任务 id
    next_id: AtomicI64,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            speed: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// 登记任务：分配 id 并启动后台线程，返回分配的 id
    pub fn add_task(&self, task: Arc<dyn Task>) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        task.set_task_id(id);
        info!(
            "启动{}任务 [{}]: {}",
            task.task_type().description(),
            id,
            task.describe()
        );
        task.start();
        self.tasks.lock().push(task);
        id
    }

    /// 是否没有任何任务
    pub fn is_empty(&self) -> bool {
        self.tasks.lock().is_empty()
    }

    /// 已登记的任务数
    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    /// 按 id 查找任务
    pub fn get(&self, id: i64) -> Option<Arc<dyn Task>> {
        self.tasks
            .lock()
            .iter()
            .find(|task| task.task_id() == id)
            .cloned()
    }

    /// 是否仍有任务在运行
    pub fn has_alive_task(&self) -> bool {
        self.tasks.lock().iter().any(|task| task.is_alive())
    }

    /// 生成全部任务的展示快照，按登记顺序排列
    pub fn snapshots(&self) -> Vec<TaskSnapshot> {
        let tasks = self.tasks.lock();
        tasks
            .iter()
            .map(|task| {
                let id = task.task_id();
                let (now_size, total_size) = task.progress();
                let speed = self
                    .speed
                    .entry(id)
                    .or_insert_with(SpeedCalculator::new)
                    .sample(now_size);
                TaskSnapshot {
                    id,
                    kind: task.task_type(),
                    now_size,
                    total_size,
                    percent: percent(now_size, total_size),
                    speed,
                    alive: task.is_alive(),
                    info: task.describe(),
                    err_msgs: task.err_msgs(),
                }
            })
            .collect()
    }

    /// 收集所有任务的错误信息，跳过没有错误的任务
    pub fn collect_errors(&self) -> Vec<(i64, Vec<String>)> {
        self.tasks
            .lock()
            .iter()
            .map(|task| (task.task_id(), task.err_msgs()))
            .filter(|(_, msgs)| !msgs.is_empty())
            .collect()
    }

    /// 阻塞等待全部任务结束
    pub fn wait_all(&self) {
        let tasks: Vec<_> = self.tasks.lock().clone();
        for task in tasks {
            task.wait();
        }
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
