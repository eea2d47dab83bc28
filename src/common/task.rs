// 后台任务公共接口

use super::state::TaskState;
use serde::{Deserialize, Serialize};

/// 后台任务类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// 上传
    Upload,
    /// 下载
    Download,
}

impl TaskType {
    /// 获取类型的中文描述
    pub fn description(&self) -> &'static str {
        match self {
            TaskType::Upload => "上传",
            TaskType::Download => "下载",
        }
    }
}

/// 后台任务的统一轮询接口
///
/// 由下载任务和上传任务实现，管理器只通过该接口访问任务。
/// 任务只运行一次，结束后错误列表仍可读取
pub trait Task: Send + Sync {
    /// 任务类型
    fn task_type(&self) -> TaskType;

    /// 任务共享状态
    fn state(&self) -> &TaskState;

    /// 一行展示信息（目标链接、路径等）
    fn describe(&self) -> String;

    /// 启动后台线程，重复调用只记录日志
    fn start(&self);

    /// 后台线程是否仍在运行
    fn is_alive(&self) -> bool;

    /// 阻塞等待任务结束
    fn wait(&self);

    /// 任务 id
    fn task_id(&self) -> i64 {
        self.state().task_id()
    }

    /// 设置任务 id
    fn set_task_id(&self, id: i64) {
        self.state().set_task_id(id);
    }

    /// 当前进度：(已完成, 总大小)
    fn progress(&self) -> (u64, u64) {
        self.state().progress()
    }

    /// 后台运行期间收集的错误信息
    fn err_msgs(&self) -> Vec<String> {
        self.state().err_msgs()
    }
}
