// 公共模块（任务状态、任务接口与进度展示工具）

pub mod progress;
pub mod state;
pub mod task;

pub use progress::{format_size, percent, SpeedCalculator};
pub use state::TaskState;
pub use task::{Task, TaskType};
