// 进度展示工具

use std::time::Instant;

/// 格式化字节数
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

/// 进度百分比
pub fn percent(now: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (now as f64 / total as f64) * 100.0
}

/// 根据相邻两次轮询估算传输速度
///
/// 采样间隔不足 200ms 时沿用上一次的速度，避免高频轮询抖动
#[derive(Debug)]
pub struct SpeedCalculator {
    last_at: Instant,
    last_bytes: u64,
    speed: u64,
}

impl SpeedCalculator {
    pub fn new() -> Self {
        Self {
            last_at: Instant::now(),
            last_bytes: 0,
            speed: 0,
        }
    }

    /// 提交一次采样，返回当前估算速度 (bytes/s)
    pub fn sample(&mut self, bytes: u64) -> u64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_at).as_secs_f64();
        if elapsed >= 0.2 {
            let diff = bytes.saturating_sub(self.last_bytes);
            self.speed = (diff as f64 / elapsed) as u64;
            self.last_at = now;
            self.last_bytes = bytes;
        }
        self.speed
    }

    /// 当前估算速度 (bytes/s)
    pub fn speed(&self) -> u64 {
        self.speed
    }
}

impl Default for SpeedCalculator {
    fn default() -> Self {
        Self::new()
    }
}
