// 网盘 SDK 状态码与数据类型

/// SDK 调用状态码
///
/// 与外部 SDK 的整数状态码一一对应：0 表示成功，9 表示缺少提取码，
/// 其余均为失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    /// 操作失败
    Failed,
    /// 成功
    Success,
    /// 文件(夹) ID 无效
    IdError,
    /// 网络异常
    NetworkError,
    /// 客户端版本过低
    VersionError,
    /// 本地路径错误
    PathError,
    /// 官方限制
    OfficialLimited,
    /// 验证码错误
    CaptchaError,
    /// 分享链接无效
    UrlInvalid,
    /// 分享已取消
    FileCancelled,
    /// 缺少提取码
    LackPassword,
    /// 解压失败
    ZipError,
    /// 创建文件夹失败
    MkdirError,
}

impl ResultCode {
    /// 从 SDK 整数状态码转换
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ResultCode::Success,
            1 => ResultCode::IdError,
            2 => ResultCode::NetworkError,
            3 => ResultCode::VersionError,
            4 => ResultCode::PathError,
            5 => ResultCode::OfficialLimited,
            6 => ResultCode::CaptchaError,
            7 => ResultCode::UrlInvalid,
            8 => ResultCode::FileCancelled,
            9 => ResultCode::LackPassword,
            10 => ResultCode::ZipError,
            11 => ResultCode::MkdirError,
            _ => ResultCode::Failed,
        }
    }

    /// 对应的 SDK 整数状态码
    pub fn code(&self) -> i32 {
        match self {
            ResultCode::Failed => -1,
            ResultCode::Success => 0,
            ResultCode::IdError => 1,
            ResultCode::NetworkError => 2,
            ResultCode::VersionError => 3,
            ResultCode::PathError => 4,
            ResultCode::OfficialLimited => 5,
            ResultCode::CaptchaError => 6,
            ResultCode::UrlInvalid => 7,
            ResultCode::FileCancelled => 8,
            ResultCode::LackPassword => 9,
            ResultCode::ZipError => 10,
            ResultCode::MkdirError => 11,
        }
    }

    /// 是否成功
    pub fn is_success(&self) -> bool {
        matches!(self, ResultCode::Success)
    }

    /// 是否缺少提取码
    pub fn lacks_password(&self) -> bool {
        matches!(self, ResultCode::LackPassword)
    }

    /// 获取失败原因的中文描述
    pub fn description(&self) -> &'static str {
        match self {
            ResultCode::Failed => "未知错误",
            ResultCode::Success => "成功",
            ResultCode::IdError => "文件(夹) ID 无效",
            ResultCode::NetworkError => "网络连接异常",
            ResultCode::VersionError => "客户端版本过低",
            ResultCode::PathError => "本地路径错误",
            ResultCode::OfficialLimited => "内容被官方限制",
            ResultCode::CaptchaError => "验证码错误",
            ResultCode::UrlInvalid => "分享链接无效",
            ResultCode::FileCancelled => "分享已取消",
            ResultCode::LackPassword => "缺少提取码",
            ResultCode::ZipError => "解压失败",
            ResultCode::MkdirError => "创建文件夹失败",
        }
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// 批量传输中单个失败条目的信息
///
/// 链接下载的条目带分享链接，ID 下载的条目带文件 ID
#[derive(Debug, Clone)]
pub struct FailedFile {
    /// 文件名
    pub name: String,
    /// 分享链接
    pub url: Option<String>,
    /// 文件 ID
    pub id: Option<i64>,
}

impl FailedFile {
    /// 创建带分享链接的失败条目
    pub fn from_url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            id: None,
        }
    }

    /// 创建带文件 ID 的失败条目
    pub fn from_id(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            url: None,
            id: Some(id),
        }
    }
}
