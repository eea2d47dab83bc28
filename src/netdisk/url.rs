// 分享链接识别
//
// 文件分享链接形如 https://xxx.lanzoui.com/iAb1c2d
// 文件夹分享链接形如 https://xxx.lanzoui.com/b0abc123x

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 文件分享链接
    static ref FILE_URL_RE: Regex =
        Regex::new(r"^https?://[a-zA-Z0-9\-]*\.?lanzou[a-z]\.com/(?:tp/)?i[a-zA-Z0-9]{4,}/?$")
            .unwrap();
    /// 文件夹分享链接
    static ref FOLDER_URL_RE: Regex =
        Regex::new(r"^https?://[a-zA-Z0-9\-]*\.?lanzou[a-z]\.com/b[a-zA-Z0-9]{6,}/?$").unwrap();
}

/// 是否为文件分享链接
pub fn is_file_url(url: &str) -> bool {
    FILE_URL_RE.is_match(url)
}

/// 是否为文件夹分享链接
pub fn is_folder_url(url: &str) -> bool {
    !is_file_url(url) && FOLDER_URL_RE.is_match(url)
}
