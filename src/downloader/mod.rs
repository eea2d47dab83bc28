pub mod task;

pub use task::{ConsolePrompter, DownType, Downloader, PasswordPrompter};
