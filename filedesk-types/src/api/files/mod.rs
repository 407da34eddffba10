pub mod count;
pub mod r#move;
pub mod preview;
pub mod rename;

use crate::fs::FileInfo;

pub const ENDPOINT: &str = "/files";

/// Query parameter naming the directory for `/files` and `/files/count`.
pub const DIR_PATH: &str = "dir_path";

pub type Response = Vec<FileInfo>;
