//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError`，把配置加载与图标生成两类错误收拢到一个出口，
//! `main` 只需根据分支决定提示文案与退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use std::path::PathBuf;

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 配置文件无法读取或解析
    #[error("配置文件 '{}' 无效: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// 图标生成流水线错误（加载 / 缩放 / 写盘）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 中断前已经写入的文件（仅写盘中断时非空）。
    pub fn completed_files(&self) -> &[PathBuf] {
        match self {
            Self::Icon(IconError::Interrupted { completed, .. }) => completed,
            _ => &[],
        }
    }
}
