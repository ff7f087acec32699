//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 加载阶段的错误（不存在、无法读取、无法解码、超限）属于“软失败”，由 `handler`
//! 转换为 `GenerationOutcome::SourceUnavailable`；写盘错误会中断整轮生成。

use std::path::PathBuf;

/// 图标生成统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图不存在：{}", .0.display())]
    MissingSource(PathBuf),

    #[error("源图无法读取：{0}")]
    UnreadableSource(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),

    /// 中途失败：记录失败前已经写入的文件。
    #[error("生成中断（已完成 {} 个文件）：{source}", .completed.len())]
    Interrupted {
        completed: Vec<PathBuf>,
        #[source]
        source: Box<IconError>,
    },
}

impl IconError {
    /// 是否属于“源图不可用”类错误。
    ///
    /// 这类错误只会在加载阶段产生，此时尚未写入任何文件。
    pub fn is_source_problem(&self) -> bool {
        matches!(
            self,
            Self::MissingSource(_)
                | Self::UnreadableSource(_)
                | Self::Decode(_)
                | Self::InvalidFormat(_)
                | Self::ResourceLimit(_)
        )
    }
}
