//! # App 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 · 加载配置 · 控制台提示     │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<GenerationOutcome, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  ├─ settings ─── icons.json (serde_json) → IconConfig     │
//! │  └─ icon_generator                                       │
//! │      ├─ loader    源图读取·校验·解码                      │
//! │      ├─ pipeline  缩放 (fast_image_resize) · 前景层合成   │
//! │      └─ writer    mipmap-<density>/ · favicon-<N>.png     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`settings`] | 可选 JSON 配置文件的定位与解析 |
//! | [`icon_generator`] | 从单张 logo 生成 Android 启动图标与网页 favicon |

pub mod error;
pub mod icon_generator;
pub mod settings;

use std::path::Path;

use error::AppError;
use icon_generator::{GenerationOutcome, IconGenerator};

/// 按工程根目录加载配置并执行一轮生成。
pub fn run(project_root: &Path) -> Result<GenerationOutcome, AppError> {
    let config = settings::load_config(project_root)?;
    let generator = IconGenerator::new(config)?;
    Ok(generator.generate()?)
}
