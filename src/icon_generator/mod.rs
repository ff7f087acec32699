//! # 图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块将“配置校验 → 源图加载 → 缩放合成 → 写盘”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条生成流程
//! - `loader`：负责源图读取、签名与像素限制校验、解码
//! - `pipeline`：负责缩放、补 alpha、前景层合成
//! - `writer`：负责目录创建与 PNG 写盘
//! - `tables`：Android / favicon 尺寸表与前景层布局
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs（加载配置、打印提示）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（读取 + 校验 + 解码）
//!    ├─ pipeline.rs（全出血缩放 / 前景层合成）
//!    └─ writer.rs（建目录 + 写 PNG）
//!    ↓
//! GenerationOutcome / IconError
//! ```

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod tables;
mod writer;

pub use config::{
    DEFAULT_ANDROID_RES_DIR, DEFAULT_SOURCE_PATH, DEFAULT_WEB_ASSETS_DIR, IconConfig, ResizeFilter,
};
pub use error::IconError;
pub use handler::IconGenerator;
pub use source::{
    AssetKind, GeneratedAsset, GenerationOutcome, GenerationReport, SourceImage, SourceProblem,
};
pub use tables::{
    ANDROID_ICON_TABLE, AndroidIcon, DEFAULT_FOREGROUND_SCALE, FAVICON_TABLE, PaddingLayout,
    SizeSpec,
};
