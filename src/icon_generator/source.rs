//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入”和“生成结果”解耦：
//! - `SourceImage` 表示已解码、只读的源图
//! - `GeneratedAsset` / `GenerationReport` 表示已写盘的产物清单
//! - `GenerationOutcome` 区分“正常完成”和“源图不可用（软失败）”

use std::path::PathBuf;
use std::time::Duration;

use image::DynamicImage;

/// 已解码的源 logo。
///
/// 整轮生成期间只读，所有缩放结果都从它派生。
pub struct SourceImage {
    pub(crate) path: PathBuf,
    pub(crate) image: DynamicImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}

/// 产物所属平台。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// 全出血启动图标（`ic_launcher.png`）。
    Launcher,
    /// 圆形启动图标（与 `Launcher` 内容一致）。
    LauncherRound,
    /// 自适应图标前景层。
    LauncherForeground,
    Favicon,
}

/// 单个已写入文件。
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub size: u32,
    /// 密度限定符或 favicon 尺寸。
    pub label: String,
}

/// 一轮生成的产物清单。
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// 本轮使用的源图路径。
    pub source_path: PathBuf,
    pub assets: Vec<GeneratedAsset>,
    pub elapsed: Duration,
}

impl GenerationReport {
    pub fn android_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|asset| asset.kind != AssetKind::Favicon)
            .count()
    }

    pub fn favicon_count(&self) -> usize {
        self.assets
            .iter()
            .filter(|asset| asset.kind == AssetKind::Favicon)
            .count()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.assets.iter().map(|asset| asset.path.clone()).collect()
    }
}

/// 源图为何不可用。
#[derive(Debug, Clone)]
pub struct SourceProblem {
    pub path: PathBuf,
    pub reason: String,
    /// 源文件根本不存在（区别于存在但无法解码）。
    pub missing: bool,
}

/// 生成入口的结果。
#[derive(Debug)]
pub enum GenerationOutcome {
    Completed(GenerationReport),
    /// 源图缺失或无法解码：未写入任何文件。
    SourceUnavailable(SourceProblem),
}
