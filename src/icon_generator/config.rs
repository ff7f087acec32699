//! # 配置模块
//!
//! ## 设计思路
//!
//! 将源图路径、输出目录、尺寸表与缩放策略集中到 `IconConfig`，
//! 生成入口只接收显式配置，不依赖模块级默认值，便于用合成源图做测试。
//!
//! ## 实现思路
//!
//! - `Default` 对应常规 Capacitor 工程布局（相对当前目录）。
//! - `rooted_at` 把同一布局挂到任意工程根目录下。
//! - `ResizeFilter` 负责滤镜字符串解析与反向输出，并拒绝最近邻。
//! - `validate` 在生成前统一做参数校验，尽早失败。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use fast_image_resize as fr;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::IconError;
use super::tables::{self, AndroidIcon, PaddingLayout};

pub const DEFAULT_SOURCE_PATH: &str = "www/assets/images/logo.png";
pub const DEFAULT_ANDROID_RES_DIR: &str = "android/app/src/main/res";
pub const DEFAULT_WEB_ASSETS_DIR: &str = "www/assets/images";

/// 图标生成配置。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// 源 logo 路径（推荐 512x512 带透明通道的 PNG）。
    pub source_path: PathBuf,
    /// Android `res` 目录，各密度写入其下的 `mipmap-<density>`。
    pub android_res_dir: PathBuf,
    /// favicon 输出目录。
    pub web_assets_dir: PathBuf,
    /// 前景层 logo 占画布的比例。
    pub foreground_scale: f64,
    /// 重采样滤镜。
    pub resize_filter: ResizeFilter,
    /// 源文件体积上限（字节）。
    pub max_source_bytes: u64,
    /// 源图解码后像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    pub android_icons: Vec<AndroidIcon>,
    pub favicon_sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            android_res_dir: PathBuf::from(DEFAULT_ANDROID_RES_DIR),
            web_assets_dir: PathBuf::from(DEFAULT_WEB_ASSETS_DIR),
            foreground_scale: tables::DEFAULT_FOREGROUND_SCALE,
            resize_filter: ResizeFilter::Lanczos3,
            max_source_bytes: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            android_icons: tables::default_android_icons(),
            favicon_sizes: tables::default_favicon_sizes(),
        }
    }
}

impl IconConfig {
    /// 以指定工程根目录构建默认布局。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use app_icon_generator::icon_generator::IconConfig;
    ///
    /// let config = IconConfig::rooted_at("/tmp/my-app");
    /// assert!(config.source_path.ends_with("www/assets/images/logo.png"));
    /// ```
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self::default().with_root(root)
    }

    /// 将相对路径挂到工程根目录下，绝对路径保持不变。
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.source_path = root.join(&self.source_path);
        self.android_res_dir = root.join(&self.android_res_dir);
        self.web_assets_dir = root.join(&self.web_assets_dir);
        self
    }

    pub fn foreground_layout(&self, size: u32) -> PaddingLayout {
        PaddingLayout::new(size, self.foreground_scale)
    }

    /// 生成前的参数校验。
    pub fn validate(&self) -> Result<(), IconError> {
        if !(self.foreground_scale > 0.0 && self.foreground_scale <= 1.0) {
            return Err(IconError::InvalidConfig(format!(
                "foreground_scale 必须在 (0, 1] 之间，当前：{}",
                self.foreground_scale
            )));
        }
        if self.android_icons.is_empty() && self.favicon_sizes.is_empty() {
            return Err(IconError::InvalidConfig("尺寸表为空，没有可生成的图标".to_string()));
        }
        if self.max_source_bytes == 0 || self.max_decoded_pixels == 0 {
            return Err(IconError::InvalidConfig("资源上限不能为 0".to_string()));
        }

        let mut densities = HashSet::new();
        for icon in &self.android_icons {
            let density = icon.density.trim();
            if density.is_empty() {
                return Err(IconError::InvalidConfig(format!(
                    "尺寸 {} 的密度限定符为空",
                    icon.size
                )));
            }
            if density.contains(['/', '\\']) || density.contains("..") {
                return Err(IconError::InvalidConfig(format!(
                    "密度限定符不能包含路径字符：{}",
                    icon.density
                )));
            }
            if !densities.insert(density.to_string()) {
                return Err(IconError::InvalidConfig(format!("密度限定符重复：{}", density)));
            }
            if icon.size == 0 {
                return Err(IconError::InvalidConfig(format!("{} 的尺寸不能为 0", density)));
            }
            if self.foreground_layout(icon.size).padded_size == 0 {
                return Err(IconError::InvalidConfig(format!(
                    "{} 尺寸 {} 过小，前景层缩放后为 0 像素",
                    density, icon.size
                )));
            }
        }

        let mut favicons = HashSet::new();
        for &size in &self.favicon_sizes {
            if size == 0 {
                return Err(IconError::InvalidConfig("favicon 尺寸不能为 0".to_string()));
            }
            if !favicons.insert(size) {
                return Err(IconError::InvalidConfig(format!("favicon 尺寸重复：{}", size)));
            }
        }

        Ok(())
    }
}

/// 重采样滤镜。
///
/// 只提供平滑类卷积滤镜，最近邻会在缩放图标时产生锯齿，不予支持。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResizeFilter {
    Lanczos3,
    CatmullRom,
    Mitchell,
}

impl ResizeFilter {
    pub fn parse(name: &str) -> Result<Self, IconError> {
        match name.trim().to_lowercase().as_str() {
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            "catmull_rom" | "catmullrom" => Ok(Self::CatmullRom),
            "mitchell" => Ok(Self::Mitchell),
            "nearest" => Err(IconError::InvalidConfig(
                "不支持最近邻滤镜，图标缩放需要平滑重采样".to_string(),
            )),
            other => Err(IconError::InvalidConfig(format!(
                "未知滤镜：{}（可选：lanczos3 / catmull_rom / mitchell）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lanczos3 => "lanczos3",
            Self::CatmullRom => "catmull_rom",
            Self::Mitchell => "mitchell",
        }
    }

    /// `fast_image_resize` 卷积滤镜。
    pub(crate) fn to_fast_filter(self) -> fr::FilterType {
        match self {
            Self::Lanczos3 => fr::FilterType::Lanczos3,
            Self::CatmullRom => fr::FilterType::CatmullRom,
            Self::Mitchell => fr::FilterType::Mitchell,
        }
    }

    /// `image::imageops` 回退路径使用的滤镜。
    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Mitchell => FilterType::Gaussian,
        }
    }
}

impl TryFrom<String> for ResizeFilter {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResizeFilter> for String {
    fn from(filter: ResizeFilter) -> Self {
        filter.as_str().to_string()
    }
}
