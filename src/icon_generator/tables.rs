//! # 尺寸表模块
//!
//! ## 设计思路
//!
//! Android 与 favicon 的尺寸表以纯数据形式声明，生成算法只负责遍历，
//! 增删档位无需改动流水线代码。
//!
//! `PaddingLayout` 是从尺寸推导出的前景层布局，不做存储。

use serde::{Deserialize, Serialize};

/// 默认前景层缩放比例：logo 占 70%，四周留 30% 透明边距。
pub const DEFAULT_FOREGROUND_SCALE: f64 = 0.7;

/// 默认 Android 启动图标档位（像素尺寸 + 密度限定符）。
pub const ANDROID_ICON_TABLE: [(u32, &str); 6] = [
    (36, "ldpi"),
    (48, "mdpi"),
    (72, "hdpi"),
    (96, "xhdpi"),
    (144, "xxhdpi"),
    (192, "xxxhdpi"),
];

/// 默认 favicon 尺寸。
pub const FAVICON_TABLE: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// 单个目标尺寸。
///
/// `label` 对 Android 为密度限定符（如 `mdpi`），对 favicon 为尺寸本身。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSpec {
    pub pixel_size: u32,
    pub label: String,
}

impl SizeSpec {
    pub fn favicon(pixel_size: u32) -> Self {
        Self {
            pixel_size,
            label: pixel_size.to_string(),
        }
    }
}

/// Android 档位配置项（可由 JSON 配置覆盖）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidIcon {
    pub size: u32,
    pub density: String,
}

impl AndroidIcon {
    pub fn size_spec(&self) -> SizeSpec {
        SizeSpec {
            pixel_size: self.size,
            label: self.density.clone(),
        }
    }

    /// 输出目录名，如 `mipmap-xhdpi`。
    pub fn directory_name(&self) -> String {
        format!("mipmap-{}", self.density)
    }
}

pub fn default_android_icons() -> Vec<AndroidIcon> {
    ANDROID_ICON_TABLE
        .iter()
        .map(|(size, density)| AndroidIcon {
            size: *size,
            density: (*density).to_string(),
        })
        .collect()
}

pub fn default_favicon_sizes() -> Vec<u32> {
    FAVICON_TABLE.to_vec()
}

/// 自适应图标前景层布局。
///
/// 满足 `offset * 2 + padded_size <= canvas_size`，取整可能留下 1px 余量。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingLayout {
    pub canvas_size: u32,
    pub padded_size: u32,
    pub offset: u32,
}

impl PaddingLayout {
    pub fn new(canvas_size: u32, scale: f64) -> Self {
        let padded_size = ((canvas_size as f64 * scale).floor() as u32).min(canvas_size);
        let offset = (canvas_size - padded_size) / 2;
        Self {
            canvas_size,
            padded_size,
            offset,
        }
    }

    /// 像素是否落在居中的前景方块内。
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let end = self.offset + self.padded_size;
        (self.offset..end).contains(&x) && (self.offset..end).contains(&y)
    }
}
