//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 源图只加载一次，并在“尽可能早”的阶段执行输入校验：
//! 存在性 → 文件体积 → 文件签名 → 头部尺寸 → 完整解码。
//! 任一环节失败都发生在写盘之前，保证不会留下残缺的图标集。

use std::io::Cursor;
use std::path::Path;

use image::{GenericImageView, ImageReader};

use super::source::SourceImage;
use super::{IconConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 从本地文件加载并解码源图。
    pub(super) fn load_source(&self, config: &IconConfig) -> Result<SourceImage, IconError> {
        let path = config.source_path.as_path();
        log::info!("📁 开始读取源图 - 路径: {}", path.display());

        if !path.is_file() {
            return Err(IconError::MissingSource(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| IconError::UnreadableSource(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_source_bytes {
            return Err(IconError::ResourceLimit(format!(
                "源图文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_source_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| IconError::UnreadableSource(format!("无法读取源图文件：{}", e)))?;

        Self::decode_source(path, &bytes, config)
    }

    /// 校验签名与像素上限后完整解码。
    pub(super) fn decode_source(
        path: &Path,
        bytes: &[u8],
        config: &IconConfig,
    ) -> Result<SourceImage, IconError> {
        Self::validate_image_signature(bytes)?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let image = image::load_from_memory(bytes)
            .map_err(|e| IconError::Decode(format!("源图解码失败：{}", e)))?;

        let (width, height) = image.dimensions();
        Self::validate_pixel_limits(config, width, height)?;
        if width == 0 || height == 0 {
            return Err(IconError::Decode("源图尺寸为 0".to_string()));
        }

        log::info!(
            "✅ 源图解码成功 - {}x{} color={:?}",
            width,
            height,
            image.color()
        );

        Ok(SourceImage {
            path: path.to_path_buf(),
            image,
        })
    }

    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("源图内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| IconError::InvalidFormat("无法识别源图类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }

    /// 仅通过图片头信息读取宽高，用于完整解码前的像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), IconError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("源图像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "源图像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
