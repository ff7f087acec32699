//! # 缩放与合成流水线模块
//!
//! ## 设计思路
//!
//! 所有产物都从同一张只读源图派生，源图本身从不被修改。
//! 缩放保持源图的颜色通道（无 alpha 的源图输出无 alpha 的全出血图标），
//! 只有前景层合成前才补齐 alpha 通道。
//!
//! ## 实现思路
//!
//! 1. 优先使用 `fast_image_resize` 卷积缩放
//! 2. 失败时回退 `image::resize_exact`（同一滤镜族）
//! 3. 前景层：透明画布 + 居中叠加按比例缩小的 logo

use fast_image_resize as fr;
use image::{DynamicImage, ImageBuffer, Rgb, Rgba, RgbaImage, imageops};

use super::source::SourceImage;
use super::tables::PaddingLayout;
use super::{IconConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 将源图缩放为 `size x size` 的全出血图标。
    pub(super) fn render_full_bleed(
        source: &SourceImage,
        size: u32,
        config: &IconConfig,
    ) -> Result<DynamicImage, IconError> {
        Self::resize_square(&source.image, size, config)
    }

    /// 生成自适应图标前景层：透明画布居中放置缩小后的 logo。
    pub(super) fn render_foreground(
        source: &SourceImage,
        layout: PaddingLayout,
        config: &IconConfig,
    ) -> Result<RgbaImage, IconError> {
        let mut canvas = RgbaImage::from_pixel(
            layout.canvas_size,
            layout.canvas_size,
            Rgba([0, 0, 0, 0]),
        );

        let resized = Self::resize_square(&source.image, layout.padded_size, config)?;
        let logo = Self::ensure_alpha(resized);

        // 以 logo 自身 alpha 作为遮罩，透明区域保持画布透明
        imageops::overlay(&mut canvas, &logo, layout.offset as i64, layout.offset as i64);

        Ok(canvas)
    }

    /// 无 alpha 通道时补一个完全不透明的 alpha。
    pub(super) fn ensure_alpha(image: DynamicImage) -> RgbaImage {
        match image {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => other.to_rgba8(),
        }
    }

    fn resize_square(
        image: &DynamicImage,
        size: u32,
        config: &IconConfig,
    ) -> Result<DynamicImage, IconError> {
        if size == 0 {
            return Err(IconError::InvalidConfig("目标尺寸不能为 0".to_string()));
        }

        match Self::resize_with_fast_image_resize(image, size, size, config) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                    err
                );
                let fallback = image.resize_exact(size, size, config.resize_filter.to_image_filter());
                Ok(if image.color().has_alpha() {
                    DynamicImage::ImageRgba8(fallback.to_rgba8())
                } else {
                    DynamicImage::ImageRgb8(fallback.to_rgb8())
                })
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &DynamicImage,
        target_width: u32,
        target_height: u32,
        config: &IconConfig,
    ) -> Result<DynamicImage, IconError> {
        let has_alpha = image.color().has_alpha();
        let (src_width, src_height, buffer, pixel_type) = if has_alpha {
            let rgba = image.to_rgba8();
            let (w, h) = rgba.dimensions();
            (w, h, rgba.into_raw(), fr::PixelType::U8x4)
        } else {
            let rgb = image.to_rgb8();
            let (w, h) = rgb.dimensions();
            (w, h, rgb.into_raw(), fr::PixelType::U8x3)
        };

        let src_image = fr::images::Image::from_vec_u8(src_width, src_height, buffer, pixel_type)
            .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, pixel_type);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            config.resize_filter.to_fast_filter(),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        let raw = dst_image.into_vec();
        let resized = if has_alpha {
            ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, raw)
                .map(DynamicImage::ImageRgba8)
        } else {
            ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(target_width, target_height, raw)
                .map(DynamicImage::ImageRgb8)
        };

        resized.ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }
}
