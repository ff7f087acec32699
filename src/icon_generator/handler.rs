//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不直接接触命令行与控制台输出。
//! 处理链路固定为：
//! 1. 校验配置
//! 2. 加载并解码源图（失败即软失败返回，不写任何文件）
//! 3. 遍历 Android 尺寸表：全出血图标 + 圆形图标 + 前景层
//! 4. 遍历 favicon 尺寸表
//!
//! ## 实现思路
//!
//! - 写盘失败立即中断，错误中携带已完成的文件列表，便于用户判断残留产物。
//! - 记录 `load/android/favicon/total` 阶段耗时。
//! - 源图在两张表处理完后立即释放。

use std::path::PathBuf;
use std::time::Instant;

use image::DynamicImage;

use super::source::{
    AssetKind, GeneratedAsset, GenerationOutcome, GenerationReport, SourceImage, SourceProblem,
};
use super::tables::{AndroidIcon, SizeSpec};
use super::{IconConfig, IconError};

const LAUNCHER_FILE: &str = "ic_launcher.png";
const LAUNCHER_ROUND_FILE: &str = "ic_launcher_round.png";
const LAUNCHER_FOREGROUND_FILE: &str = "ic_launcher_foreground.png";

/// 图标生成器。
pub struct IconGenerator {
    config: IconConfig,
}

/// 单轮生成过程中的写盘进度。
#[derive(Default)]
struct Progress {
    written: Vec<PathBuf>,
    assets: Vec<GeneratedAsset>,
}

impl IconGenerator {
    /// 校验配置并创建生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use app_icon_generator::icon_generator::{IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::rooted_at("."))?;
    /// let outcome = generator.generate()?;
    /// # Ok::<(), app_icon_generator::icon_generator::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 生成主入口。
    ///
    /// 源图缺失或无法解码时返回 `GenerationOutcome::SourceUnavailable`，不视为错误。
    /// 写盘失败返回 `IconError::Interrupted`。
    pub fn generate(&self) -> Result<GenerationOutcome, IconError> {
        let config = &self.config;
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = match self.load_source(config) {
            Ok(source) => source,
            Err(err) if err.is_source_problem() => {
                log::warn!("⚠️ 源图不可用，跳过生成：{}", err);
                return Ok(GenerationOutcome::SourceUnavailable(SourceProblem {
                    path: config.source_path.clone(),
                    missing: matches!(err, IconError::MissingSource(_)),
                    reason: err.to_string(),
                }));
            }
            Err(err) => return Err(err),
        };
        let load_elapsed = load_start.elapsed();

        if !source.has_alpha() {
            log::warn!("⚠️ 源图没有透明通道，前景层中的 logo 将是不透明方块");
        }

        if !source.is_square() {
            log::warn!(
                "⚠️ 源图不是正方形（{}x{}），输出图标会被拉伸",
                source.width(),
                source.height()
            );
        }

        let mut progress = Progress::default();

        let android_start = Instant::now();
        for icon in &config.android_icons {
            self.generate_android_icon(&source, icon, &mut progress)
                .map_err(|err| Self::interrupted(err, &progress))?;
        }
        let android_elapsed = android_start.elapsed();

        let favicon_start = Instant::now();
        for &size in &config.favicon_sizes {
            self.generate_favicon(&source, size, &mut progress)
                .map_err(|err| Self::interrupted(err, &progress))?;
        }
        let favicon_elapsed = favicon_start.elapsed();

        drop(source);

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 图标生成完成 - load={}ms android={}ms favicon={}ms total={}ms",
            load_elapsed.as_millis(),
            android_elapsed.as_millis(),
            favicon_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(GenerationOutcome::Completed(GenerationReport {
            source_path: config.source_path.clone(),
            assets: progress.assets,
            elapsed: total_elapsed,
        }))
    }

    fn generate_android_icon(
        &self,
        source: &SourceImage,
        icon: &AndroidIcon,
        progress: &mut Progress,
    ) -> Result<(), IconError> {
        let config = &self.config;
        let spec = icon.size_spec();
        let icon_dir = config.android_res_dir.join(icon.directory_name());
        Self::ensure_dir(&icon_dir)?;

        let layout = config.foreground_layout(spec.pixel_size);
        let foreground = Self::render_foreground(source, layout, config)?;
        let full_bleed = Self::render_full_bleed(source, spec.pixel_size, config)?;

        let launcher = icon_dir.join(LAUNCHER_FILE);
        let launcher_round = icon_dir.join(LAUNCHER_ROUND_FILE);
        Self::write_png(
            &full_bleed,
            &[launcher.clone(), launcher_round.clone()],
            &mut progress.written,
        )?;

        let foreground_path = icon_dir.join(LAUNCHER_FOREGROUND_FILE);
        Self::write_png(
            &DynamicImage::ImageRgba8(foreground),
            std::slice::from_ref(&foreground_path),
            &mut progress.written,
        )?;

        for (kind, path) in [
            (AssetKind::Launcher, launcher),
            (AssetKind::LauncherRound, launcher_round),
            (AssetKind::LauncherForeground, foreground_path),
        ] {
            progress.assets.push(GeneratedAsset {
                kind,
                path,
                size: spec.pixel_size,
                label: spec.label.clone(),
            });
        }

        log::info!("✅ 已生成 {0}x{0} 启动图标（{1}）", spec.pixel_size, spec.label);
        Ok(())
    }

    fn generate_favicon(
        &self,
        source: &SourceImage,
        size: u32,
        progress: &mut Progress,
    ) -> Result<(), IconError> {
        let config = &self.config;
        let spec = SizeSpec::favicon(size);
        Self::ensure_dir(&config.web_assets_dir)?;

        let favicon = Self::render_full_bleed(source, spec.pixel_size, config)?;
        let path = config.web_assets_dir.join(format!("favicon-{}.png", spec.label));
        Self::write_png(&favicon, std::slice::from_ref(&path), &mut progress.written)?;

        log::info!("✅ 已生成 favicon-{}.png（源图：{}）", spec.label, source.path.display());
        progress.assets.push(GeneratedAsset {
            kind: AssetKind::Favicon,
            path,
            size: spec.pixel_size,
            label: spec.label,
        });
        Ok(())
    }

    fn interrupted(err: IconError, progress: &Progress) -> IconError {
        log::error!(
            "❌ 图标生成中断，已完成 {} 个文件：{}",
            progress.written.len(),
            err
        );
        IconError::Interrupted {
            completed: progress.written.clone(),
            source: Box::new(err),
        }
    }
}
