//! # 写盘模块
//!
//! 负责幂等地创建输出目录、将图像编码为 PNG 并写入一个或多个路径。
//! 同一份编码结果写入多个文件，保证 `ic_launcher.png` 与
//! `ic_launcher_round.png` 字节完全一致。

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use super::{IconError, IconGenerator};

impl IconGenerator {
    /// 递归创建目录，目录已存在时不报错。
    pub(super) fn ensure_dir(dir: &Path) -> Result<(), IconError> {
        fs::create_dir_all(dir).map_err(|e| {
            IconError::FileSystem(format!("创建目录 '{}' 失败：{}", dir.display(), e))
        })
    }

    pub(super) fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, IconError> {
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
        Ok(cursor.into_inner())
    }

    /// 把同一份 PNG 字节写入所有目标路径（存在则覆盖）。
    pub(super) fn write_png(
        image: &DynamicImage,
        paths: &[PathBuf],
        written: &mut Vec<PathBuf>,
    ) -> Result<(), IconError> {
        let bytes = Self::encode_png(image)?;

        for path in paths {
            fs::write(path, &bytes).map_err(|e| {
                IconError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), e))
            })?;
            written.push(path.clone());
        }

        Ok(())
    }
}
