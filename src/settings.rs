//! 生成配置加载
//!
//! 配置文件可选：工程根目录下的 `icons.json`，或环境变量
//! `ICON_GENERATOR_CONFIG` 指定的路径。文件不存在时使用默认布局。
//! 配置中的相对路径一律相对工程根目录解析。

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::icon_generator::IconConfig;

pub const CONFIG_FILE_NAME: &str = "icons.json";
pub const CONFIG_ENV_VAR: &str = "ICON_GENERATOR_CONFIG";

fn config_file_path(project_root: &Path) -> PathBuf {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => project_root.join(CONFIG_FILE_NAME),
    }
}

/// 加载工程根目录对应的生成配置。
pub fn load_config(project_root: &Path) -> Result<IconConfig, AppError> {
    load_config_from(project_root, &config_file_path(project_root))
}

pub fn load_config_from(project_root: &Path, config_path: &Path) -> Result<IconConfig, AppError> {
    if !config_path.exists() {
        log::debug!("未找到配置文件 {}，使用默认布局", config_path.display());
        return Ok(IconConfig::rooted_at(project_root));
    }

    let content = fs::read_to_string(config_path)?;
    let parsed = serde_json::from_str::<IconConfig>(&content).map_err(|e| AppError::Config {
        path: config_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::info!("⚙️ 已加载配置文件 {}", config_path.display());
    Ok(parsed.with_root(project_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon_generator::ResizeFilter;

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let temp = tempfile::tempdir().expect("tempdir failed");
        let config = load_config_from(temp.path(), &temp.path().join(CONFIG_FILE_NAME))
            .expect("defaults should load");

        assert_eq!(config.source_path, temp.path().join("www/assets/images/logo.png"));
        assert_eq!(config.favicon_sizes.len(), 6);
    }

    #[test]
    fn config_file_overrides_selected_fields() {
        let temp = tempfile::tempdir().expect("tempdir failed");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{ "source_path": "branding/logo.png", "resize_filter": "mitchell" }"#,
        )
        .expect("write config failed");

        let config = load_config_from(temp.path(), &path).expect("config should load");

        assert_eq!(config.source_path, temp.path().join("branding/logo.png"));
        assert_eq!(config.resize_filter, ResizeFilter::Mitchell);
        assert_eq!(config.android_res_dir, temp.path().join("android/app/src/main/res"));
    }

    #[test]
    fn malformed_config_file_is_reported() {
        let temp = tempfile::tempdir().expect("tempdir failed");
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").expect("write config failed");

        let result = load_config_from(temp.path(), &path);

        assert!(matches!(result, Err(AppError::Config { .. })));
    }
}
