// End-to-end checks of the generated icon tree against synthetic logos
use std::fs;
use std::path::{Path, PathBuf};

use app_icon_generator::icon_generator::{
    ANDROID_ICON_TABLE, FAVICON_TABLE, GenerationOutcome, IconConfig, IconGenerator, PaddingLayout,
    DEFAULT_FOREGROUND_SCALE,
};
use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

fn write_solid_logo(config: &IconConfig, size: u32, color: Rgba<u8>) {
    write_image(
        &config.source_path,
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, color)),
    );
}

fn write_image(path: &Path, image: DynamicImage) {
    fs::create_dir_all(path.parent().expect("logo path has parent")).expect("create dir failed");
    image
        .save_with_format(path, ImageFormat::Png)
        .expect("save logo failed");
}

fn mipmap_file(config: &IconConfig, density: &str, name: &str) -> PathBuf {
    config
        .android_res_dir
        .join(format!("mipmap-{}", density))
        .join(name)
}

fn generate(config: &IconConfig) -> GenerationOutcome {
    IconGenerator::new(config.clone())
        .expect("generator init failed")
        .generate()
        .expect("generate failed")
}

fn is_reddish(pixel: &Rgba<u8>) -> bool {
    pixel.0[0] >= 250 && pixel.0[1] <= 5 && pixel.0[2] <= 5 && pixel.0[3] >= 250
}

#[test]
fn launcher_icons_have_exact_dimensions() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_solid_logo(&config, 512, Rgba([30, 60, 90, 255]));

    generate(&config);

    for (size, density) in ANDROID_ICON_TABLE {
        for name in ["ic_launcher.png", "ic_launcher_round.png", "ic_launcher_foreground.png"] {
            let icon = image::open(mipmap_file(&config, density, name)).expect("open icon failed");
            assert_eq!(icon.dimensions(), (size, size), "{} {}", density, name);
        }
    }
}

#[test]
fn foreground_is_transparent_outside_padded_square() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_solid_logo(&config, 512, Rgba([255, 0, 0, 255]));

    generate(&config);

    for (size, density) in ANDROID_ICON_TABLE {
        let layout = PaddingLayout::new(size, DEFAULT_FOREGROUND_SCALE);
        let foreground = image::open(mipmap_file(&config, density, "ic_launcher_foreground.png"))
            .expect("open foreground failed")
            .to_rgba8();

        for (x, y, pixel) in foreground.enumerate_pixels() {
            if !layout.contains(x, y) {
                assert_eq!(pixel.0[3], 0, "{} pixel ({}, {}) must be transparent", density, x, y);
            }
        }
    }
}

#[test]
fn red_logo_produces_expected_mdpi_icons() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_solid_logo(&config, 512, Rgba([255, 0, 0, 255]));

    generate(&config);

    let launcher = image::open(mipmap_file(&config, "mdpi", "ic_launcher.png"))
        .expect("open launcher failed")
        .to_rgba8();
    assert_eq!(launcher.dimensions(), (48, 48));
    assert!(launcher.pixels().all(is_reddish));

    let foreground = image::open(mipmap_file(&config, "mdpi", "ic_launcher_foreground.png"))
        .expect("open foreground failed")
        .to_rgba8();
    let layout = PaddingLayout::new(48, DEFAULT_FOREGROUND_SCALE);
    assert_eq!((layout.padded_size, layout.offset), (33, 7));

    for (x, y, pixel) in foreground.enumerate_pixels() {
        if layout.contains(x, y) {
            assert!(is_reddish(pixel), "pixel ({}, {}) should be red", x, y);
        } else {
            assert_eq!(pixel.0[3], 0);
        }
    }
}

#[test]
fn launcher_and_round_are_byte_identical() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_image(
        &config.source_path,
        DynamicImage::ImageRgba8(RgbaImage::from_fn(300, 300, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 200])
        })),
    );

    generate(&config);

    for (_, density) in ANDROID_ICON_TABLE {
        let square = fs::read(mipmap_file(&config, density, "ic_launcher.png")).expect("read failed");
        let round =
            fs::read(mipmap_file(&config, density, "ic_launcher_round.png")).expect("read failed");
        assert_eq!(square, round, "{} launcher variants differ", density);
    }
}

#[test]
fn favicons_have_exact_dimensions() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_solid_logo(&config, 512, Rgba([0, 0, 255, 255]));

    generate(&config);

    for size in FAVICON_TABLE {
        let path = config.web_assets_dir.join(format!("favicon-{}.png", size));
        let favicon = image::open(&path).expect("open favicon failed");
        assert_eq!(favicon.dimensions(), (size, size));
    }
}

#[test]
fn regeneration_is_byte_identical() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_image(
        &config.source_path,
        DynamicImage::ImageRgba8(RgbaImage::from_fn(256, 256, |x, y| {
            Rgba([x as u8, y as u8, 77, if (x + y) % 3 == 0 { 0 } else { 255 }])
        })),
    );

    let GenerationOutcome::Completed(first) = generate(&config) else {
        panic!("first run should complete");
    };
    let snapshot: Vec<Vec<u8>> = first
        .paths()
        .iter()
        .map(|path| fs::read(path).expect("read first run failed"))
        .collect();

    let GenerationOutcome::Completed(second) = generate(&config) else {
        panic!("second run should complete");
    };
    assert_eq!(first.paths(), second.paths());
    for (path, before) in second.paths().iter().zip(snapshot) {
        let after = fs::read(path).expect("read second run failed");
        assert_eq!(before, after, "{} changed between runs", path.display());
    }
}

#[test]
fn missing_source_writes_nothing() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());

    let outcome = generate(&config);

    let GenerationOutcome::SourceUnavailable(problem) = outcome else {
        panic!("expected missing source outcome");
    };
    assert!(problem.missing);
    assert_eq!(problem.path, config.source_path);
    assert!(!temp.path().join("android").exists());
    assert!(!config.web_assets_dir.exists());
}

#[test]
fn rgb_source_without_alpha_still_gets_transparent_foreground() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_image(
        &config.source_path,
        DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 120, Rgb([0, 200, 0]))),
    );

    generate(&config);

    let launcher = image::open(mipmap_file(&config, "xhdpi", "ic_launcher.png")).expect("open failed");
    assert_eq!(launcher.dimensions(), (96, 96));
    assert!(!launcher.color().has_alpha());

    let foreground = image::open(mipmap_file(&config, "xhdpi", "ic_launcher_foreground.png"))
        .expect("open failed")
        .to_rgba8();
    let layout = PaddingLayout::new(96, DEFAULT_FOREGROUND_SCALE);
    assert_eq!(foreground.get_pixel(0, 0).0[3], 0);
    assert_eq!(foreground.get_pixel(layout.offset + 1, layout.offset + 1).0[3], 255);
}

#[test]
fn report_carries_configured_source_path() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let logo = temp.path().join("branding/logo.png");
    write_image(
        &logo,
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 64, Rgba([9, 9, 9, 255]))),
    );
    fs::write(
        temp.path().join("icons.json"),
        r#"{ "source_path": "branding/logo.png", "favicon_sizes": [16] }"#,
    )
    .expect("write config failed");

    let outcome = app_icon_generator::run(temp.path()).expect("run failed");

    let GenerationOutcome::Completed(report) = outcome else {
        panic!("expected completed outcome");
    };
    assert_eq!(report.source_path, logo);
}

#[test]
fn run_uses_project_root_layout() {
    let temp = tempfile::tempdir().expect("tempdir failed");
    let config = IconConfig::rooted_at(temp.path());
    write_solid_logo(&config, 64, Rgba([1, 2, 3, 255]));
    fs::write(
        temp.path().join("icons.json"),
        r#"{ "favicon_sizes": [32], "android_icons": [{ "size": 48, "density": "mdpi" }] }"#,
    )
    .expect("write config failed");

    let outcome = app_icon_generator::run(temp.path()).expect("run failed");

    let GenerationOutcome::Completed(report) = outcome else {
        panic!("expected completed outcome");
    };
    assert_eq!(report.android_count(), 3);
    assert_eq!(report.favicon_count(), 1);
    assert!(config.web_assets_dir.join("favicon-32.png").is_file());
    assert!(!config.web_assets_dir.join("favicon-16.png").exists());
}
