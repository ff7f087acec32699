//! # App 图标生成工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、调用生成流程与控制台提示。
//! 生成逻辑见 `icon_generator` 模块。

use std::process::ExitCode;

use app_icon_generator::error::AppError;
use app_icon_generator::icon_generator::{GenerationOutcome, GenerationReport, SourceProblem};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("❌ 无法获取当前目录: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app_icon_generator::run(&project_root) {
        Ok(GenerationOutcome::Completed(report)) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Ok(GenerationOutcome::SourceUnavailable(problem)) => {
            print_source_guidance(&problem);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn print_source_guidance(problem: &SourceProblem) {
    if !problem.missing {
        println!("源图无法使用: {}", problem.reason);
    }
    println!("Please add your logo as: {}", problem.path.display());
    println!("Recommended: 512x512 PNG with transparent background");
}

fn print_summary(report: &GenerationReport) {
    println!();
    println!(
        "🎉 All app icons generated! ({} Android files, {} favicons in {}ms)",
        report.android_count(),
        report.favicon_count(),
        report.elapsed.as_millis()
    );
    println!("📋 To use your own logo:");
    println!(
        "   1. Replace {} with your 512x512 PNG",
        report.source_path.display()
    );
    println!("   2. Run: generate-icons");
    println!("   3. Rebuild Android: npx cap build android");
}

fn report_failure(err: &AppError) {
    eprintln!("❌ 图标生成失败: {err}");

    let completed = err.completed_files();
    if !completed.is_empty() {
        eprintln!("已写入的文件（图标集不完整）:");
        for path in completed {
            eprintln!("   {}", path.display());
        }
    }
}
