use clap::Parser;
use fountain_core::{parse_with, Conf, ConfError};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// 解析 Fountain 剧本并输出结构
#[derive(Parser, Debug)]
#[command(name = "fountain-parser", version, about)]
struct Cli {
    /// Fountain 文件路径，省略时从标准输入读取
    file: Option<PathBuf>,

    /// 输出完整的 JSON 结果
    #[arg(long)]
    json: bool,

    /// JSON 配置文件
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("读取文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("读取配置失败: {0}")]
    Conf(#[from] ConfError),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Conf::load(path)?,
        None => Conf::default(),
    };

    let content = match &cli.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let result = parse_with(&content, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let properties = result.properties();
    println!("解析完成！");
    println!("元素数量: {}", result.elements.len());
    println!("标题页字段: {}", result.title_page.len());
    println!("场景数量: {}", properties.scenes.len());
    println!("角色数量: {}", properties.characters.len());
    for scene in &properties.scenes {
        println!("  {:>3}. {} (第{}行)", scene.number, scene.text, scene.line);
    }
    Ok(())
}
