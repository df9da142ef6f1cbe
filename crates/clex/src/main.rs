//! clex - lexical analyzer for a small C-like teaching language
//!
//! Usage: clex <input> [-o <dir>] [--tokens <file>] [--symbols <file>] [--errors <file>]

use anyhow::{Context, Result};
use clap::Parser;
use clex::{output, Scanner};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version)]
#[command(about = "C子集词法分析器：生成Token流、符号表与错误列表", long_about = None)]
struct Args {
    /// 输入源文件
    #[arg(required = true)]
    input: PathBuf,

    /// 输出目录
    #[arg(short = 'o', long = "output-dir", default_value = "output")]
    output_dir: PathBuf,

    /// Token文件名
    #[arg(long, default_value = "tokens.txt")]
    tokens: String,

    /// 符号表文件名
    #[arg(long, default_value = "symbol_table.txt")]
    symbols: String,

    /// 错误文件名
    #[arg(long, default_value = "errors.txt")]
    errors: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("错误: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("无法打开文件 '{}'", args.input.display()))?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("无法创建输出目录 '{}'", args.output_dir.display()))?;

    let mut scanner = Scanner::new(&source);
    let token_count = scanner.tokenize().len();

    let tokens_path = args.output_dir.join(&args.tokens);
    let symbols_path = args.output_dir.join(&args.symbols);
    let errors_path = args.output_dir.join(&args.errors);

    // All three artifacts are written even when the scan found errors;
    // a best-effort result is always produced.
    fs::write(&tokens_path, output::render_tokens(scanner.tokens()))
        .with_context(|| format!("无法创建文件: {}", tokens_path.display()))?;
    fs::write(
        &symbols_path,
        output::render_symbol_table(scanner.symbol_table()),
    )
    .with_context(|| format!("无法创建文件: {}", symbols_path.display()))?;
    fs::write(&errors_path, output::render_errors(scanner.errors()))
        .with_context(|| format!("无法创建文件: {}", errors_path.display()))?;

    println!("词法分析完成");
    println!("Token数量: {token_count}");
    println!("标识符数量: {}", scanner.symbol_table().len());
    println!("错误数量: {}", scanner.errors().len());

    if scanner.has_errors() {
        println!("\n发现以下错误:");
        for error in scanner.errors() {
            println!("  {}", error.report_line());
        }
        process::exit(1);
    }

    println!("\n输出文件已生成:");
    println!("  - {}", tokens_path.display());
    println!("  - {}", symbols_path.display());
    println!("  - {}", errors_path.display());

    Ok(())
}
