//! WordLadder CLI 工具
//!
//! 读取词典、建图、预计算，然后以交互方式回答词梯查询

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordladder::cli::{execute, Command, CommandResult, Printer};
use wordladder::config::{CaseFolding, LadderConfig};
use wordladder::processor::GraphProcessor;

#[derive(Parser, Debug)]
#[command(name = "wordladder-cli")]
#[command(about = "WordLadder 命令行工具")]
struct Args {
    /// 词典文件路径（每行一个词）
    #[arg(short, long)]
    dict: PathBuf,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 并行建图和预计算
    #[arg(short, long)]
    parallel: bool,

    /// 词统一转为小写（默认大写）
    #[arg(long)]
    lower: bool,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LadderConfig::load(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => LadderConfig::default(),
    };
    if args.parallel {
        config = config.with_parallel(true);
    }
    if args.lower {
        config = config.with_case_folding(CaseFolding::Lower);
    }

    let mut processor = GraphProcessor::with_config(config);
    let count = processor
        .populate_graph(&args.dict)
        .with_context(|| format!("读取词典失败: {}", args.dict.display()))?;
    if processor.is_stale() {
        processor.shortest_path_precomputation();
    }

    println!("WordLadder CLI - 单编辑词梯");
    println!("===========================");
    println!("词典: {} ({} 个词)", args.dict.display(), count);
    println!("  顶点数: {}", processor.graph().vertex_count());
    println!("  边数: {}", processor.graph().edge_count());

    let mut printer = Printer::default();

    // 单个命令模式
    if let Some(line) = args.execute {
        run_line(&processor, &mut printer, &line);
        return Ok(());
    }

    // 交互模式
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("wordladder> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if run_line(&processor, &mut printer, &line) {
            break;
        }
    }

    println!("再见！");
    Ok(())
}

/// 解析并执行一行输入，返回是否退出
fn run_line(processor: &GraphProcessor, printer: &mut Printer, line: &str) -> bool {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return false,
        Err(e) => {
            println!("错误: {}", e);
            return false;
        }
    };

    match execute(processor, printer, command) {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            print!("{}", msg);
            false
        }
        CommandResult::Error(e) => {
            println!("错误: {}", e);
            false
        }
    }
}
