//! 命令解析与执行
//!
//! 交互模式和 `-e` 单命令模式共用同一套命令

use std::time::Instant;

use super::printer::{PrintMode, Printer};
use crate::processor::GraphProcessor;

/// 命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Stats,
    Adjacent(String, String),
    Neighbors(String),
    Path(String, String),
    Distance(String, String),
    Mode(PrintMode),
}

impl Command {
    /// 解析一行输入，空行返回 `Ok(None)`
    pub fn parse(input: &str) -> Result<Option<Command>, String> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Ok(None);
        };
        let args = &parts[1..];

        let command = match first.to_lowercase().as_str() {
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "stats" | "info" => Command::Stats,
            "adjacent" | "adj" => {
                let (a, b) = two_args("adjacent", args)?;
                Command::Adjacent(a, b)
            }
            "neighbors" | "n" => match args {
                [word] => Command::Neighbors(word.to_string()),
                _ => return Err("用法: neighbors <词>".to_string()),
            },
            "path" => {
                let (a, b) = two_args("path", args)?;
                Command::Path(a, b)
            }
            "dist" | "distance" => {
                let (a, b) = two_args("dist", args)?;
                Command::Distance(a, b)
            }
            "mode" => match args {
                ["table"] => Command::Mode(PrintMode::Table),
                ["inline"] => Command::Mode(PrintMode::Inline),
                _ => return Err("用法: mode <table|inline>".to_string()),
            },
            other => return Err(format!("未知命令: {}（输入 help 查看命令列表）", other)),
        };

        Ok(Some(command))
    }
}

fn two_args(name: &str, args: &[&str]) -> Result<(String, String), String> {
    match args {
        [a, b] => Ok((a.to_string(), b.to_string())),
        _ => Err(format!("用法: {} <词1> <词2>", name)),
    }
}

/// 执行一条命令
pub fn execute(
    processor: &GraphProcessor,
    printer: &mut Printer,
    command: Command,
) -> CommandResult {
    match command {
        Command::Help => CommandResult::Message(Printer::print_help()),
        Command::Quit => CommandResult::Exit,
        Command::Stats => {
            let graph = processor.graph();
            CommandResult::Message(printer.print_stats(
                graph.vertex_count(),
                graph.edge_count(),
                processor.index().source_count(),
                processor.is_stale(),
            ))
        }
        Command::Adjacent(a, b) => {
            CommandResult::Message(format!("{}\n", processor.is_adjacent(&a, &b)))
        }
        Command::Neighbors(word) => match processor.neighbors(&word) {
            Ok(words) => CommandResult::Message(printer.print_words(&words)),
            Err(e) => CommandResult::Error(e.to_string()),
        },
        Command::Path(a, b) => {
            let start = Instant::now();
            let path = processor.get_shortest_path(&a, &b);
            let elapsed_us = start.elapsed().as_micros();
            CommandResult::Message(printer.print_path(path.as_deref(), elapsed_us))
        }
        Command::Distance(a, b) => {
            let distance = processor
                .get_shortest_distance(&a, &b)
                .map(|d| d as i64)
                .unwrap_or(-1);
            CommandResult::Message(format!("{}\n", distance))
        }
        Command::Mode(mode) => {
            printer.set_mode(mode);
            CommandResult::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> GraphProcessor {
        let mut processor = GraphProcessor::new();
        processor.populate_from_words(["hot", "dot", "dog", "lot", "log", "cog", "fish"]);
        processor.shortest_path_precomputation();
        processor
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("HELP").unwrap(), Some(Command::Help));
        assert_eq!(
            Command::parse("path hot  dog").unwrap(),
            Some(Command::Path("hot".to_string(), "dog".to_string()))
        );
        assert_eq!(
            Command::parse("n cat").unwrap(),
            Some(Command::Neighbors("cat".to_string()))
        );
        assert_eq!(
            Command::parse("mode inline").unwrap(),
            Some(Command::Mode(PrintMode::Inline))
        );
        assert!(Command::parse("path hot").is_err());
        assert!(Command::parse("fly me").is_err());
    }

    #[test]
    fn test_execute_distance() {
        let processor = processor();
        let mut printer = Printer::default();

        let result = execute(
            &processor,
            &mut printer,
            Command::Distance("hot".to_string(), "dog".to_string()),
        );
        assert_eq!(result, CommandResult::Message("2\n".to_string()));

        let result = execute(
            &processor,
            &mut printer,
            Command::Distance("hot".to_string(), "fish".to_string()),
        );
        assert_eq!(result, CommandResult::Message("-1\n".to_string()));
    }

    #[test]
    fn test_execute_path_and_mode() {
        let processor = processor();
        let mut printer = Printer::default();

        assert_eq!(
            execute(&processor, &mut printer, Command::Mode(PrintMode::Inline)),
            CommandResult::Continue
        );
        match execute(
            &processor,
            &mut printer,
            Command::Path("hot".to_string(), "dog".to_string()),
        ) {
            CommandResult::Message(out) => assert!(out.starts_with("HOT -> DOT -> DOG")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_execute_unknown_neighbor() {
        let processor = processor();
        let mut printer = Printer::default();
        assert!(matches!(
            execute(&processor, &mut printer, Command::Neighbors("zebra".to_string())),
            CommandResult::Error(_)
        ));
        assert_eq!(
            execute(&processor, &mut printer, Command::Quit),
            CommandResult::Exit
        );
    }
}
