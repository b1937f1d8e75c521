//! 结果打印器
//!
//! 提供表格和单行格式的结果输出

use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 单行模式（A -> B -> C）
    Inline,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印词梯
    pub fn print_path(&self, path: Option<&[String]>, elapsed_us: u128) -> String {
        let Some(path) = path else {
            return format!("No path (distance -1, {} us)\n", elapsed_us);
        };

        let output = match self.mode {
            PrintMode::Table => self.format_table(path),
            PrintMode::Inline => format!("{}\n", path.join(" -> ")),
        };

        format!(
            "{}distance {} ({} us)\n",
            output,
            path.len().saturating_sub(1),
            elapsed_us
        )
    }

    /// 打印词列表（邻居等）
    pub fn print_words(&self, words: &[String]) -> String {
        if words.is_empty() {
            return "Empty set\n".to_string();
        }
        match self.mode {
            PrintMode::Table => format!("{}{} word(s)\n", self.format_table(words), words.len()),
            PrintMode::Inline => format!("{}\n", words.join(", ")),
        }
    }

    /// 表格格式
    fn format_table(&self, words: &[String]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "Word"]);

        for (i, word) in words.iter().enumerate() {
            table.add_row(Row::new(vec![Cell::new(&i.to_string()), Cell::new(word)]));
        }

        table.to_string()
    }

    /// 打印统计信息
    pub fn print_stats(
        &self,
        vertex_count: usize,
        edge_count: usize,
        source_count: usize,
        stale: bool,
    ) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Word Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Precomputed Sources", source_count.to_string()]);
        table.add_row(row!["Index Stale", stale.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   WordLadder CLI 命令帮助
═══════════════════════════════════════════════════════════════

  help, h, ?              显示帮助
  quit, exit, q           退出程序
  stats, info             显示图统计信息

  adjacent, adj <A> <B>   两个词是否直接相连
                          示例: adjacent bran brain
  neighbors, n <词>       查看词的邻居
                          示例: neighbors cat
  path <起点> <终点>      查找最短词梯
                          示例: path hot dog
  dist <起点> <终点>      最短距离（边数，无路径为 -1）
                          示例: dist hot dog
  mode <table|inline>     切换输出格式

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}
