//! # xrefract - 复 X 射线折射率计算器
//!
//! 对给定能量区间计算材料的复折射率 n = 1 − delta + i·beta，
//! 并写成带表头的文本文件。截面数据来自 `xraydb` 参考表，
//! 材料可以是化学式，也可以是内嵌 NIST 目录中的化合物。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs       (命令行参数定义)
//!   ├── commands/    (命令执行逻辑)
//!   ├── catalog/     (内嵌 NIST 化合物目录)
//!   ├── refractive/  (网格、解析、求值、导出)
//!   ├── utils/       (工具函数)
//!   └── error.rs     (错误处理)
//! ```

mod catalog;
mod cli;
mod commands;
mod error;
mod refractive;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
