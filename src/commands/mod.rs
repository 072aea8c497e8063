//! # 命令执行模块
//!
//! 实现命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli`, `catalog/`, `refractive/`, `utils/`
//! - 子模块: compute, list

pub mod compute;
pub mod list;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令：`--list` 浏览目录，否则进入计算流程
pub fn run(cli: Cli) -> Result<()> {
    if let Some(filter) = cli.list.clone() {
        return list::execute(&filter);
    }
    compute::execute(cli)
}
