//! # 交互式确认工具
//!
//! 在终端向操作者提出 yes/no 问题并阻塞等待回答。
//!
//! ## 依赖关系
//! - 被 `refractive/resolver.rs` 的交互式消歧使用
//! - 使用 `console` crate 读取终端输入

use console::Term;
use std::io;

/// 向操作者提出 yes/no 问题并返回回答。
///
/// `default` 为直接回车时采用的答案；`None` 表示必须明确回答。
/// 接受的输入: yes / ye / y / no / n（不区分大小写）。
pub fn query_yes_no(question: &str, default: Option<bool>) -> io::Result<bool> {
    let term = Term::stderr();
    let hint = match default {
        Some(true) => "[Y/n]",
        Some(false) => "[y/N]",
        None => "[y/n]",
    };

    loop {
        term.write_str(&format!("{} {} ", question, hint))?;
        let answer = term.read_line()?.trim().to_lowercase();

        match answer.as_str() {
            "" => {
                if let Some(choice) = default {
                    return Ok(choice);
                }
                // 无默认值时继续追问
            }
            "y" | "ye" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                term.write_line("Please respond with 'yes' or 'no' (or 'y' or 'n').")?;
            }
        }
    }
}
