//! # 目录浏览命令
//!
//! 把内嵌的 NIST 化合物目录打印为表格（`--list`）。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `catalog/` 与 `tabled`

use crate::catalog::CompoundCatalog;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 目录表格行
#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Compound")]
    name: String,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Density (g/cm^3)")]
    density: String,
}

/// 打印目录，可按子串筛选（忽略大小写）
pub fn execute(filter: &str) -> Result<()> {
    output::print_header("NIST Compound Catalog");

    let catalog = CompoundCatalog::embedded();
    let entries = catalog.filter(filter);

    if entries.is_empty() {
        output::print_warning(&format!("No catalog compounds match '{}'", filter));
        return Ok(());
    }

    let rows: Vec<CatalogRow> = entries
        .iter()
        .map(|entry| CatalogRow {
            name: entry.name.to_string(),
            formula: entry.formula.to_string(),
            density: format!("{}", entry.density),
        })
        .collect();

    println!("{}", Table::new(&rows));
    output::print_info(&format!("{} compounds", entries.len()));

    Ok(())
}
