//! # 统一错误处理模块
//!
//! 定义 xrefract 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 包装 `xraydb` 的查询错误（外部 X 射线数据库）

use thiserror::Error;

/// xrefract 统一错误类型
#[derive(Error, Debug)]
pub enum XRefractError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid energy range: e_0 = {e_0} keV, e_n = {e_n} keV, delta_e = {delta_e} keV (require e_0 <= e_n and delta_e > 0)")]
    InvalidRange { e_0: f64, e_n: f64, delta_e: f64 },

    #[error("Got {densities} densities for {materials} materials (--density must align with --material)")]
    DensityCountMismatch { materials: usize, densities: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 材料解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Found {} catalog compounds matching '{name}'", .candidates.len())]
    AmbiguousMaterial {
        name: String,
        candidates: Vec<String>,
    },

    #[error("No matching material found for '{name}'")]
    NoMatch { name: String },

    #[error("No density available for '{name}': provide one with --density")]
    MissingDensity { name: String },

    #[error("Density for '{name}' must be a positive number, got {value}")]
    NonPositiveDensity { name: String, value: f64 },

    // ─────────────────────────────────────────────────────────────
    // 外部数据库错误
    // ─────────────────────────────────────────────────────────────
    #[error("X-ray database query failed: {context}")]
    Oracle {
        context: String,
        #[source]
        source: xraydb::XrayDbError,
    },

    #[error("Failed to read operator input")]
    Prompt(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 汇总
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} of {total} materials failed")]
    MaterialsFailed { failed: usize, total: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, XRefractError>;
