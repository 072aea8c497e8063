//! # CLI 定义
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `--material`: 一个或多个材料名（化学式或 NIST 目录名称）
//! - `--density`: 与 `--material` 位置对齐的密度列表
//! - `--e_0` / `--e_n` / `--delta_e`: 能量区间与步长 (keV)
//! - `--output`: 输出目录
//! - 其余为输出格式、绘图、吸收边标注、消歧与目录浏览开关
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/` 相应模块

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// 输出数据格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Whitespace-separated text with a commented header
    Txt,
    /// CSV data file (energy_kev, delta, beta)
    Csv,
}

impl OutputFormat {
    /// 对应的文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Txt => write!(f, "txt"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// xrefract - 复 X 射线折射率计算器
#[derive(Parser, Debug)]
#[command(name = "xrefract")]
#[command(version)]
#[command(
    about = "Calculate complex X-ray refractive indices (delta/beta) and save them to text files",
    long_about = "Calculate complex X-ray refractive indices over an energy range and save them \
                  as delimited text files. Materials are chemical formulas (e.g. SiO2) or \
                  compounds from the embedded NIST catalog; cross sections come from the xraydb \
                  reference tables."
)]
pub struct Cli {
    /// Material names: chemical formulas (e.g. SiO2, GaAs) or NIST catalog compounds
    #[arg(long = "material", num_args = 1.., required_unless_present = "list")]
    pub material: Vec<String>,

    /// Densities in g/cm^3, aligned positionally with --material
    /// (default: catalog reference density or element density)
    #[arg(long = "density", num_args = 1..)]
    pub density: Vec<f64>,

    /// Lower energy band limit in keV
    #[arg(long = "e_0", value_name = "KEV", required_unless_present = "list")]
    pub e_0: Option<f64>,

    /// Upper energy band limit in keV
    #[arg(long = "e_n", value_name = "KEV", required_unless_present = "list")]
    pub e_n: Option<f64>,

    /// Energy resolution in keV
    #[arg(long = "delta_e", value_name = "KEV", required_unless_present = "list")]
    pub delta_e: Option<f64>,

    /// Output directory for the generated files
    #[arg(long, default_value = "./")]
    pub output: PathBuf,

    /// Output data format
    #[arg(long, value_enum, default_value = "txt")]
    pub format: OutputFormat,

    /// Also render a delta/beta curve plot (PNG) per material
    #[arg(long, default_value_t = false)]
    pub plot: bool,

    /// Plot width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Plot height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Annotate the output header with absorption edges inside the energy range
    #[arg(long, default_value_t = false)]
    pub edges: bool,

    /// Accept a single fuzzy catalog match without prompting
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,

    /// List the embedded compound catalog (optionally filtered by substring) and exit
    #[arg(long, value_name = "FILTER", num_args = 0..=1, default_missing_value = "")]
    pub list: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::try_parse_from([
            "xrefract",
            "--material",
            "SiO2",
            "--e_0",
            "10",
            "--e_n",
            "30",
            "--delta_e",
            "0.5",
        ])
        .unwrap();

        assert_eq!(cli.material, vec!["SiO2"]);
        assert!(cli.density.is_empty());
        assert_eq!(cli.e_0, Some(10.0));
        assert_eq!(cli.e_n, Some(30.0));
        assert_eq!(cli.delta_e, Some(0.5));
        assert_eq!(cli.format, OutputFormat::Txt);
        assert!(!cli.yes);
    }

    #[test]
    fn test_parse_multiple_materials_and_densities() {
        let cli = Cli::try_parse_from([
            "xrefract",
            "--material",
            "Water, Liquid",
            "GaAs",
            "--density",
            "1.0",
            "5.31",
            "--e_0",
            "5",
            "--e_n",
            "25",
            "--delta_e",
            "1",
        ])
        .unwrap();

        assert_eq!(cli.material.len(), 2);
        assert_eq!(cli.density, vec![1.0, 5.31]);
    }

    #[test]
    fn test_material_required_without_list() {
        assert!(Cli::try_parse_from(["xrefract", "--e_0", "1", "--e_n", "2", "--delta_e", "0.1"])
            .is_err());
    }

    #[test]
    fn test_list_without_other_arguments() {
        let cli = Cli::try_parse_from(["xrefract", "--list"]).unwrap();
        assert_eq!(cli.list.as_deref(), Some(""));

        let cli = Cli::try_parse_from(["xrefract", "--list", "water"]).unwrap();
        assert_eq!(cli.list.as_deref(), Some("water"));
    }
}
