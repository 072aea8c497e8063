//! # 折射率计算命令实现
//!
//! 自上而下的单趟流水线：能量网格 → 逐材料解析、求值、导出。
//!
//! ## 失败隔离
//! 每个材料独立处理，失败记入汇总报告而不中断后续材料；
//! 任何材料失败时整个进程以非零状态退出。
//!
//! ## 依赖关系
//! - 使用 `cli` 定义的参数
//! - 使用 `catalog/` 与 `refractive/` 各子模块
//! - 使用 `utils/output.rs` 打印状态

use crate::catalog::CompoundCatalog;
use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, XRefractError};
use crate::refractive::{
    edges, export, plot, Disambiguation, EnergyGrid, MaterialRequest, RefractiveIndexCalculator,
};
use crate::utils::output;

use std::fs;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use xraydb::XrayDb;

/// 逐材料处理的汇总报告
#[derive(Debug, Default)]
struct RunReport {
    /// 成功写出的材料数
    written: usize,
    /// 失败详情 (材料名, 错误信息)
    failures: Vec<(String, String)>,
}

/// 执行计算流程
pub fn execute(cli: Cli) -> Result<()> {
    output::print_header("X-Ray Refractive Index Calculation");

    let e_0 = required_energy(cli.e_0, "--e_0")?;
    let e_n = required_energy(cli.e_n, "--e_n")?;
    let delta_e = required_energy(cli.delta_e, "--delta_e")?;

    if !cli.density.is_empty() && cli.density.len() != cli.material.len() {
        return Err(XRefractError::DensityCountMismatch {
            materials: cli.material.len(),
            densities: cli.density.len(),
        });
    }

    // 网格在任何数据库交互之前构造，范围错误尽早失败
    let grid = EnergyGrid::build(e_0, e_n, delta_e)?;
    output::print_info(&format!(
        "Energy grid: {} points in [{}, {}] keV (step {} keV)",
        grid.len(),
        grid.first(),
        grid.last(),
        grid.step()
    ));

    fs::create_dir_all(&cli.output).map_err(|source| XRefractError::FileWriteError {
        path: cli.output.display().to_string(),
        source,
    })?;

    // 目录与数据库由入口加载一次，以引用穿过整个流程
    let db = XrayDb::new();
    let catalog = CompoundCatalog::embedded();
    let calculator = RefractiveIndexCalculator::new(&db);
    let policy = if cli.yes {
        Disambiguation::AssumeYes
    } else {
        Disambiguation::Interactive
    };

    let mut report = RunReport::default();
    for (position, name) in cli.material.iter().enumerate() {
        let request = MaterialRequest {
            name: name.clone(),
            explicit_density: cli.density.get(position).copied(),
        };

        match process_material(&request, &catalog, &db, &calculator, &grid, &cli, policy) {
            Ok(path) => {
                output::print_success(&format!(
                    "Refractive indices written to '{}'",
                    path.display()
                ));
                report.written += 1;
            }
            Err(err) => {
                if let XRefractError::AmbiguousMaterial { candidates, .. } = &err {
                    if !candidates.is_empty() {
                        print_candidate_table(&catalog, candidates);
                    }
                }
                output::print_error(&format!("{}: {}", name, err));
                report.failures.push((name.clone(), err.to_string()));
            }
        }
    }

    output::print_separator();
    let total = cli.material.len();
    if report.failures.is_empty() {
        output::print_success(&format!(
            "Done: {} of {} materials written",
            report.written, total
        ));
        Ok(())
    } else {
        output::print_warning(&format!(
            "Done: {} written, {} failed",
            report.written,
            report.failures.len()
        ));
        Err(XRefractError::MaterialsFailed {
            failed: report.failures.len(),
            total,
        })
    }
}

/// 处理单个材料：解析 → 求值 → 导出（可选绘图）
fn process_material(
    request: &MaterialRequest,
    catalog: &CompoundCatalog,
    db: &XrayDb,
    calculator: &RefractiveIndexCalculator<'_>,
    grid: &EnergyGrid,
    cli: &Cli,
    policy: Disambiguation,
) -> Result<PathBuf> {
    let resolved = crate::refractive::resolver::resolve(request, catalog, db, policy)?;
    output::print_info(&format!(
        "Resolved '{}' -> '{}' ({}), density = {} g/cm**3 ({})",
        request.name, resolved.name, resolved.formula, resolved.density, resolved.density_source
    ));

    let indices = calculator.evaluate(&resolved, grid)?;

    let edge_marks = if cli.edges {
        edges::edges_in_range(db, &resolved, grid)?
    } else {
        Vec::new()
    };

    let filename = export::output_filename(&resolved.name, cli.format.extension());
    let path = cli.output.join(filename);
    match cli.format {
        OutputFormat::Txt => export::write_txt(&path, &resolved, grid, &indices, &edge_marks)?,
        OutputFormat::Csv => export::write_csv(&path, grid, &indices)?,
    }

    if cli.plot {
        let plot_path = cli
            .output
            .join(export::output_filename(&resolved.name, "png"));
        plot::generate_index_plot(&plot_path, &resolved, grid, &indices, cli.width, cli.height)?;
        output::print_info(&format!("Plot written to '{}'", plot_path.display()));
    }

    Ok(path)
}

/// 能量参数缺失时报参数错误（`--list` 之外的路径必须给定）
fn required_energy(value: Option<f64>, flag: &str) -> Result<f64> {
    value.ok_or_else(|| XRefractError::InvalidArgument(format!("{} is required", flag)))
}

/// 歧义候选表格行
#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "Compound")]
    name: String,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Density (g/cm^3)")]
    density: String,
}

/// 打印歧义匹配的候选列表
fn print_candidate_table(catalog: &CompoundCatalog, candidates: &[String]) {
    let rows: Vec<CandidateRow> = candidates
        .iter()
        .filter_map(|name| catalog.get(name))
        .map(|entry| CandidateRow {
            name: entry.name.to_string(),
            formula: entry.formula.to_string(),
            density: format!("{}", entry.density),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }
}
