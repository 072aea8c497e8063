//! # 数据导出
//!
//! 把能量网格与复折射率写成 TXT（默认）或 CSV 文件。
//!
//! ## TXT 格式
//! `#` 前缀表头（材料名、密度、能量范围、列标签、可选吸收边），
//! 之后每个能量一行，空白分隔的三列: energy delta beta。
//!
//! ## 文件名
//! 材料名先把空格替换为 `_`，再删去 `,` `(` `)`，最后加扩展名。
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs` 调用
//! - CSV 输出使用 `csv` + `serde`

use crate::error::{Result, XRefractError};
use crate::refractive::edges::EdgeMark;
use crate::refractive::grid::EnergyGrid;
use crate::refractive::resolver::ResolvedMaterial;

use num_complex::Complex64;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// 由材料名构造输出文件名。
///
/// 变换顺序固定：先替换空格，再删去禁用字符。
pub fn output_filename(material_name: &str, extension: &str) -> String {
    let mut stem = material_name.replace(' ', "_");
    for forbidden in [',', '(', ')'] {
        stem = stem.replace(forbidden, "");
    }
    format!("{}.{}", stem, extension)
}

/// CSV 数据行
#[derive(Debug, Serialize)]
struct IndexRow {
    energy_kev: f64,
    delta: f64,
    beta: f64,
}

/// 写 TXT 输出（表头 + 三列数据）。
///
/// 目标文件存在时直接覆盖。
pub fn write_txt(
    output_path: &Path,
    material: &ResolvedMaterial,
    grid: &EnergyGrid,
    indices: &[Complex64],
    edges: &[EdgeMark],
) -> Result<()> {
    let wrap = |source| XRefractError::FileWriteError {
        path: output_path.display().to_string(),
        source,
    };

    let mut file = File::create(output_path).map_err(wrap)?;

    writeln!(
        file,
        "# {}, density = {} g/cm**3",
        material.name, material.density
    )
    .map_err(wrap)?;
    writeln!(
        file,
        "# Energy range: [{:.2e}: {:.2e}] keV",
        grid.first(),
        grid.last()
    )
    .map_err(wrap)?;
    for mark in edges {
        writeln!(
            file,
            "# Absorption edge: {} {} at {:.4} keV",
            mark.element, mark.label, mark.energy_kev
        )
        .map_err(wrap)?;
    }
    writeln!(file, "# Energies[keV]\tdelta\tbeta").map_err(wrap)?;

    for (&energy, n) in grid.iter().zip(indices) {
        writeln!(file, "{:e} {:e} {:e}", energy, 1.0 - n.re, n.im).map_err(wrap)?;
    }

    Ok(())
}

/// 写 CSV 输出（列头 + 三列数据）。
pub fn write_csv(output_path: &Path, grid: &EnergyGrid, indices: &[Complex64]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (&energy, n) in grid.iter().zip(indices) {
        wtr.serialize(IndexRow {
            energy_kev: energy,
            delta: 1.0 - n.re,
            beta: n.im,
        })?;
    }

    wtr.flush().map_err(|source| XRefractError::FileWriteError {
        path: output_path.display().to_string(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refractive::resolver::DensitySource;

    fn water() -> ResolvedMaterial {
        ResolvedMaterial {
            name: "Water, Liquid".to_string(),
            formula: "H2O".to_string(),
            composition: vec![("H".to_string(), 2.0), ("O".to_string(), 1.0)],
            density: 1.0,
            density_source: DensitySource::Catalog,
        }
    }

    fn sample_indices(grid: &EnergyGrid) -> Vec<Complex64> {
        grid.iter()
            .map(|&e| Complex64::new(1.0 - 2.3e-6 / (e * e), 1.5e-9 / (e * e)))
            .collect()
    }

    #[test]
    fn test_output_filename_strips_spaces_and_punctuation() {
        assert_eq!(output_filename("Water, Liquid", "txt"), "Water_Liquid.txt");
        assert_eq!(
            output_filename("Gallium Arsenide(GaAs)", "txt"),
            "Gallium_ArsenideGaAs.txt"
        );
        assert_eq!(output_filename("SiO2", "csv"), "SiO2.csv");
    }

    #[test]
    fn test_output_filename_replaces_spaces_before_stripping() {
        // 空格先于删除处理：括号旁的空格保留为下划线
        assert_eq!(
            output_filename("Polycarbonate (Makrolon, Lexan)", "txt"),
            "Polycarbonate_Makrolon_Lexan.txt"
        );
    }

    #[test]
    fn test_write_txt_row_count_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let grid = EnergyGrid::build(10.0, 12.0, 1.0).unwrap();
        let indices = sample_indices(&grid);

        write_txt(&path, &water(), &grid, &indices, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // 3 行表头 + 3 行数据
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("# Water, Liquid, density = 1 g/cm**3"));
        assert!(lines[1].starts_with("# Energy range: ["));
        assert!(lines[2].starts_with("# Energies[keV]"));
        assert!(!lines[3].starts_with('#'));
    }

    #[test]
    fn test_write_txt_rows_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let grid = EnergyGrid::build(10.0, 11.0, 1.0).unwrap();
        let indices = sample_indices(&grid);

        write_txt(&path, &water(), &grid, &indices, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let first_row: Vec<f64> = content
            .lines()
            .find(|line| !line.starts_with('#'))
            .unwrap()
            .split_whitespace()
            .map(|field| field.parse().unwrap())
            .collect();

        assert_eq!(first_row.len(), 3);
        assert!((first_row[0] - 10.0).abs() < 1e-12);
        assert!((first_row[1] - (1.0 - indices[0].re)).abs() < 1e-18);
        assert!((first_row[2] - indices[0].im).abs() < 1e-18);
    }

    #[test]
    fn test_write_txt_with_edge_annotations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let grid = EnergyGrid::build(10.0, 12.0, 1.0).unwrap();
        let indices = sample_indices(&grid);
        let edges = vec![EdgeMark {
            element: "Ga".to_string(),
            label: "K".to_string(),
            energy_kev: 10.3671,
        }];

        write_txt(&path, &water(), &grid, &indices, &edges).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Absorption edge: Ga K at 10.3671 keV"));
    }

    #[test]
    fn test_write_txt_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content\n").unwrap();

        let grid = EnergyGrid::build(10.0, 10.0, 1.0).unwrap();
        let indices = sample_indices(&grid);
        write_txt(&path, &water(), &grid, &indices, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let grid = EnergyGrid::build(10.0, 12.0, 1.0).unwrap();
        let indices = sample_indices(&grid);

        write_csv(&path, &grid, &indices).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "energy_kev,delta,beta");
    }
}
