//! # 吸收边标注
//!
//! 收集材料组成元素落在能量区间内的吸收边，
//! 供输出表头标注（`--edges`）。
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs` 调用，结果传给 `refractive/export.rs`
//! - 使用外部数据库的吸收边表

use crate::error::{Result, XRefractError};
use crate::refractive::grid::EnergyGrid;
use crate::refractive::resolver::ResolvedMaterial;

use xraydb::XrayDb;

/// 能量区间内的一条吸收边
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMark {
    /// 元素符号
    pub element: String,
    /// IUPAC 边标签 (K, L1, L2, L3, ...)
    pub label: String,
    /// 边能量 (keV)
    pub energy_kev: f64,
}

/// 收集组成元素在 [grid.first(), grid.last()] 内的吸收边，按能量升序。
pub fn edges_in_range(
    db: &XrayDb,
    material: &ResolvedMaterial,
    grid: &EnergyGrid,
) -> Result<Vec<EdgeMark>> {
    let lower = grid.first();
    let upper = grid.last();

    let mut marks = Vec::new();
    for (symbol, _count) in &material.composition {
        let edges = db.xray_edges(symbol).map_err(|source| XRefractError::Oracle {
            context: format!("absorption edges of element '{}'", symbol),
            source,
        })?;

        for (label, edge) in edges {
            let energy_kev = edge.energy / 1.0e3;
            if energy_kev >= lower && energy_kev <= upper {
                marks.push(EdgeMark {
                    element: symbol.clone(),
                    label,
                    energy_kev,
                });
            }
        }
    }

    marks.sort_by(|a, b| a.energy_kev.partial_cmp(&b.energy_kev).unwrap());
    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refractive::resolver::DensitySource;

    fn gallium_arsenide() -> ResolvedMaterial {
        ResolvedMaterial {
            name: "Gallium Arsenide".to_string(),
            formula: "GaAs".to_string(),
            composition: vec![("As".to_string(), 1.0), ("Ga".to_string(), 1.0)],
            density: 5.31,
            density_source: DensitySource::Catalog,
        }
    }

    #[test]
    fn test_k_edges_inside_interval() {
        // Ga K 边 ~10.37 keV, As K 边 ~11.87 keV
        let db = XrayDb::new();
        let grid = EnergyGrid::build(9.0, 13.0, 0.5).unwrap();

        let marks = edges_in_range(&db, &gallium_arsenide(), &grid).unwrap();
        assert!(marks
            .iter()
            .any(|m| m.element == "Ga" && m.label == "K" && (m.energy_kev - 10.37).abs() < 0.1));
        assert!(marks
            .iter()
            .any(|m| m.element == "As" && m.label == "K" && (m.energy_kev - 11.87).abs() < 0.1));
    }

    #[test]
    fn test_marks_sorted_by_energy() {
        let db = XrayDb::new();
        let grid = EnergyGrid::build(1.0, 13.0, 0.5).unwrap();

        let marks = edges_in_range(&db, &gallium_arsenide(), &grid).unwrap();
        for pair in marks.windows(2) {
            assert!(pair[0].energy_kev <= pair[1].energy_kev);
        }
    }

    #[test]
    fn test_empty_when_no_edge_in_interval() {
        // 20–30 keV 区间内 Ga/As 没有吸收边
        let db = XrayDb::new();
        let grid = EnergyGrid::build(20.0, 30.0, 1.0).unwrap();

        let marks = edges_in_range(&db, &gallium_arsenide(), &grid).unwrap();
        assert!(marks.is_empty());
    }
}
