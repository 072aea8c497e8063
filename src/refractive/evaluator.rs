//! # 折射率求值
//!
//! 对网格中每个能量点向外部 X 射线数据库做一次独立查询，
//! 得到复折射率 n = 1 − delta + i·beta。
//!
//! ## 约定
//! - 查询逐点进行、保序，不重试、不合并
//! - 任何一次查询失败对该材料整体致命
//! - 网格能量为 keV，数据库接口为 eV，仅在边界处换算
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs` 调用
//! - 使用 `refractive/grid.rs`、`refractive/resolver.rs`
//! - 使用 `utils/progress.rs` 显示逐点进度

use crate::error::{Result, XRefractError};
use crate::refractive::grid::EnergyGrid;
use crate::refractive::resolver::ResolvedMaterial;
use crate::utils::progress;

use num_complex::Complex64;
use xraydb::XrayDb;

/// keV 到 eV 的换算
const KEV_TO_EV: f64 = 1.0e3;

/// 折射率计算器，持有外部数据库的引用
pub struct RefractiveIndexCalculator<'a> {
    db: &'a XrayDb,
}

impl<'a> RefractiveIndexCalculator<'a> {
    /// 创建计算器
    pub fn new(db: &'a XrayDb) -> Self {
        Self { db }
    }

    /// 对整个网格求复折射率，每个能量点一次查询。
    ///
    /// 返回值与网格点一一对应、保序。
    pub fn evaluate(
        &self,
        material: &ResolvedMaterial,
        grid: &EnergyGrid,
    ) -> Result<Vec<Complex64>> {
        let pb = progress::create_progress_bar(grid.len() as u64, &material.name);

        let mut indices = Vec::with_capacity(grid.len());
        for &energy_kev in grid.iter() {
            let (delta, beta, _attenuation_length) = self
                .db
                .xray_delta_beta(&material.formula, material.density, energy_kev * KEV_TO_EV)
                .map_err(|source| XRefractError::Oracle {
                    context: format!(
                        "refractive index of '{}' at {} keV",
                        material.name, energy_kev
                    ),
                    source,
                })?;

            indices.push(Complex64::new(1.0 - delta, beta));
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(indices)
    }
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

    #[test]
    fn test_one_index_per_grid_point() {
        let db = XrayDb::new();
        let calculator = RefractiveIndexCalculator::new(&db);
        let grid = EnergyGrid::build(8.0, 12.0, 1.0).unwrap();

        let indices = calculator.evaluate(&water(), &grid).unwrap();
        assert_eq!(indices.len(), grid.len());
    }

    #[test]
    fn test_water_delta_beta_magnitudes() {
        // 水在 10 keV 附近: delta ~ 2.3e-6, beta 比 delta 小若干量级
        let db = XrayDb::new();
        let calculator = RefractiveIndexCalculator::new(&db);
        let grid = EnergyGrid::build(10.0, 10.0, 1.0).unwrap();

        let indices = calculator.evaluate(&water(), &grid).unwrap();
        let n = indices[0];
        let delta = 1.0 - n.re;
        let beta = n.im;

        assert!(delta > 1.0e-6 && delta < 1.0e-5, "delta = {delta}");
        assert!(beta > 0.0 && beta < delta, "beta = {beta}");
        assert!(n.re < 1.0);
    }

    #[test]
    fn test_delta_decreases_with_energy() {
        // delta 随能量大致按 1/E² 下降
        let db = XrayDb::new();
        let calculator = RefractiveIndexCalculator::new(&db);
        let grid = EnergyGrid::build(5.0, 20.0, 15.0).unwrap();

        let indices = calculator.evaluate(&water(), &grid).unwrap();
        let delta_low = 1.0 - indices[0].re;
        let delta_high = 1.0 - indices[1].re;
        assert!(delta_low > delta_high);
    }

    #[test]
    fn test_unknown_element_is_fatal() {
        let db = XrayDb::new();
        let calculator = RefractiveIndexCalculator::new(&db);
        let grid = EnergyGrid::build(10.0, 10.0, 1.0).unwrap();

        let bogus = ResolvedMaterial {
            name: "bogus".to_string(),
            formula: "Xx2".to_string(),
            composition: vec![("Xx".to_string(), 2.0)],
            density: 1.0,
            density_source: DensitySource::Explicit,
        };

        let err = calculator.evaluate(&bogus, &grid).unwrap_err();
        assert!(matches!(err, XRefractError::Oracle { .. }));
    }
}
