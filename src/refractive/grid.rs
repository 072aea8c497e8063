//! # 能量网格
//!
//! 由能量上下限与步长构造等间距能量序列。
//!
//! ## 不变量
//! - 严格递增，等间距，包含下限 e_0
//! - 长度 = floor((e_n − e_0) / delta_e) + 1
//! - 末值可能不到 e_n（跨度非步长整数倍时不做吸附）
//!
//! ## 依赖关系
//! - 被 `refractive/evaluator.rs`、`refractive/export.rs` 使用

use crate::error::{Result, XRefractError};

/// 等间距能量网格（keV）
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    energies: Vec<f64>,
    step: f64,
}

impl EnergyGrid {
    /// 构造能量网格。
    ///
    /// 所有输入单位为 keV。`delta_e <= 0` 或 `e_n < e_0` 时报 InvalidRange。
    pub fn build(e_0: f64, e_n: f64, delta_e: f64) -> Result<Self> {
        if !e_0.is_finite() || !e_n.is_finite() || !delta_e.is_finite() {
            return Err(XRefractError::InvalidRange { e_0, e_n, delta_e });
        }
        if delta_e <= 0.0 || e_n < e_0 {
            return Err(XRefractError::InvalidRange { e_0, e_n, delta_e });
        }

        let count = ((e_n - e_0) / delta_e).floor() as usize + 1;
        let energies = (0..count).map(|i| e_0 + i as f64 * delta_e).collect();

        Ok(Self {
            energies,
            step: delta_e,
        })
    }

    /// 网格点数量
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// 网格是否为空（构造成功时恒为 false）
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// 步长 (keV)
    pub fn step(&self) -> f64 {
        self.step
    }

    /// 第一个能量点 (keV)
    pub fn first(&self) -> f64 {
        self.energies[0]
    }

    /// 最后一个能量点 (keV)
    pub fn last(&self) -> f64 {
        self.energies[self.energies.len() - 1]
    }

    /// 遍历能量点
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.energies.iter()
    }

    /// 能量点切片
    pub fn as_slice(&self) -> &[f64] {
        &self.energies
    }
}
