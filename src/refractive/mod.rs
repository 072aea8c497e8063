//! # 折射率计算模块
//!
//! 提供从材料请求到输出文件的全部领域逻辑。
//!
//! ## 子模块
//! - `grid`: 能量网格构造
//! - `resolver`: 材料名解析与密度确定
//! - `evaluator`: 逐能量点查询外部数据库
//! - `edges`: 吸收边标注
//! - `export`: TXT/CSV 数据导出
//! - `plot`: delta/beta 曲线图
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs` 使用
//! - 使用 `catalog/` 与外部 `xraydb` 数据库

pub mod edges;
pub mod evaluator;
pub mod export;
pub mod grid;
pub mod plot;
pub mod resolver;

pub use evaluator::RefractiveIndexCalculator;
pub use grid::EnergyGrid;
pub use resolver::{Disambiguation, MaterialRequest, ResolvedMaterial};
