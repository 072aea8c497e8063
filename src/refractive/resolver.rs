//! # 材料解析
//!
//! 把命令行给出的材料名解析为可求值的材料描述。
//!
//! ## 解析顺序
//! 1. 先按化学式解析（交给外部数据库的化学式解析器）
//! 2. 失败则查目录：精确匹配（忽略大小写）静默采用；
//!    恰好一条子串匹配时按消歧策略确认；零条或多条则报错
//!
//! ## 密度优先级
//! 显式给定 > 目录参考密度 > 单元素化学式的元素密度 > 硬错误
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs` 调用
//! - 使用 `catalog/` 的目录匹配与 `utils/prompt.rs` 的交互确认

use crate::catalog::{CatalogEntry, CompoundCatalog, MatchOutcome};
use crate::error::{Result, XRefractError};
use crate::utils::prompt;

use xraydb::chemparser::chemparse;
use xraydb::XrayDb;

/// 命令行提出的一条材料请求
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRequest {
    /// 材料名（化学式或目录名称）
    pub name: String,
    /// 显式给定的密度 (g/cm³)
    pub explicit_density: Option<f64>,
}

/// 密度来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensitySource {
    /// 命令行显式给定
    Explicit,
    /// 目录参考密度
    Catalog,
    /// 单元素化学式的元素密度
    ElementDerived,
}

impl std::fmt::Display for DensitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DensitySource::Explicit => write!(f, "explicit"),
            DensitySource::Catalog => write!(f, "catalog"),
            DensitySource::ElementDerived => write!(f, "element"),
        }
    }
}

/// 消歧策略
///
/// 交互式提问只在 `Interactive` 下发生；非交互场景
/// 用 `AssumeYes` / `AssumeNo` 预先给定回答。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguation {
    /// 阻塞在终端向操作者提问
    Interactive,
    /// 视为接受唯一的模糊匹配
    AssumeYes,
    /// 视为拒绝唯一的模糊匹配
    AssumeNo,
}

/// 解析完成、可交给求值器的材料
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMaterial {
    /// 规范名称（目录名或原始化学式），用于表头与文件名
    pub name: String,
    /// 交给外部数据库求值的化学式
    pub formula: String,
    /// 元素组成 (符号, 计量数)，按符号排序
    pub composition: Vec<(String, f64)>,
    /// 密度 (g/cm³)，恒为正
    pub density: f64,
    /// 密度来源
    pub density_source: DensitySource,
}

/// 解析一条材料请求。
///
/// 失败时返回对应的诊断错误；交互确认被拒绝视为无匹配。
pub fn resolve(
    request: &MaterialRequest,
    catalog: &CompoundCatalog,
    db: &XrayDb,
    policy: Disambiguation,
) -> Result<ResolvedMaterial> {
    if let Some(density) = request.explicit_density {
        if !(density > 0.0) || !density.is_finite() {
            return Err(XRefractError::NonPositiveDensity {
                name: request.name.clone(),
                value: density,
            });
        }
    }

    match chemparse(&request.name) {
        Ok(parsed) => resolve_formula(request, sorted_composition(parsed), db),
        Err(_) => resolve_from_catalog(request, catalog, policy),
    }
}

/// 化学式材料：密度取显式值，或单元素时取元素密度
fn resolve_formula(
    request: &MaterialRequest,
    composition: Vec<(String, f64)>,
    db: &XrayDb,
) -> Result<ResolvedMaterial> {
    let (density, density_source) = match request.explicit_density {
        Some(density) => (density, DensitySource::Explicit),
        None if composition.len() == 1 => {
            let symbol = &composition[0].0;
            let density = db
                .density(symbol)
                .map_err(|source| XRefractError::Oracle {
                    context: format!("density of element '{}'", symbol),
                    source,
                })?;
            (density, DensitySource::ElementDerived)
        }
        None => {
            return Err(XRefractError::MissingDensity {
                name: request.name.clone(),
            });
        }
    };

    Ok(ResolvedMaterial {
        name: request.name.clone(),
        formula: request.name.clone(),
        composition,
        density,
        density_source,
    })
}

/// 目录材料：精确匹配静默采用，唯一模糊匹配按策略确认
fn resolve_from_catalog(
    request: &MaterialRequest,
    catalog: &CompoundCatalog,
    policy: Disambiguation,
) -> Result<ResolvedMaterial> {
    match catalog.find(&request.name) {
        MatchOutcome::Exact(entry) => adopt_entry(request, entry),
        MatchOutcome::Single(entry) => {
            let accepted = match policy {
                Disambiguation::Interactive => {
                    let question = format!(
                        "Found no exact compound match for '{}'. Did you mean '{}'?",
                        request.name, entry.name
                    );
                    prompt::query_yes_no(&question, Some(true)).map_err(XRefractError::Prompt)?
                }
                Disambiguation::AssumeYes => true,
                Disambiguation::AssumeNo => false,
            };

            if accepted {
                adopt_entry(request, entry)
            } else {
                Err(XRefractError::NoMatch {
                    name: request.name.clone(),
                })
            }
        }
        MatchOutcome::Multiple(entries) => Err(XRefractError::AmbiguousMaterial {
            name: request.name.clone(),
            candidates: entries.iter().map(|entry| entry.name.to_string()).collect(),
        }),
        MatchOutcome::None => Err(XRefractError::AmbiguousMaterial {
            name: request.name.clone(),
            candidates: Vec::new(),
        }),
    }
}

/// 采用一条目录记录，组成取自其化学式
fn adopt_entry(request: &MaterialRequest, entry: &CatalogEntry) -> Result<ResolvedMaterial> {
    let parsed = chemparse(entry.formula).map_err(|source| XRefractError::Oracle {
        context: format!("formula '{}' of catalog entry '{}'", entry.formula, entry.name),
        source,
    })?;

    let (density, density_source) = match request.explicit_density {
        Some(density) => (density, DensitySource::Explicit),
        None => (entry.density, DensitySource::Catalog),
    };

    Ok(ResolvedMaterial {
        name: entry.name.to_string(),
        formula: entry.formula.to_string(),
        composition: sorted_composition(parsed),
        density,
        density_source,
    })
}

/// HashMap 组成转为按符号排序的向量，保证确定性
fn sorted_composition(parsed: std::collections::HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut composition: Vec<(String, f64)> = parsed.into_iter().collect();
    composition.sort_by(|a, b| a.0.cmp(&b.0));
    composition
}
