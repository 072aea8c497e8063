//! # 化合物目录模块
//!
//! 封装内嵌的 NIST 参考材料表，提供名称匹配。
//!
//! ## 匹配规则
//! - 精确匹配（忽略大小写）优先，静默采用
//! - 否则做子串匹配（忽略大小写）：恰好一条记录时交给调用方确认，
//!   零条或多条时由调用方报错并列出候选
//!
//! ## 依赖关系
//! - 被 `refractive/resolver.rs` 和 `commands/` 使用
//! - 子模块: data（内嵌数据表）

mod data;

/// 目录中的一条参考材料记录
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// 目录名称（如 "Water, Liquid"）
    pub name: &'static str,
    /// 参考密度 (g/cm³)
    pub density: f64,
    /// 化学式（交给外部数据库解析）
    pub formula: &'static str,
}

/// 名称查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    /// 精确匹配（忽略大小写），直接采用
    Exact(&'a CatalogEntry),
    /// 恰好一条子串匹配，需要调用方确认
    Single(&'a CatalogEntry),
    /// 多条子串匹配，无法消歧
    Multiple(Vec<&'a CatalogEntry>),
    /// 无任何匹配
    None,
}

/// 只读化合物目录
///
/// 由入口加载一次后以引用传递，不做全局状态。
#[derive(Debug, Clone)]
pub struct CompoundCatalog {
    entries: Vec<CatalogEntry>,
}

impl CompoundCatalog {
    /// 加载内嵌的 NIST 化合物目录
    pub fn embedded() -> Self {
        let entries = data::NIST_COMPOUNDS
            .iter()
            .map(|&(name, density, formula)| CatalogEntry {
                name,
                density,
                formula,
            })
            .collect();
        Self { entries }
    }

    /// 从给定记录构造目录
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 遍历全部记录
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// 按目录名称精确查找（忽略大小写）
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// 按名称匹配：精确匹配优先，否则收集子串匹配
    pub fn find(&self, name: &str) -> MatchOutcome<'_> {
        let needle = name.to_lowercase();

        if let Some(entry) = self.get(name) {
            return MatchOutcome::Exact(entry);
        }

        let matches: Vec<&CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect();

        match matches.len() {
            0 => MatchOutcome::None,
            1 => MatchOutcome::Single(matches[0]),
            _ => MatchOutcome::Multiple(matches),
        }
    }

    /// 按子串筛选记录（忽略大小写），空串返回全部
    pub fn filter(&self, pattern: &str) -> Vec<&CatalogEntry> {
        let needle = pattern.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> CompoundCatalog {
        CompoundCatalog::from_entries(vec![
            CatalogEntry {
                name: "Silicon",
                density: 2.33,
                formula: "Si",
            },
            CatalogEntry {
                name: "Silicon Dioxide",
                density: 2.32,
                formula: "SiO2",
            },
            CatalogEntry {
                name: "Gallium Arsenide",
                density: 5.31,
                formula: "GaAs",
            },
        ])
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CompoundCatalog::embedded();
        assert!(!catalog.is_empty());
        assert!(catalog.len() > 50);
        assert!(catalog.get("Water, Liquid").is_some());
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let catalog = small_catalog();
        match catalog.find("gallium arsenide") {
            MatchOutcome::Exact(entry) => assert_eq!(entry.name, "Gallium Arsenide"),
            other => panic!("expected exact match, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_match_wins_over_substring() {
        // "Silicon" 同时是 "Silicon Dioxide" 的子串，精确匹配必须静默胜出
        let catalog = small_catalog();
        match catalog.find("silicon") {
            MatchOutcome::Exact(entry) => assert_eq!(entry.name, "Silicon"),
            other => panic!("expected exact match, got {:?}", other),
        }
    }

    #[test]
    fn test_single_substring_match() {
        let catalog = small_catalog();
        match catalog.find("Gallium") {
            MatchOutcome::Single(entry) => assert_eq!(entry.name, "Gallium Arsenide"),
            other => panic!("expected single match, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_substring_matches() {
        let catalog = small_catalog();
        match catalog.find("Sili") {
            MatchOutcome::Multiple(entries) => {
                assert_eq!(entries.len(), 2);
            }
            other => panic!("expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match() {
        let catalog = small_catalog();
        assert_eq!(catalog.find("Unobtainium"), MatchOutcome::None);
    }

    #[test]
    fn test_filter() {
        let catalog = small_catalog();
        assert_eq!(catalog.filter("silicon").len(), 2);
        assert_eq!(catalog.filter("").len(), 3);
    }
}
