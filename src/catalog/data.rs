//! # NIST 化合物目录数据
//!
//! 内嵌的 NIST 参考材料表，按名称查询。
//! 名称与密度取自 NIST X 射线衰减系数表的化合物清单；
//! 组成以化学式给出，供外部 X 射线数据库解析。
//!
//! ## 依赖关系
//! - 被 `catalog/mod.rs` 封装后使用

/// 每条记录: (名称, 密度 g/cm³, 化学式)
pub(crate) const NIST_COMPOUNDS: &[(&str, f64, &str)] = &[
    // 气体
    ("Acetylene", 1.097e-3, "C2H2"),
    ("Air, Dry (near sea level)", 1.20479e-3, "N1.562O0.4192Ar0.00934C0.00037"),
    ("Ammonia", 8.26019e-4, "NH3"),
    ("Butane", 2.49343e-3, "C4H10"),
    ("Carbon Dioxide", 1.84212e-3, "CO2"),
    ("Ethane", 1.25324e-3, "C2H6"),
    ("Ethylene", 1.17497e-3, "C2H4"),
    ("Methane", 6.67151e-4, "CH4"),
    ("Nitrous Oxide", 1.83094e-3, "N2O"),
    ("Propane", 1.87939e-3, "C3H8"),
    ("Tungsten Hexafluoride", 2.4, "WF6"),
    ("Water Vapor", 7.56182e-4, "H2O"),
    // 液体
    ("Acetone", 0.7899, "C3H6O"),
    ("Aniline", 1.0235, "C6H7N"),
    ("Benzene", 0.87865, "C6H6"),
    ("N-Butyl Alcohol", 0.8098, "C4H10O"),
    ("Carbon Tetrachloride", 1.594, "CCl4"),
    ("Chlorobenzene", 1.1058, "C6H5Cl"),
    ("Chloroform", 1.4832, "CHCl3"),
    ("Cyclohexane", 0.779, "C6H12"),
    ("1,2-Dichlorobenzene", 1.3048, "C6H4Cl2"),
    ("1,2-Dichloroethane", 1.2351, "C2H4Cl2"),
    ("Diethyl Ether", 0.71378, "C4H10O"),
    ("Dimethyl Sulfoxide", 1.1014, "C2H6OS"),
    ("Ethyl Alcohol", 0.7893, "C2H6O"),
    ("Glycerol", 1.2613, "C3H8O3"),
    ("N-Heptane", 0.68376, "C7H16"),
    ("N-Hexane", 0.6603, "C6H14"),
    ("Methanol", 0.7914, "CH4O"),
    ("Nitrobenzene", 1.19867, "C6H5NO2"),
    ("N-Pentane", 0.6262, "C5H12"),
    ("Propane, Liquid", 0.43, "C3H8"),
    ("N-Propyl Alcohol", 0.8035, "C3H8O"),
    ("Pyridine", 0.9819, "C5H5N"),
    ("Tetrachloroethylene", 1.625, "C2Cl4"),
    ("Toluene", 0.8669, "C7H8"),
    ("Trichloroethylene", 1.46, "C2HCl3"),
    ("Water, Liquid", 1.0, "H2O"),
    ("Xylene", 0.87, "C8H10"),
    // 无机化合物
    ("Aluminum Oxide", 3.97, "Al2O3"),
    ("Barium Fluoride", 4.89, "BaF2"),
    ("Barium Sulfate", 4.5, "BaSO4"),
    ("Beryllium Oxide", 3.01, "BeO"),
    ("Bismuth Germanium Oxide", 7.13, "Bi4Ge3O12"),
    ("Boron Carbide", 2.52, "B4C"),
    ("Boron Oxide", 1.812, "B2O3"),
    ("Cadmium Telluride", 6.2, "CdTe"),
    ("Cadmium Tungstate", 7.9, "CdWO4"),
    ("Calcium Carbonate", 2.8, "CaCO3"),
    ("Calcium Fluoride", 3.18, "CaF2"),
    ("Calcium Oxide", 3.3, "CaO"),
    ("Calcium Sulfate", 2.96, "CaSO4"),
    ("Calcium Tungstate", 6.062, "CaWO4"),
    ("Cesium Fluoride", 4.115, "CsF"),
    ("Cesium Iodide", 4.51, "CsI"),
    ("Ferric Oxide", 5.2, "Fe2O3"),
    ("Ferrous Oxide", 5.7, "FeO"),
    ("Gadolinium Oxysulfide", 7.44, "Gd2O2S"),
    ("Gallium Arsenide", 5.31, "GaAs"),
    ("Lanthanum Oxybromide", 6.28, "LaOBr"),
    ("Lanthanum Oxysulfide", 5.86, "La2O2S"),
    ("Lead Oxide", 9.53, "PbO"),
    ("Lithium Carbonate", 2.11, "Li2CO3"),
    ("Lithium Fluoride", 2.635, "LiF"),
    ("Lithium Hydride", 0.82, "LiH"),
    ("Lithium Iodide", 3.494, "LiI"),
    ("Lithium Oxide", 2.013, "Li2O"),
    ("Lithium Tetraborate", 2.44, "Li2B4O7"),
    ("Magnesium Carbonate", 2.958, "MgCO3"),
    ("Magnesium Fluoride", 3.0, "MgF2"),
    ("Magnesium Oxide", 3.58, "MgO"),
    ("Magnesium Tetraborate", 2.53, "MgB4O7"),
    ("Mercuric Iodide", 6.36, "HgI2"),
    ("Potassium Iodide", 3.13, "KI"),
    ("Potassium Oxide", 2.32, "K2O"),
    ("Silicon Dioxide", 2.32, "SiO2"),
    ("Silver Bromide", 6.473, "AgBr"),
    ("Silver Chloride", 5.56, "AgCl"),
    ("Silver Iodide", 5.675, "AgI"),
    ("Sodium Carbonate", 2.532, "Na2CO3"),
    ("Sodium Iodide", 3.667, "NaI"),
    ("Sodium Monoxide", 2.27, "Na2O"),
    ("Sodium Nitrate", 2.261, "NaNO3"),
    ("Thallium Chloride", 7.004, "TlCl"),
    ("Titanium Dioxide", 4.26, "TiO2"),
    ("Uranium Dicarbide", 11.28, "UC2"),
    ("Uranium Monocarbide", 13.63, "UC"),
    ("Uranium Oxide", 10.96, "UO2"),
    // 有机化合物与聚合物
    ("Adenine", 1.35, "C5H5N5"),
    ("Anthracene", 1.283, "C14H10"),
    ("Glucose", 1.54, "C6H12O6"),
    ("Glutamine", 1.46, "C5H10N2O3"),
    ("Guanine", 1.58, "C5H5N5O"),
    ("Kapton Polyimide Film", 1.42, "C22H10N2O5"),
    ("Naphthalene", 1.145, "C10H8"),
    ("Nylon, type 6 and type 6/6", 1.14, "C6H11NO"),
    ("Paraffin Wax", 0.93, "C25H52"),
    ("Polyacrylonitrile", 1.17, "C3H3N"),
    ("Polycarbonate (Makrolon, Lexan)", 1.2, "C16H14O3"),
    ("Polyethylene", 0.94, "C2H4"),
    ("Polyethylene Terephthalate (Mylar)", 1.4, "C10H8O4"),
    ("Polymethyl Methacralate (Lucite, Perspex)", 1.19, "C5H8O2"),
    ("Polyoxymethylene", 1.425, "CH2O"),
    ("Polypropylene", 0.9, "C3H6"),
    ("Polystyrene", 1.06, "C8H8"),
    ("Polytetrafluoroethylene (Teflon)", 2.2, "C2F4"),
    ("Polyvinyl Alcohol", 1.3, "C2H4O"),
    ("Polyvinyl Chloride", 1.3, "C2H3Cl"),
    ("Polyvinylidene Chloride, Saran", 1.7, "C2H2Cl2"),
    ("Polyvinylidene Fluoride", 1.76, "C2H2F2"),
    ("Stilbene", 0.9707, "C14H12"),
    ("Sucrose", 1.5805, "C12H22O11"),
    ("Terphenyl", 1.234, "C18H14"),
    ("Urea", 1.323, "CH4N2O"),
    ("Valine", 1.23, "C5H11NO2"),
];
