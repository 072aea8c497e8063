//! # 折射率曲线图
//!
//! 使用 `plotters` 把 delta/beta 随能量的变化渲染为 PNG。
//! 两个量跨多个数量级，y 轴取对数坐标。
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs` 调用（`--plot`）
//! - 使用 `refractive/grid.rs` 与求值结果

use crate::error::{Result, XRefractError};
use crate::refractive::grid::EnergyGrid;
use crate::refractive::resolver::ResolvedMaterial;

use num_complex::Complex64;
use plotters::prelude::*;
use std::path::Path;

/// 渲染 delta/beta 对能量的对数坐标曲线图 (PNG)。
pub fn generate_index_plot(
    output_path: &Path,
    material: &ResolvedMaterial,
    grid: &EnergyGrid,
    indices: &[Complex64],
    width: u32,
    height: u32,
) -> Result<()> {
    // 对数坐标只能画正值
    let delta_series: Vec<(f64, f64)> = grid
        .iter()
        .zip(indices)
        .map(|(&e, n)| (e, 1.0 - n.re))
        .filter(|&(_, v)| v > 0.0)
        .collect();
    let beta_series: Vec<(f64, f64)> = grid
        .iter()
        .zip(indices)
        .map(|(&e, n)| (e, n.im))
        .filter(|&(_, v)| v > 0.0)
        .collect();

    let values: Vec<f64> = delta_series
        .iter()
        .chain(beta_series.iter())
        .map(|&(_, v)| v)
        .collect();
    if values.is_empty() {
        return Err(XRefractError::PlotError(format!(
            "no positive delta/beta values for '{}'",
            material.name
        )));
    }

    let y_min = values.iter().copied().fold(f64::INFINITY, f64::min) * 0.5;
    let y_max = values.iter().copied().fold(0.0_f64, f64::max) * 2.0;

    let x_min = grid.first();
    // 单点网格时补一个步长，避免退化的 x 轴范围
    let x_max = if grid.len() > 1 {
        grid.last()
    } else {
        grid.first() + grid.step()
    };

    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| XRefractError::PlotError(format!("{:?}", e)))?;

    let title = format!(
        "{} (density = {} g/cm**3)",
        material.name, material.density
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())
        .map_err(|e| XRefractError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Energy (keV)")
        .y_desc("delta, beta")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| XRefractError::PlotError(format!("{:?}", e)))?;

    let delta_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            delta_series.iter().copied(),
            delta_color.stroke_width(2),
        ))
        .map_err(|e| XRefractError::PlotError(format!("{:?}", e)))?
        .label("delta")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], delta_color.stroke_width(2))
        });

    let beta_color = RGBColor(204, 51, 0);
    chart
        .draw_series(LineSeries::new(
            beta_series.iter().copied(),
            beta_color.stroke_width(2),
        ))
        .map_err(|e| XRefractError::PlotError(format!("{:?}", e)))?
        .label("beta")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], beta_color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| XRefractError::PlotError(format!("{:?}", e)))?;

    root.present()
        .map_err(|e| XRefractError::PlotError(e.to_string()))?;

    Ok(())
}
