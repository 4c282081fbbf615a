//! # 截面图表生成
//!
//! 使用 `plotters` 库绘制截面-能量双对数曲线，并标出检测到的共振峰。
//!
//! ## 功能
//! - 双对数坐标
//! - 共振峰圆点标记，可选能量标注
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/` 的 IsotopeCurve, `reso/peaks.rs` 的 Peak
//! - 使用 `plotters` 渲染图表

use crate::error::{ResoscanError, Result};
use crate::models::IsotopeCurve;
use crate::reso::Peak;

use plotters::prelude::*;
use std::path::Path;

/// 生成截面图表
#[allow(clippy::too_many_arguments)]
pub fn generate_sigma_plot(
    curve: &IsotopeCurve,
    peaks: &[Peak],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    label_peaks: bool,
    label_count: usize,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_sigma_chart(&root, curve, peaks, title, label_peaks, label_count)?;
        root.present()
            .map_err(|e| ResoscanError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_sigma_chart(&root, curve, peaks, title, label_peaks, label_count)?;
        root.present()
            .map_err(|e| ResoscanError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制图表的核心逻辑
fn draw_sigma_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &IsotopeCurve,
    peaks: &[Peak],
    title: &str,
    label_peaks: bool,
    label_count: usize,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    // 对数坐标只能画正值
    let points: Vec<(f64, f64)> = curve
        .energy_ev
        .iter()
        .zip(&curve.sigma_b)
        .filter(|(e, s)| **e > 0.0 && **s > 0.0)
        .map(|(e, s)| (*e, *s))
        .collect();

    if points.len() < 2 {
        return Err(ResoscanError::Other(format!(
            "Not enough positive data points to plot '{}'",
            curve.label
        )));
    }

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min) * 0.5;
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max) * 3.0;

    root.fill(&WHITE)
        .map_err(|e| ResoscanError::Other(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        .map_err(|e| ResoscanError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Energy (eV)")
        .y_desc("Cross section (barn)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ResoscanError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(points, line_color.stroke_width(2)))
        .map_err(|e| ResoscanError::Other(format!("{:?}", e)))?;

    // 共振峰标记
    let marker_color = RGBColor(204, 51, 0);
    let marked: Vec<(f64, f64)> = peaks
        .iter()
        .map(|p| (curve.energy_ev[p.index], p.height))
        .filter(|(e, s)| *e > 0.0 && *s > 0.0)
        .collect();

    chart
        .draw_series(
            marked
                .iter()
                .map(|&(e, s)| Circle::new((e, s), 4, marker_color.filled())),
        )
        .map_err(|e| ResoscanError::Other(format!("{:?}", e)))?;

    if label_peaks {
        // 标注最高的若干个峰
        let mut tallest = marked.clone();
        tallest.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (energy, sigma) in tallest.into_iter().take(label_count) {
            let text_style = ("sans-serif", 12).into_font().color(&BLACK);
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{:.3} eV", energy),
                    (energy, sigma * 1.2),
                    text_style,
                )))
                .map_err(|e| ResoscanError::Other(format!("{:?}", e)))?;
        }
    }

    Ok(())
}
