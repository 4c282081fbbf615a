//! # plot 命令实现
//!
//! 绘制单个元素（或其某个同位素）的截面曲线，并标出共振峰。
//!
//! ## 功能
//! - 优先读取截面快照，快照中没有该元素时从核数据库检索
//! - 输出 PNG/SVG 图像或 CSV 数据
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `commands/sigmas.rs` 的检索逻辑
//! - 使用 `reso/peaks.rs`, `reso/plot.rs`, `reso/export.rs`

use super::sigmas;
use crate::cli::plot::{PlotArgs, PlotOutputFormat};
use crate::error::{ResoscanError, Result};
use crate::models::{ElementSigma, IsotopeCurve};
use crate::reso::{self, Peak, PeakCriteria};
use crate::utils::output;

use std::path::Path;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Cross-Section Plot");

    let element = element_sigma(&args)?;

    let curve = match args.isotope {
        Some(ref label) => {
            element
                .isotopes
                .get(label)
                .cloned()
                .ok_or_else(|| {
                    ResoscanError::InvalidArgument(format!(
                        "Isotope '{}' not found in {} (available: {})",
                        label,
                        element.symbol,
                        element.isotope_labels().join(", ")
                    ))
                })?
        }
        None => element.total_curve(),
    };
    curve.validate()?;

    let criteria = PeakCriteria {
        height: args.height,
        prominence: args.prominence,
    };
    let peaks = reso::find_peaks(&curve.sigma_b, &criteria);
    output::print_success(&format!(
        "Found {} resonances in '{}'",
        peaks.len(),
        curve.label
    ));

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        PlotOutputFormat::Png | PlotOutputFormat::Svg => {
            let title = args.title.clone().unwrap_or_else(|| curve.label.clone());
            reso::plot::generate_sigma_plot(
                &curve,
                &peaks,
                &args.output,
                &title,
                args.width,
                args.fig_height,
                args.label_peaks,
                args.label_count,
                format == PlotOutputFormat::Svg,
            )?;
        }
        PlotOutputFormat::Csv => reso::export::curve_to_csv(&curve, &args.output)?,
    }

    print_peak_table(&curve, &peaks, 10);

    output::print_done(&format!("Plot saved to '{}'", args.output.display()));
    Ok(())
}

/// 取得目标元素的截面数据
fn element_sigma(args: &PlotArgs) -> Result<ElementSigma> {
    let wanted = [args.element.clone()];

    let mut sigmas =
        sigmas::load_or_retrieve(&args.sigmas, &args.library, &args.retrieval, &wanted)?;

    sigmas
        .remove(&args.element)
        .ok_or_else(|| ResoscanError::NoIsotopeData {
            element: args.element.clone(),
        })
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> PlotOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotOutputFormat::Svg,
        Some("csv") => PlotOutputFormat::Csv,
        _ => PlotOutputFormat::Png,
    }
}

/// 打印最高的若干共振峰
fn print_peak_table(curve: &IsotopeCurve, peaks: &[Peak], count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct PeakRow {
        #[tabled(rename = "E (eV)")]
        energy: String,
        #[tabled(rename = "σ (b)")]
        sigma: String,
        #[tabled(rename = "Prominence (b)")]
        prominence: String,
    }

    let mut sorted: Vec<&Peak> = peaks.iter().collect();
    sorted.sort_by(|a, b| b.height.total_cmp(&a.height));

    let rows: Vec<PeakRow> = sorted
        .iter()
        .take(count)
        .map(|p| PeakRow {
            energy: format!("{:.3}", curve.energy_ev[p.index]),
            sigma: format!("{:.1}", p.height),
            prominence: format!("{:.1}", p.prominence),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Top {} Resonances", rows.len()));
        let table = Table::new(&rows);
        println!("{}", table);
    }
}
