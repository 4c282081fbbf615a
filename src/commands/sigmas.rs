//! # sigmas 命令实现
//!
//! 从核数据库检索截面曲线并保存为快照。
//!
//! ## 功能
//! - 未指定元素时读取整个元素目录
//! - 逐元素加入样品堆栈，失败元素跳过
//! - 打印各层汇总表
//! - 供 `resos`, `plot` 复用的快照读取/检索逻辑
//!
//! ## 依赖关系
//! - 使用 `cli/sigmas.rs` 定义的参数
//! - 使用 `library/`, `reso/retriever.rs`, `storage/`
//! - 使用 `utils/output.rs`

use crate::cli::library::{LibraryArgs, RetrievalArgs};
use crate::cli::sigmas::SigmasArgs;
use crate::error::{ResoscanError, Result};
use crate::library::{self, EndfLibrary};
use crate::models::{EnergyGrid, SigmaMap};
use crate::reso::retriever::Layer;
use crate::reso::{get_sigmas, Retrieval, SampleStack};
use crate::storage::{JsonSnapshot, SnapshotStore};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 样品层汇总行
#[derive(Tabled)]
struct LayerRow {
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Thickness (mm)")]
    thickness: String,
    #[tabled(rename = "Isotopes")]
    isotopes: usize,
    #[tabled(rename = "Density (g/cm³)")]
    density: String,
    #[tabled(rename = "n (atoms/cm³)")]
    number_density: String,
    #[tabled(rename = "Min T")]
    min_transmission: String,
}

/// 执行 sigmas 命令
pub fn execute(args: SigmasArgs) -> Result<()> {
    output::print_header("Retrieving Neutron Cross Sections");

    let retrieval = retrieve(&args.library, &args.retrieval, &args.elements)?;

    if retrieval.sigmas.is_empty() {
        output::print_warning("No cross sections were retrieved; nothing to save.");
        return Ok(());
    }

    JsonSnapshot::new(&args.output).save(&retrieval.sigmas)?;

    output::print_done(&format!(
        "Saved cross sections for {} elements to '{}'",
        retrieval.sigmas.len(),
        args.output.display()
    ));

    Ok(())
}

/// 从核数据库检索截面
pub(crate) fn retrieve(
    library: &LibraryArgs,
    retrieval: &RetrievalArgs,
    elements: &[String],
) -> Result<Retrieval> {
    let grid = EnergyGrid::new(retrieval.e_min, retrieval.e_max, retrieval.e_step)?;

    let provider = EndfLibrary::open_with(&library.library, &library.densities, &library.ratios)?;

    let elements = if elements.is_empty() {
        let all = library::read_elements(provider.root(), &library.catalog)?;
        output::print_info(&format!("Using all {} elements from the catalog", all.len()));
        all
    } else {
        elements.to_vec()
    };

    output::print_info(&format!(
        "Energy grid: {} - {} eV, step {} eV ({} points)",
        grid.min,
        grid.max,
        grid.step,
        grid.len()
    ));

    let mut stack = SampleStack::new(&provider, grid);
    let result = get_sigmas(&mut stack, &elements, retrieval.thickness);

    print_layer_table(stack.layers());
    if !stack.layers().is_empty() {
        let min_t = stack.transmission().into_iter().fold(1.0, f64::min);
        output::print_info(&format!("Minimum transmission of the whole stack: {:.4}", min_t));
    }

    if !result.skipped.is_empty() {
        output::print_warning(&format!(
            "Skipped {} of {} elements",
            result.skipped.len(),
            elements.len()
        ));
    }
    output::print_success(&format!(
        "Retrieved cross sections for {} elements",
        result.sigmas.len()
    ));

    Ok(result)
}

/// 读取截面快照；快照不存在时从核数据库检索，
/// 快照中缺少的请求元素从核数据库补充
pub(crate) fn load_or_retrieve(
    snapshot: &Path,
    library: &LibraryArgs,
    retrieval: &RetrievalArgs,
    elements: &[String],
) -> Result<SigmaMap> {
    let store = JsonSnapshot::new(snapshot);

    let loaded: Result<SigmaMap> = store.load();
    match loaded {
        Ok(mut sigmas) => {
            output::print_success(&format!(
                "Loaded cross sections for {} elements from '{}'",
                sigmas.len(),
                store.path().display()
            ));

            let missing: Vec<String> = elements
                .iter()
                .filter(|e| !sigmas.contains_key(*e))
                .cloned()
                .collect();
            if !missing.is_empty() {
                output::print_info(&format!(
                    "Not in the snapshot: {}; reading them from the library...",
                    missing.join(", ")
                ));
                sigmas.extend(retrieve(library, retrieval, &missing)?.sigmas);
            }

            Ok(sigmas)
        }
        Err(ResoscanError::FileNotFound { .. }) => {
            output::print_warning(&format!(
                "Did not find cross-section snapshot '{}'",
                store.path().display()
            ));
            output::print_info("Reading cross-section data from the library...");
            Ok(retrieve(library, retrieval, elements)?.sigmas)
        }
        Err(e) => Err(e),
    }
}

/// 打印样品层汇总表
fn print_layer_table(layers: &[Layer]) {
    let rows: Vec<LayerRow> = layers
        .iter()
        .map(|l| LayerRow {
            element: l.symbol.clone(),
            thickness: format!("{:.3}", l.thickness_mm),
            isotopes: l.sigma.isotope_labels().len(),
            density: format!("{:.4}", l.properties.density_g_cm3),
            number_density: format!("{:.4e}", l.number_density),
            min_transmission: format!("{:.4}", l.min_transmission()),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("{} Sample Layers", rows.len()));
        println!("{}", Table::new(&rows));
    }
}
