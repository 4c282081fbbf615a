//! # resos 命令实现
//!
//! 从截面快照（或核数据库）提取共振峰。
//!
//! ## 功能
//! - 快照不存在、或缺少请求的元素时回退到核数据库检索
//! - `--save` 写回完整的截面数据，而非筛选后的子集
//! - 按阈值提取共振峰
//! - 打印最强共振峰表
//! - 可选保存快照、导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/resos.rs` 定义的参数
//! - 使用 `commands/sigmas.rs` 的快照读取逻辑
//! - 使用 `reso/extractor.rs`, `reso/export.rs`, `storage/`

use super::sigmas;
use crate::cli::resos::ResosArgs;
use crate::error::Result;
use crate::models::resonance::flatten;
use crate::models::{ResonanceMap, SigmaMap};
use crate::reso::{self, PeakCriteria};
use crate::storage::{JsonSnapshot, SnapshotStore};
use crate::utils::output;

use std::borrow::Cow;

/// 执行 resos 命令
pub fn execute(args: ResosArgs) -> Result<()> {
    output::print_header("Resonance Peak Extraction");

    let sigmas =
        sigmas::load_or_retrieve(&args.sigmas, &args.library, &args.retrieval, &args.elements)?;
    let selected = select_elements(&sigmas, &args.elements);

    if selected.is_empty() {
        output::print_warning("No cross sections available; nothing to analyse.");
        return Ok(());
    }

    let criteria = PeakCriteria {
        height: args.height,
        prominence: args.prominence,
    };
    output::print_info(&format!(
        "Peak criteria: height >= {} b, prominence >= {} b",
        criteria.height, criteria.prominence
    ));

    let resos = reso::get_resos(&selected, &criteria)?;

    let total: usize = resos.values().map(|r| r.len()).sum();
    output::print_success(&format!(
        "Found {} resonances in {} isotopes",
        total,
        resos.len()
    ));

    print_resonance_table(&resos, args.top_n);

    if let Some(ref csv_path) = args.csv {
        reso::export::resonances_to_csv(&resos, csv_path)?;
        output::print_success(&format!("Resonances exported to '{}'", csv_path.display()));
    }

    if args.save {
        JsonSnapshot::new(&args.sigmas).save(&sigmas)?;
        JsonSnapshot::new(&args.resos_output).save(&resos)?;
        output::print_success(&format!(
            "Snapshots saved to '{}' and '{}'",
            args.sigmas.display(),
            args.resos_output.display()
        ));
    }

    output::print_done("Resonance extraction complete");
    Ok(())
}

/// 只分析请求的元素；保存快照时仍使用完整数据
fn select_elements<'a>(sigmas: &'a SigmaMap, elements: &[String]) -> Cow<'a, SigmaMap> {
    if elements.is_empty() {
        return Cow::Borrowed(sigmas);
    }
    Cow::Owned(
        sigmas
            .iter()
            .filter(|(symbol, _)| elements.contains(*symbol))
            .map(|(symbol, element)| (symbol.clone(), element.clone()))
            .collect(),
    )
}

/// 打印最强共振峰表
fn print_resonance_table(resos: &ResonanceMap, count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ResonanceRow {
        #[tabled(rename = "Isotope")]
        isotope: String,
        #[tabled(rename = "E (eV)")]
        energy: String,
        #[tabled(rename = "σ (b)")]
        sigma: String,
        #[tabled(rename = "Abundance")]
        abundance: String,
    }

    let mut records = flatten(resos);
    records.sort_by(|a, b| b.1.sigma.total_cmp(&a.1.sigma));

    let rows: Vec<ResonanceRow> = records
        .iter()
        .take(count)
        .map(|(isotope, r)| ResonanceRow {
            isotope: isotope.to_string(),
            energy: format!("{:.3}", r.energy),
            sigma: format!("{:.1}", r.sigma),
            abundance: format!("{:.4}", r.abundance),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Top {} Resonances", rows.len()));
        let table = Table::new(&rows);
        println!("{}", table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::models::{ElementSigma, IsotopeCurve};
    use clap::Parser;
    use std::fs;
    use std::path::Path;

    fn parse(args: &[&str]) -> ResosArgs {
        let mut argv = vec!["resoscan", "resos"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let Commands::Resos(args) = cli.command else {
            panic!("expected resos command");
        };
        args
    }

    fn element(symbol: &str, label: &str) -> ElementSigma {
        let e = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let s = vec![1.0, 1.0, 400.0, 1.0, 1.0];
        ElementSigma::from_isotopes(
            symbol,
            e.clone(),
            vec![IsotopeCurve::new(label, 1.0, e, s)],
        )
    }

    fn write_snapshot(path: &Path, symbols: &[(&str, &str)]) -> SigmaMap {
        let sigmas: SigmaMap = symbols
            .iter()
            .map(|(symbol, label)| (symbol.to_string(), element(symbol, label)))
            .collect();
        JsonSnapshot::new(path).save(&sigmas).unwrap();
        sigmas
    }

    #[test]
    fn test_save_keeps_unrequested_elements() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("sigmas.json");
        let resos_out = dir.path().join("resos.json");
        let before = write_snapshot(&snapshot, &[("Cd", "113-Cd"), ("Fe", "56-Fe")]);

        let args = parse(&[
            "--elements",
            "Fe",
            "--save",
            "--sigmas",
            snapshot.to_str().unwrap(),
            "--resos-output",
            resos_out.to_str().unwrap(),
            "--library",
            dir.path().join("no-library").to_str().unwrap(),
        ]);
        execute(args).unwrap();

        let after: SigmaMap = JsonSnapshot::new(&snapshot).load().unwrap();
        assert_eq!(after, before);

        // 共振峰只来自请求的元素
        let resos: ResonanceMap = JsonSnapshot::new(&resos_out).load().unwrap();
        assert_eq!(resos.keys().collect::<Vec<_>>(), vec!["56-Fe"]);
        assert_eq!(resos["56-Fe"]["3.0"].sigma, 400.0);
    }

    #[test]
    fn test_element_missing_from_snapshot_read_from_library() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("sigmas.json");
        let resos_out = dir.path().join("resos.json");
        write_snapshot(&snapshot, &[("Fe", "56-Fe")]);

        let lib = dir.path().join("lib");
        fs::create_dir(&lib).unwrap();
        fs::write(lib.join("_densities.csv"), "Symbol,Density_g_cm3\nGd,7.9\n").unwrap();
        fs::write(
            lib.join("_isotopic_ratios.csv"),
            "Isotope,Abundance,Mass_amu\n157-Gd,1.0,156.92\n",
        )
        .unwrap();
        fs::write(
            lib.join("Gd-157.csv"),
            "E_eV,Sig_b\n1.0,10.0\n3.0,500.0\n5.0,10.0\n",
        )
        .unwrap();

        let args = parse(&[
            "--elements",
            "Gd",
            "--save",
            "--sigmas",
            snapshot.to_str().unwrap(),
            "--resos-output",
            resos_out.to_str().unwrap(),
            "--library",
            lib.to_str().unwrap(),
            "--e-min",
            "1",
            "--e-max",
            "5",
            "--e-step",
            "1",
        ]);
        execute(args).unwrap();

        let resos: ResonanceMap = JsonSnapshot::new(&resos_out).load().unwrap();
        assert_eq!(resos.keys().collect::<Vec<_>>(), vec!["157-Gd"]);
        assert_eq!(resos["157-Gd"]["3.0"].sigma, 500.0);

        // 补充的元素与原有元素一起写回
        let after: SigmaMap = JsonSnapshot::new(&snapshot).load().unwrap();
        assert_eq!(after.keys().collect::<Vec<_>>(), vec!["Fe", "Gd"]);
    }
}
