//! # 截面检索
//!
//! 将元素逐个作为样品层加入样品堆栈，并收集各层的同位素截面曲线。
//!
//! ## 失败策略
//! 单个元素失败（密度未知、丰度未知、无截面表等）只影响该元素：
//! 记录诊断信息后跳过，继续处理其余元素，错误不会传出本模块。
//!
//! ## 依赖关系
//! - 被 `commands/sigmas.rs`, `commands/resos.rs`, `commands/plot.rs` 调用
//! - 使用 `library::CrossSectionProvider` 获取数据
//! - 使用 `utils/output.rs`, `utils/progress.rs` 输出进度

use crate::error::{ResoscanError, Result};
use crate::library::{CrossSectionProvider, ElementProperties};
use crate::models::{ElementSigma, EnergyGrid, SigmaMap};
use crate::utils::{output, progress};

/// 阿伏伽德罗常数 (1/mol)
const AVOGADRO: f64 = 6.022_140_76e23;

/// 1 barn = 1e-24 cm²
const BARN_CM2: f64 = 1e-24;

/// 样品层
#[derive(Debug, Clone)]
pub struct Layer {
    /// 元素符号
    pub symbol: String,
    /// 厚度 (mm)
    pub thickness_mm: f64,
    /// 物理性质
    pub properties: ElementProperties,
    /// 原子数密度 (atoms/cm³)
    pub number_density: f64,
    /// 截面数据
    pub sigma: ElementSigma,
    /// 透射率 T(E) = exp(-n σ d)
    pub transmission: Vec<f64>,
}

impl Layer {
    /// 最小透射率（共振最强处）
    pub fn min_transmission(&self) -> f64 {
        self.transmission.iter().copied().fold(1.0, f64::min)
    }
}

/// 样品堆栈
pub struct SampleStack<'a, P: CrossSectionProvider> {
    provider: &'a P,
    grid: EnergyGrid,
    layers: Vec<Layer>,
}

impl<'a, P: CrossSectionProvider> SampleStack<'a, P> {
    /// 创建空堆栈
    pub fn new(provider: &'a P, grid: EnergyGrid) -> Self {
        Self {
            provider,
            grid,
            layers: Vec::new(),
        }
    }

    /// 加入一层元素，已存在的元素不重复加入
    pub fn add_layer(&mut self, symbol: &str, thickness_mm: f64) -> Result<&Layer> {
        if let Some(i) = self.layers.iter().position(|l| l.symbol == symbol) {
            return Ok(&self.layers[i]);
        }

        if !(thickness_mm.is_finite() && thickness_mm > 0.0) {
            return Err(ResoscanError::InvalidArgument(format!(
                "thickness must be positive, got {} mm",
                thickness_mm
            )));
        }

        let properties = self.provider.properties(symbol)?;
        let sigma = self.provider.element_sigma(symbol, &self.grid)?;

        let number_density = properties.density_g_cm3 * AVOGADRO / properties.molar_mass_g_mol;
        let thickness_cm = thickness_mm / 10.0;
        let transmission = sigma
            .sigma_b
            .iter()
            .map(|s| (-number_density * s * BARN_CM2 * thickness_cm).exp())
            .collect();

        self.layers.push(Layer {
            symbol: symbol.to_string(),
            thickness_mm,
            properties,
            number_density,
            sigma,
            transmission,
        });

        Ok(&self.layers[self.layers.len() - 1])
    }

    /// 已加入的样品层
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// 各层截面：元素符号 → 截面数据
    pub fn stack_sigma(&self) -> SigmaMap {
        self.layers
            .iter()
            .map(|l| (l.symbol.clone(), l.sigma.clone()))
            .collect()
    }

    /// 整个堆栈的透射率（各层相乘）
    pub fn transmission(&self) -> Vec<f64> {
        let mut total = vec![1.0; self.grid.len()];
        for layer in &self.layers {
            for (t, l) in total.iter_mut().zip(&layer.transmission) {
                *t *= l;
            }
        }
        total
    }
}

/// 单个元素的检索结果
#[derive(Debug)]
pub enum LayerOutcome {
    /// 成功加入
    Added,
    /// 跳过
    Skipped(String, ResoscanError), // (元素, 错误)
}

/// 检索结果汇总
#[derive(Debug, Default)]
pub struct Retrieval {
    /// 元素符号 → 截面数据
    pub sigmas: SigmaMap,
    /// 被跳过的元素及原因
    pub skipped: Vec<(String, ResoscanError)>,
}

/// 检索一组元素的截面，失败元素被记录并跳过
pub fn get_sigmas<P: CrossSectionProvider>(
    stack: &mut SampleStack<'_, P>,
    elements: &[String],
    thickness_mm: f64,
) -> Retrieval {
    let pb = progress::create_progress_bar(elements.len() as u64, "Retrieving");

    let mut outcomes = Vec::with_capacity(elements.len());
    for element in elements {
        pb.suspend(|| output::print_info(&format!("Getting resonances for {}", element)));

        let outcome = match stack.add_layer(element, thickness_mm) {
            Ok(_) => LayerOutcome::Added,
            Err(e) => LayerOutcome::Skipped(element.clone(), e),
        };

        if let LayerOutcome::Skipped(element, err) = &outcome {
            pb.suspend(|| output::print_warning(&skip_message(element, err)));
        }

        outcomes.push(outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();

    let skipped = outcomes
        .into_iter()
        .filter_map(|o| match o {
            LayerOutcome::Added => None,
            LayerOutcome::Skipped(element, err) => Some((element, err)),
        })
        .collect();

    Retrieval {
        sigmas: stack.stack_sigma(),
        skipped,
    }
}

/// 跳过元素的诊断信息
fn skip_message(element: &str, err: &ResoscanError) -> String {
    match err.likely_cause() {
        Some(cause) => format!(
            "Issue retrieving cross section for element: {} (likely issue: {})",
            element, cause
        ),
        None => format!(
            "Issue retrieving cross section for element: {} ({})",
            element, err
        ),
    }
}
