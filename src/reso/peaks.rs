//! # 峰检测
//!
//! 在一维序列中寻找满足高度和突出度阈值的局部极大值。
//!
//! ## 算法
//! 1. 局部极大值：严格大于左邻点，且严格大于右侧第一个不等的点；
//!    平顶峰取中点 `(left + right) / 2`，端点不计
//! 2. 高度过滤：`x[peak] >= height`
//! 3. 突出度：自峰向左走，直到遇到更高的点或边界，记录最小值（左基点）；
//!    向右同理；突出度 = 峰高 - max(左最小值, 右最小值)
//! 4. 突出度过滤：`prominence >= prominence_min`
//!
//! ## 依赖关系
//! - 被 `reso/extractor.rs`, `commands/plot.rs` 调用
//! - 纯计算，无外部依赖

/// 峰判定阈值（两者须同时满足）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakCriteria {
    /// 最小峰高 (barn)
    pub height: f64,
    /// 最小突出度 (barn)
    pub prominence: f64,
}

impl Default for PeakCriteria {
    fn default() -> Self {
        PeakCriteria {
            height: 50.0,
            prominence: 25.0,
        }
    }
}

/// 检测到的峰
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// 在序列中的位置
    pub index: usize,
    /// 峰高
    pub height: f64,
    /// 突出度
    pub prominence: f64,
    /// 左基点位置
    pub left_base: usize,
    /// 右基点位置
    pub right_base: usize,
}

/// 寻找满足阈值的峰，按位置升序返回
pub fn find_peaks(x: &[f64], criteria: &PeakCriteria) -> Vec<Peak> {
    local_maxima(x)
        .into_iter()
        .filter(|&i| x[i] >= criteria.height)
        .map(|i| {
            let (prominence, left_base, right_base) = prominence(x, i);
            Peak {
                index: i,
                height: x[i],
                prominence,
                left_base,
                right_base,
            }
        })
        .filter(|p| p.prominence >= criteria.prominence)
        .collect()
}

/// 局部极大值位置（含平顶峰中点）
pub fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let i_max = x.len() - 1;
    let mut i = 1;

    while i < i_max {
        if x[i - 1] < x[i] {
            // 跳过平顶
            let mut i_ahead = i + 1;
            while i_ahead < i_max && x[i_ahead] == x[i] {
                i_ahead += 1;
            }

            if x[i_ahead] < x[i] {
                let left = i;
                let right = i_ahead - 1;
                peaks.push((left + right) / 2);
                i = i_ahead;
            }
        }
        i += 1;
    }

    peaks
}

/// 计算单个峰的突出度，返回 (突出度, 左基点, 右基点)
pub fn prominence(x: &[f64], peak: usize) -> (f64, usize, usize) {
    let top = x[peak];

    let mut left_min = top;
    let mut left_base = peak;
    for i in (0..=peak).rev() {
        if x[i] > top {
            break;
        }
        if x[i] < left_min {
            left_min = x[i];
            left_base = i;
        }
    }

    let mut right_min = top;
    let mut right_base = peak;
    for (i, &v) in x.iter().enumerate().skip(peak) {
        if v > top {
            break;
        }
        if v < right_min {
            right_min = v;
            right_base = i;
        }
    }

    (top - left_min.max(right_min), left_base, right_base)
}
