use crate::convolution::convolutionerror::ConvolutionError;
use crate::convolution::samplinggrid::SamplingGrid;
use crate::math::function::realfunction::RealFunction;

/// 單位面積脈衝，作為 delta 函數的有限近似。
///
/// 高度依取樣網格正規化：設 `n` 為網格上滿足 `|s| < width / 2` 的點數，
/// 則高度為 `1 / (n · sample_width)`，使得 `Σ sample_width · δ(s_i) = 1` 在該網格上精確成立。
///
/// # 偏差
/// 以 `δ` 作為第一個運算元時，`δ * f` 等於 `f` 在寬度 `width` 視窗內 `n` 個網格點的移動平均：
/// 連續區段幾乎不變，但不連續點會被抹平在 `width` 的範圍內。
/// `width → 0`（但不小於 `sample_width`）時偏差趨近於 0。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    width: f64,
    height: f64
}

impl Impulse {
    pub fn new(grid: &SamplingGrid, width: f64) -> Result<Impulse, ConvolutionError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ConvolutionError::invalid_configuration(format!(
                "impulse width must be a positive finite number, got {}", width
            )));
        }
        let half_width = 0.5 * width;
        let n_inside = grid.points()
            .iter()
            .filter(|s| s.abs() < half_width)
            .count();
        if n_inside == 0 {
            return Err(ConvolutionError::ImpulseTooNarrow {
                width,
                sample_width: grid.sample_width()
            });
        }
        let height = 1.0 / (n_inside as f64 * grid.sample_width());
        Ok(Impulse { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl RealFunction for Impulse {
    fn value(&self, x: f64) -> f64 {
        if x.abs() < 0.5 * self.width {
            self.height
        } else {
            0.0
        }
    }
}
