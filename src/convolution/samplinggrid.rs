use crate::convolution::convolutionerror::ConvolutionError;

/// 樣本數上限，避免荒謬的設定配置出數 GB 的陣列。
pub const MAX_SAMPLE_COUNT: usize = 100_000_000;

/// floor 前加上的容忍量，使 6.0 / 0.01 這類浮點商數不會因捨入少算一格。
const FLOOR_TOLERANCE: f64 = 1e-9;

/// 定義域 `[x_min, x_max]` 上的等距取樣網格，兩端點皆包含在內。
///
/// 樣本數為 `1 + floor((x_max - x_min) / sample_width)`，
/// 點位以 linspace 方式產生，最後一點固定為 `x_max`。
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    sample_width: f64,
    x_min: f64,
    x_max: f64,
    points: Vec<f64>
}

impl SamplingGrid {
    pub fn new(sample_width: f64, x_min: f64, x_max: f64) -> Result<SamplingGrid, ConvolutionError> {
        let sample_count = Self::sample_count(sample_width, x_min, x_max)?;
        let step = (x_max - x_min) / (sample_count - 1) as f64;
        let mut points: Vec<f64> = (0..sample_count)
            .map(|i| x_min + i as f64 * step)
            .collect();
        points[sample_count - 1] = x_max;
        Ok(SamplingGrid { sample_width, x_min, x_max, points })
    }

    fn sample_count(sample_width: f64, x_min: f64, x_max: f64) -> Result<usize, ConvolutionError> {
        if !sample_width.is_finite() || sample_width <= 0.0 {
            return Err(ConvolutionError::invalid_configuration(format!(
                "sample width must be a positive finite number, got {}", sample_width
            )));
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(ConvolutionError::invalid_configuration(format!(
                "domain bounds must be finite, got ({}, {})", x_min, x_max
            )));
        }
        if x_min >= x_max {
            return Err(ConvolutionError::invalid_configuration(format!(
                "domain lower bound {} must be strictly below upper bound {}", x_min, x_max
            )));
        }

        let steps = ((x_max - x_min) / sample_width + FLOOR_TOLERANCE).floor();
        if !steps.is_finite() || steps >= MAX_SAMPLE_COUNT as f64 {
            return Err(ConvolutionError::invalid_configuration(format!(
                "sample width {} over ({}, {}) exceeds the limit of {} samples",
                sample_width, x_min, x_max, MAX_SAMPLE_COUNT
            )));
        }
        let sample_count = steps as usize + 1;
        if sample_count < 2 {
            return Err(ConvolutionError::invalid_configuration(format!(
                "sample width {} is wider than the domain ({}, {})", sample_width, x_min, x_max
            )));
        }
        Ok(sample_count)
    }

    pub fn sample_width(&self) -> f64 {
        self.sample_width
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
