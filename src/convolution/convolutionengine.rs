use std::sync::Arc;

use nalgebra::DVector;

use crate::convolution::convolutionerror::ConvolutionError;
use crate::convolution::samplinggrid::SamplingGrid;
use crate::math::function::impulse::Impulse;
use crate::math::function::realfunction::RealFunction;

// ─────────────────────────────────────────────────────────────────────────────
// ConvolutionEngine - Riemann sum on a fixed grid
// ─────────────────────────────────────────────────────────────────────────────
//
//   (f * g)(x) = ∫ f(τ) g(x - τ) dτ  ≈  Σ_i w·f(s_i) · g(x - s_i)
//
// w·f(s_i) 在 convolve 時一次預算完畢，之後每次求值只需 O(n) 次 g 的呼叫。
// 加總固定依網格索引遞增順序進行，純量與向量求值結果逐位元相同。

pub struct ConvolutionEngine {
    grid: Arc<SamplingGrid>
}

impl ConvolutionEngine {
    pub fn new(sample_width: f64, bounds: (f64, f64)) -> Result<ConvolutionEngine, ConvolutionError> {
        let grid = SamplingGrid::new(sample_width, bounds.0, bounds.1)?;
        tracing::debug!(
            sample_width,
            x_min = bounds.0,
            x_max = bounds.1,
            sample_count = grid.len(),
            "sampling grid built"
        );
        Ok(ConvolutionEngine { grid: Arc::new(grid) })
    }

    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    pub fn sampling(&self) -> &[f64] {
        self.grid.points()
    }

    pub fn sample_width(&self) -> f64 {
        self.grid.sample_width()
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.grid.bounds()
    }

    /// 回傳 `h = f * g`。
    ///
    /// `f` 只在此處於網格上取樣一次（乘上 `sample_width`），之後即不再被引用；
    /// `g` 的所有權移入回傳值，於每次求值時在 `x - s_i` 取樣。
    pub fn convolve<F, G>(&self, f: &F, g: G) -> ConvolvedFunction<G>
    where
        F: RealFunction + ?Sized,
        G: RealFunction,
    {
        let sample_width = self.grid.sample_width();
        let scaled_sampled_f: Vec<f64> = self.grid.points()
            .iter()
            .map(|s| sample_width * f.value(*s))
            .collect();
        ConvolvedFunction {
            grid: Arc::clone(&self.grid),
            scaled_sampled_f,
            g
        }
    }

    /// 在本引擎網格上正規化為單位面積的脈衝。
    pub fn impulse(&self, width: f64) -> Result<Impulse, ConvolutionError> {
        Impulse::new(&self.grid, width)
    }
}

/// 卷積結果，本身也是 `RealFunction`，可再次作為卷積的運算元。
///
/// 預算陣列在建構後不再變動，可跨執行緒唯讀共享。
pub struct ConvolvedFunction<G> {
    grid: Arc<SamplingGrid>,
    scaled_sampled_f: Vec<f64>,
    g: G
}

impl<G> ConvolvedFunction<G>
where
    G: RealFunction,
{
    pub fn scaled_samples(&self) -> &[f64] {
        &self.scaled_sampled_f
    }

    pub fn sampling(&self) -> &[f64] {
        self.grid.points()
    }

    pub fn kernel(&self) -> &G {
        &self.g
    }
}

impl<G> RealFunction for ConvolvedFunction<G>
where
    G: RealFunction,
{
    fn value(&self, x: f64) -> f64 {
        let mut acc = 0.0;
        for (weight, s) in self.scaled_sampled_f.iter().zip(self.grid.points().iter()) {
            acc += weight * self.g.value(x - s);
        }
        acc
    }

    fn values(&self, xs: &DVector<f64>) -> DVector<f64> {
        let mut acc = DVector::<f64>::zeros(xs.len());
        for (weight, s) in self.scaled_sampled_f.iter().zip(self.grid.points().iter()) {
            let shifted = xs.map(|x| x - s);
            let g_values = self.g.values(&shifted);
            for (a, gv) in acc.iter_mut().zip(g_values.iter()) {
                *a += weight * gv;
            }
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::function::canonicalfunction::CanonicalFunction;
    use crate::math::function::realfunction::from_fn;

    #[test]
    fn engine_exposes_grid() {
        let engine = ConvolutionEngine::new(0.5, (-1.0, 1.0)).unwrap();
        assert_eq!(engine.sampling(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(engine.sample_width(), 0.5);
        assert_eq!(engine.bounds(), (-1.0, 1.0));
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(matches!(
            ConvolutionEngine::new(0.1, (2.0, -2.0)),
            Err(ConvolutionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn scaled_samples_are_precomputed() {
        let engine = ConvolutionEngine::new(0.5, (-1.0, 1.0)).unwrap();
        let h = engine.convolve(&CanonicalFunction::IsocelesTriangle, CanonicalFunction::Rectangle);
        assert_eq!(h.scaled_samples(), &[0.0, 0.25, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn rectangle_self_convolution_is_triangle() {
        let engine = ConvolutionEngine::new(0.01, (-3.0, 3.0)).unwrap();
        let rect = CanonicalFunction::Rectangle;
        let h = engine.convolve(&rect, rect);
        assert_abs_diff_eq!(h.value(0.0), 1.0, epsilon = 0.02);
        assert_abs_diff_eq!(h.value(0.5), 0.5, epsilon = 0.02);
        assert_abs_diff_eq!(h.value(-0.5), 0.5, epsilon = 0.02);
        assert_eq!(h.value(1.0), 0.0);
        assert_eq!(h.value(2.0), 0.0);
    }

    #[test]
    fn fine_grid_peak_approaches_one() {
        let engine = ConvolutionEngine::new(0.001, (-3.0, 3.0)).unwrap();
        let rect = CanonicalFunction::Rectangle;
        let h = engine.convolve(&rect, rect);
        assert_abs_diff_eq!(h.value(0.0), 1.0, epsilon = 3e-3);
    }

    #[test]
    fn scalar_and_vector_evaluation_agree_bitwise() {
        let engine = ConvolutionEngine::new(0.01, (-3.0, 3.0)).unwrap();
        let h = engine.convolve(&CanonicalFunction::Exponential, CanonicalFunction::RightTriangle);
        let xs = DVector::from_vec(vec![-2.5, -0.3, 0.0, 0.41, 1.0, 2.9]);
        let ys = h.values(&xs);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(h.value(*x).to_bits(), y.to_bits());
        }
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let engine = ConvolutionEngine::new(0.01, (-3.0, 3.0)).unwrap();
        let h = engine.convolve(&CanonicalFunction::IsocelesTriangle, CanonicalFunction::Exponential);
        let first = h.value(0.37);
        for _ in 0..5 {
            assert_eq!(h.value(0.37).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn nested_convolution_accepts_convolved_operands() {
        let engine = ConvolutionEngine::new(0.01, (-3.0, 3.0)).unwrap();
        let rect = CanonicalFunction::Rectangle;
        let rr = engine.convolve(&rect, rect);
        let rrr = engine.convolve(&rr, rect);
        // 三個單位矩形的卷積在原點為 3/4
        assert_abs_diff_eq!(rrr.value(0.0), 0.75, epsilon = 0.03);
    }

    #[test]
    fn closures_with_bound_parameters() {
        let engine = ConvolutionEngine::new(0.01, (-3.0, 3.0)).unwrap();
        let shift = 1.0;
        let g = from_fn(move |x| CanonicalFunction::Rectangle.evaluate(x, shift));
        let h = engine.convolve(&CanonicalFunction::Rectangle, g);
        assert_abs_diff_eq!(h.value(1.0), 1.0, epsilon = 0.02);
        assert_eq!(h.value(-1.0), 0.0);
    }

    #[test]
    fn far_outside_support_yields_zero() {
        let engine = ConvolutionEngine::new(0.01, (-3.0, 3.0)).unwrap();
        let h = engine.convolve(&CanonicalFunction::Rectangle, CanonicalFunction::IsocelesTriangle);
        assert_eq!(h.value(50.0), 0.0);
        assert_eq!(h.value(-50.0), 0.0);
    }
}
