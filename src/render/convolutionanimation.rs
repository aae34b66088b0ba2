use crate::convolution::convolutionengine::{
    ConvolutionEngine,
    ConvolvedFunction
};
use crate::math::function::canonicalfunction::ShiftedFunction;
use crate::math::function::namedfunction::NamedFunction;
use crate::math::function::realfunction::RealFunction;
use crate::render::renderer::{
    PlotFrame,
    Series
};
use crate::verification::testgrid::TestGrid;

/// 組出卷積動畫的影格：每個平移量 x 一格，畫出
/// `f(τ)`、`g(x - τ)`、兩者乘積，以及目前為止的 `(f * g)` 軌跡。
pub struct ConvolutionAnimation<'a> {
    engine: &'a ConvolutionEngine,
    x_axis: TestGrid
}

impl<'a> ConvolutionAnimation<'a> {
    pub fn new(engine: &'a ConvolutionEngine, x_axis: TestGrid) -> ConvolutionAnimation<'a> {
        ConvolutionAnimation { engine, x_axis }
    }

    pub fn x_axis(&self) -> &TestGrid {
        &self.x_axis
    }

    pub fn frames(&self, f: &NamedFunction, g: &NamedFunction, shifts: &TestGrid) -> Vec<PlotFrame> {
        let h = self.engine.convolve(f, g.function());
        let h_values = h.values(shifts.points());
        let f_points = self.curve(|tau| f.value(tau));
        let label = format!("{} * {}", f.name(), g.name());

        let mut trace: Vec<[f64; 2]> = Vec::with_capacity(shifts.len());
        let mut frames = Vec::with_capacity(shifts.len());
        for (index, (x, hx)) in shifts.iter().zip(h_values.iter()).enumerate() {
            trace.push([x, *hx]);
            let series = vec![
                Series::new(format!("{}(τ)", f.name()), f_points.clone()),
                Series::new(format!("{}({:.3} - τ)", g.name(), x), self.curve(|tau| g.value(x - tau))),
                Series::new(
                    "product".to_string(),
                    self.curve(|tau| f.value(tau) * g.value(x - tau))
                ),
                Series::new(label.clone(), trace.clone()),
            ];
            frames.push(PlotFrame::new(index, format!("{} at x = {:.3}", label, x), series));
        }
        frames
    }

    /// 單位元示意：每個 `(f, δ * f)` 一格。
    pub fn identity_frames(&self, pairs: &[(NamedFunction, ConvolvedFunction<ShiftedFunction>)]) -> Vec<PlotFrame> {
        pairs
            .iter()
            .enumerate()
            .map(|(index, (f, delta_f))| {
                let series = vec![
                    Series::new(f.name().clone(), self.curve(|x| f.value(x))),
                    Series::new(format!("delta * {}", f.name()), self.curve(|x| delta_f.value(x))),
                ];
                PlotFrame::new(index, format!("delta * {} = {}", f.name(), f.name()), series)
            })
            .collect()
    }

    fn curve<C>(&self, c: C) -> Vec<[f64; 2]>
    where
        C: Fn(f64) -> f64,
    {
        self.x_axis.iter().map(|x| [x, c(x)]).collect()
    }
}
