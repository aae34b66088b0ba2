use crate::convolution::convolutionengine::{
    ConvolutionEngine,
    ConvolvedFunction
};
use crate::convolution::convolutionerror::ConvolutionError;
use crate::math::function::canonicalfunction::ShiftedFunction;
use crate::math::function::namedfunction::NamedFunction;
use crate::math::function::pointwise::PointwiseSum;
use crate::verification::property::{
    CombinationResult,
    IdentityReport,
    IdentityResult,
    Property,
    PropertyReport
};
use crate::verification::rmsd::rmsd;
use crate::verification::testgrid::TestGrid;
use crate::verification::verificationreport::VerificationReport;

// ─────────────────────────────────────────────────────────────────────────────
// PropertyVerifier
// ─────────────────────────────────────────────────────────────────────────────
//
// 對函數集合 F 的所有有序組合（依 F 的順序、列優先）反覆呼叫卷積引擎，
// 以測試網格 T 上的 RMSD 量測與理論恆等式的差距：
//
//   交換律：RMSD(f * g, g * f)                 , (f, g)    ∈ F²
//   結合律：RMSD(f * (g * h), (f * g) * h)     , (f, g, h) ∈ F³
//   分配律：RMSD(f * (g + h), f * g + f * h)   , (f, g, h) ∈ F³
//
// 取樣寬度過粗時 RMSD 會偏大，這是資料而非錯誤；計算為確定性，不重試。

pub struct PropertyVerifier {
    engine: ConvolutionEngine,
    functions: Vec<NamedFunction>,
    test_grid: TestGrid,
    tolerance: Option<f64>
}

impl PropertyVerifier {
    pub fn new(engine: ConvolutionEngine, functions: Vec<NamedFunction>, test_grid: TestGrid) -> PropertyVerifier {
        PropertyVerifier { engine, functions, test_grid, tolerance: None }
    }

    /// 以四種標準波形（t = 0）建立。
    pub fn canonical(engine: ConvolutionEngine, test_grid: TestGrid) -> PropertyVerifier {
        PropertyVerifier::new(engine, NamedFunction::catalog(), test_grid)
    }

    /// 平均 RMSD 超過此值時記錄警告，不影響回傳結果。
    pub fn with_tolerance(mut self, tolerance: f64) -> PropertyVerifier {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn engine(&self) -> &ConvolutionEngine {
        &self.engine
    }

    pub fn functions(&self) -> &[NamedFunction] {
        &self.functions
    }

    pub fn test_grid(&self) -> &TestGrid {
        &self.test_grid
    }

    pub fn check_commutativity(&self) -> Result<PropertyReport, ConvolutionError> {
        let mut results = Vec::with_capacity(self.functions.len().pow(2));
        for f in self.functions.iter() {
            for g in self.functions.iter() {
                let fg = self.engine.convolve(&f.function(), g.function());
                let gf = self.engine.convolve(&g.function(), f.function());
                let deviation = rmsd(&fg, &gf, &self.test_grid)?;
                results.push(self.record(&[f, g], deviation));
            }
        }
        Ok(self.summarize(Property::Commutativity, results))
    }

    pub fn check_associativity(&self) -> Result<PropertyReport, ConvolutionError> {
        let mut results = Vec::with_capacity(self.functions.len().pow(3));
        for f in self.functions.iter() {
            for g in self.functions.iter() {
                let fg = self.engine.convolve(&f.function(), g.function());
                for h in self.functions.iter() {
                    let gh = self.engine.convolve(&g.function(), h.function());
                    let f_gh = self.engine.convolve(&f.function(), gh);
                    let fg_h = self.engine.convolve(&fg, h.function());
                    let deviation = rmsd(&f_gh, &fg_h, &self.test_grid)?;
                    results.push(self.record(&[f, g, h], deviation));
                }
            }
        }
        Ok(self.summarize(Property::Associativity, results))
    }

    pub fn check_distributivity(&self) -> Result<PropertyReport, ConvolutionError> {
        let mut results = Vec::with_capacity(self.functions.len().pow(3));
        for f in self.functions.iter() {
            for g in self.functions.iter() {
                let fg = self.engine.convolve(&f.function(), g.function());
                for h in self.functions.iter() {
                    let g_plus_h = PointwiseSum::new(g.function(), h.function());
                    let f_g_plus_h = self.engine.convolve(&f.function(), g_plus_h);
                    let fh = self.engine.convolve(&f.function(), h.function());
                    let fg_plus_fh = PointwiseSum::new(&fg, fh);
                    let deviation = rmsd(&f_g_plus_h, &fg_plus_fh, &self.test_grid)?;
                    results.push(self.record(&[f, g, h], deviation));
                }
            }
        }
        Ok(self.summarize(Property::Distributivity, results))
    }

    /// 對每個 f 回傳 `(f, δ * f)`，交由 Renderer 呈現單位元性質。
    pub fn identity_pairs(&self, impulse_width: f64) -> Result<Vec<(NamedFunction, ConvolvedFunction<ShiftedFunction>)>, ConvolutionError> {
        let impulse = self.engine.impulse(impulse_width)?;
        Ok(self.functions
            .iter()
            .map(|f| (f.clone(), self.engine.convolve(&impulse, f.function())))
            .collect())
    }

    /// `δ * f` 與 `f` 的 RMSD，只作為資料回報。
    pub fn check_identity(&self, impulse_width: f64) -> Result<IdentityReport, ConvolutionError> {
        let impulse = self.engine.impulse(impulse_width)?;
        let mut results = Vec::with_capacity(self.functions.len());
        for f in self.functions.iter() {
            let delta_f = self.engine.convolve(&impulse, f.function());
            let deviation = rmsd(&delta_f, &f.function(), &self.test_grid)?;
            tracing::debug!(function = %f.name(), rmsd = deviation, "identity deviation");
            results.push(IdentityResult::new(f.name().clone(), deviation));
        }
        let report = IdentityReport::new(impulse.width(), impulse.height(), results);
        tracing::info!(
            impulse_width = impulse.width(),
            mean_rmsd = report.mean_rmsd(),
            "identity checked"
        );
        Ok(report)
    }

    pub fn verify_all(&self, impulse_width: Option<f64>) -> Result<VerificationReport, ConvolutionError> {
        let commutativity = self.check_commutativity()?;
        let associativity = self.check_associativity()?;
        let distributivity = self.check_distributivity()?;
        let identity = match impulse_width {
            Some(width) => Some(self.check_identity(width)?),
            None => None
        };
        Ok(VerificationReport::new(
            self.engine.sample_width(),
            self.engine.bounds(),
            self.test_grid.len(),
            commutativity,
            associativity,
            distributivity,
            identity
        ))
    }

    fn record(&self, combination: &[&NamedFunction], deviation: f64) -> CombinationResult {
        let names: Vec<String> = combination.iter().map(|f| f.name().clone()).collect();
        tracing::debug!(functions = ?names, rmsd = deviation, "combination checked");
        CombinationResult::new(names, deviation)
    }

    fn summarize(&self, property: Property, results: Vec<CombinationResult>) -> PropertyReport {
        let report = PropertyReport::new(property, results, self.functions.len());
        tracing::info!(
            %property,
            combinations = report.results().len(),
            mean_rmsd = report.mean_rmsd(),
            max_rmsd = report.max_rmsd(),
            "property checked"
        );
        if let Some(tolerance) = self.tolerance {
            if report.mean_rmsd() > tolerance {
                tracing::warn!(
                    %property,
                    mean_rmsd = report.mean_rmsd(),
                    tolerance,
                    "mean deviation exceeds tolerance; sample width may be too coarse"
                );
            }
        }
        report
    }
}
