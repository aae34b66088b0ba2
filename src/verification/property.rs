use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// 離散卷積應近似滿足的代數性質。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    Commutativity,
    Associativity,
    Distributivity
}

impl Property {
    /// 參與組合的函數個數，平均 RMSD 以 `|F|^arity` 正規化。
    pub fn arity(&self) -> u32 {
        match self {
            Property::Commutativity => 2,
            Property::Associativity => 3,
            Property::Distributivity => 3
        }
    }

    pub fn identity(&self) -> &'static str {
        match self {
            Property::Commutativity => "f * g = g * f",
            Property::Associativity => "f * (g * h) = (f * g) * h",
            Property::Distributivity => "f * (g + h) = f * g + f * h"
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Property::Commutativity => "commutativity",
            Property::Associativity => "associativity",
            Property::Distributivity => "distributivity"
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationResult {
    functions: Vec<String>,
    rmsd: f64
}

impl CombinationResult {
    pub fn new(functions: Vec<String>, rmsd: f64) -> CombinationResult {
        CombinationResult { functions, rmsd }
    }

    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    pub fn rmsd(&self) -> f64 {
        self.rmsd
    }
}

/// 單一性質的檢驗結果。
///
/// `mean_rmsd` 只由本性質自己的組合結果計算，除以 `function_count^arity`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyReport {
    property: Property,
    results: Vec<CombinationResult>,
    mean_rmsd: f64
}

impl PropertyReport {
    pub fn new(property: Property, results: Vec<CombinationResult>, function_count: usize) -> PropertyReport {
        let combination_count = (function_count as f64).powi(property.arity() as i32);
        let total: f64 = results.iter().map(|r| r.rmsd()).sum();
        let mean_rmsd = if combination_count > 0.0 {
            total / combination_count
        } else {
            0.0
        };
        PropertyReport { property, results, mean_rmsd }
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn results(&self) -> &[CombinationResult] {
        &self.results
    }

    pub fn mean_rmsd(&self) -> f64 {
        self.mean_rmsd
    }

    pub fn max_rmsd(&self) -> f64 {
        self.results
            .iter()
            .map(|r| r.rmsd())
            .fold(0.0, f64::max)
    }

    pub fn worst(&self) -> Option<&CombinationResult> {
        self.results
            .iter()
            .max_by(|a, b| a.rmsd().total_cmp(&b.rmsd()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityResult {
    function: String,
    rmsd: f64
}

impl IdentityResult {
    pub fn new(function: String, rmsd: f64) -> IdentityResult {
        IdentityResult { function, rmsd }
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn rmsd(&self) -> f64 {
        self.rmsd
    }
}

/// `δ * f` 與 `f` 的差異，僅作為資料回報。
///
/// 數值受脈衝寬度的平滑偏差主導（見 `Impulse`），不應以門檻判定成敗。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityReport {
    impulse_width: f64,
    impulse_height: f64,
    results: Vec<IdentityResult>,
    mean_rmsd: f64
}

impl IdentityReport {
    pub fn new(impulse_width: f64, impulse_height: f64, results: Vec<IdentityResult>) -> IdentityReport {
        let mean_rmsd = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.rmsd()).sum::<f64>() / results.len() as f64
        };
        IdentityReport { impulse_width, impulse_height, results, mean_rmsd }
    }

    pub fn impulse_width(&self) -> f64 {
        self.impulse_width
    }

    pub fn impulse_height(&self) -> f64 {
        self.impulse_height
    }

    pub fn results(&self) -> &[IdentityResult] {
        &self.results
    }

    pub fn mean_rmsd(&self) -> f64 {
        self.mean_rmsd
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn result(names: &[&str], rmsd: f64) -> CombinationResult {
        CombinationResult::new(names.iter().map(|s| s.to_string()).collect(), rmsd)
    }

    #[test]
    fn mean_is_normalized_by_power_of_function_count() {
        let results = vec![
            result(&["a", "a"], 0.0),
            result(&["a", "b"], 0.2),
            result(&["b", "a"], 0.1),
            result(&["b", "b"], 0.0),
        ];
        let report = PropertyReport::new(Property::Commutativity, results, 2);
        assert_abs_diff_eq!(report.mean_rmsd(), 0.075, epsilon = 1e-15);
        assert_eq!(report.max_rmsd(), 0.2);
        assert_eq!(report.worst().unwrap().functions(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn ternary_properties_use_cubed_count() {
        let results = (0..8).map(|_| result(&["a", "b", "c"], 0.8)).collect();
        let report = PropertyReport::new(Property::Associativity, results, 2);
        assert_abs_diff_eq!(report.mean_rmsd(), 0.8, epsilon = 1e-15);
        assert_eq!(Property::Distributivity.arity(), 3);
    }

    #[test]
    fn identity_mean_over_functions() {
        let report = IdentityReport::new(
            0.1,
            10.0,
            vec![IdentityResult::new("a".to_string(), 0.1), IdentityResult::new("b".to_string(), 0.3)]
        );
        assert_abs_diff_eq!(report.mean_rmsd(), 0.2, epsilon = 1e-15);
    }
}
