use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::canonicalfunction::{
    CanonicalFunction,
    ShiftedFunction
};
use crate::math::function::realfunction::RealFunction;

/// 帶名稱的標準波形，供設定檔、報表與繪圖圖例使用。
///
/// JSON 形式：`{ "name": "late_pulse", "function_type": "Rectangle", "shift": 1.0 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFunction {
    name: String,
    #[serde(flatten)]
    function: ShiftedFunction
}

impl NamedFunction {
    pub fn new(name: String, function: ShiftedFunction) -> NamedFunction {
        NamedFunction { name, function }
    }

    /// 平移量為 0 的標準波形，名稱沿用目錄名稱。
    pub fn canonical(function_type: CanonicalFunction) -> NamedFunction {
        NamedFunction::new(function_type.name().to_owned(), function_type.shifted(0.0))
    }

    pub fn catalog() -> Vec<NamedFunction> {
        CanonicalFunction::all()
            .iter()
            .map(|f| NamedFunction::canonical(*f))
            .collect()
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn function(&self) -> ShiftedFunction {
        self.function
    }
}

impl RealFunction for NamedFunction {
    fn value(&self, x: f64) -> f64 {
        self.function.value(x)
    }
}
