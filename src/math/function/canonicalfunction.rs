use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::function::realfunction::RealFunction;

// ─────────────────────────────────────────────────────────────────────────────
// CanonicalFunction
// ─────────────────────────────────────────────────────────────────────────────
//
// 四種標準波形，皆以平移量 t 參數化：
//
//   rectangle(x, t)         = 1{|x-t| < 0.5}
//   right_triangle(x, t)    = 1{|x-t| < 0.5} · (0.5 - x + t)
//   isoceles_triangle(x, t) = 1{|x-t| < 1}   · (1 - |x-t|)
//   exponential(x, t)       = 1{x >= t}      · exp(t - x)
//
// 截斷型函數以指示函數自行處理零值區間，卷積引擎不負責限制 support。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalFunction {
    Rectangle,
    RightTriangle,
    IsocelesTriangle,
    Exponential
}

impl CanonicalFunction {
    /// 固定的目錄順序，所有性質檢驗皆依此順序列舉組合。
    pub fn all() -> [CanonicalFunction; 4] {
        [
            CanonicalFunction::Rectangle,
            CanonicalFunction::RightTriangle,
            CanonicalFunction::IsocelesTriangle,
            CanonicalFunction::Exponential
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CanonicalFunction::Rectangle => "rectangle",
            CanonicalFunction::RightTriangle => "right_triangle",
            CanonicalFunction::IsocelesTriangle => "isoceles_triangle",
            CanonicalFunction::Exponential => "exponential"
        }
    }

    pub fn evaluate(&self, x: f64, t: f64) -> f64 {
        let d = x - t;
        match self {
            CanonicalFunction::Rectangle => indicator(d.abs() < 0.5),
            CanonicalFunction::RightTriangle => indicator(d.abs() < 0.5) * (0.5 - x + t),
            CanonicalFunction::IsocelesTriangle => indicator(d.abs() < 1.0) * (1.0 - d.abs()),
            CanonicalFunction::Exponential => {
                // exp(-d) 在 d 很負時會溢位成 inf，inf * 0 = NaN
                if d >= 0.0 {
                    (-d).exp()
                } else {
                    0.0
                }
            }
        }
    }

    pub fn shifted(&self, t: f64) -> ShiftedFunction {
        ShiftedFunction::new(*self, t)
    }
}

impl fmt::Display for CanonicalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl RealFunction for CanonicalFunction {
    fn value(&self, x: f64) -> f64 {
        self.evaluate(x, 0.0)
    }
}

#[inline]
fn indicator(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

// ─────────────────────────────────────────────────────────────────────────────
// ShiftedFunction
// ─────────────────────────────────────────────────────────────────────────────

/// 已綁定平移量 t 的標準波形，等同 partial application `f(·, t)`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftedFunction {
    function_type: CanonicalFunction,
    #[serde(default)]
    shift: f64
}

impl ShiftedFunction {
    pub fn new(function_type: CanonicalFunction, shift: f64) -> ShiftedFunction {
        ShiftedFunction { function_type, shift }
    }

    pub fn function_type(&self) -> CanonicalFunction {
        self.function_type
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }
}

impl RealFunction for ShiftedFunction {
    fn value(&self, x: f64) -> f64 {
        self.function_type.evaluate(x, self.shift)
    }
}
