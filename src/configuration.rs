use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use thiserror::Error;

use crate::convolution::convolutionengine::ConvolutionEngine;
use crate::convolution::convolutionerror::ConvolutionError;
use crate::manager::manager::{
    FunctionManager,
    IManager
};
use crate::manager::managererror::ManagerError;
use crate::math::function::namedfunction::NamedFunction;
use crate::verification::propertyverifier::PropertyVerifier;
use crate::verification::testgrid::TestGrid;

pub const DEFAULT_SAMPLE_WIDTH: f64 = 0.001;
/// 指數函數的 support 無上界，定義域應左右對稱
pub const DEFAULT_X_BOUNDS: (f64, f64) = (-3.0, 3.0);
pub const DEFAULT_TEST_POINTS: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Manager(#[from] ManagerError),
    #[error("{0}")]
    Convolution(#[from] ConvolutionError)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
struct TestRangeJsonProp {
    start: f64,
    end: f64,
    count: usize
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimationSettings {
    output_path: String,
    f: String,
    g: String,
    #[serde(default = "default_frame_count")]
    frame_count: usize
}

fn default_test_range(x_bounds: (f64, f64)) -> TestRangeJsonProp {
    TestRangeJsonProp {
        start: x_bounds.0,
        end: x_bounds.1,
        count: DEFAULT_TEST_POINTS
    }
}

fn default_frame_count() -> usize {
    60
}

impl AnimationSettings {
    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    pub fn f(&self) -> &str {
        &self.f
    }

    pub fn g(&self) -> &str {
        &self.g
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct ConfigurationJsonProp {
    sample_width: f64,
    x_bounds: (f64, f64),
    test_range: Option<TestRangeJsonProp>,
    functions: Vec<serde_json::Value>,
    impulse_width: Option<f64>,
    tolerance: Option<f64>,
    report_path: Option<String>,
    animation: Option<AnimationSettings>
}

impl Default for ConfigurationJsonProp {
    fn default() -> Self {
        ConfigurationJsonProp {
            sample_width: DEFAULT_SAMPLE_WIDTH,
            x_bounds: DEFAULT_X_BOUNDS,
            test_range: None,
            functions: Vec::new(),
            impulse_width: None,
            tolerance: None,
            report_path: None,
            animation: None
        }
    }
}

/// 一次執行的設定：卷積引擎參數、測試網格、函數集合與輸出位置。
pub struct Configuration {
    sample_width: f64,
    x_bounds: (f64, f64),
    test_range: TestRangeJsonProp,
    function_manager: FunctionManager,
    impulse_width: Option<f64>,
    tolerance: Option<f64>,
    report_path: Option<String>,
    animation: Option<AnimationSettings>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            sample_width: DEFAULT_SAMPLE_WIDTH,
            x_bounds: DEFAULT_X_BOUNDS,
            test_range: default_test_range(DEFAULT_X_BOUNDS),
            function_manager: FunctionManager::with_catalog(),
            impulse_width: None,
            tolerance: None,
            report_path: None,
            animation: None
        }
    }

    pub fn from_reader(file_path: &str) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json_prop(json_prop)?;
        tracing::info!(file_path, "configuration loaded");
        Ok(configuration)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ConfigurationError> {
        let function_manager = if json_prop.functions.is_empty() {
            FunctionManager::with_catalog()
        } else {
            let manager = FunctionManager::function_manager();
            manager.insert_obj_from_json_vec(&json_prop.functions)?;
            manager
        };
        let test_range = json_prop.test_range.unwrap_or(default_test_range(json_prop.x_bounds));
        Ok(Configuration {
            sample_width: json_prop.sample_width,
            x_bounds: json_prop.x_bounds,
            test_range,
            function_manager,
            impulse_width: json_prop.impulse_width,
            tolerance: json_prop.tolerance,
            report_path: json_prop.report_path,
            animation: json_prop.animation
        })
    }

    pub fn sample_width(&self) -> f64 {
        self.sample_width
    }

    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_bounds
    }

    pub fn function_manager(&self) -> &FunctionManager {
        &self.function_manager
    }

    pub fn functions(&self) -> Vec<NamedFunction> {
        self.function_manager.values_in_order()
    }

    pub fn function(&self, name: &str) -> Result<NamedFunction, ManagerError> {
        self.function_manager.get(name)
    }

    pub fn impulse_width(&self) -> Option<f64> {
        self.impulse_width
    }

    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }

    pub fn report_path(&self) -> Option<&str> {
        self.report_path.as_deref()
    }

    pub fn animation(&self) -> Option<&AnimationSettings> {
        self.animation.as_ref()
    }

    pub fn engine(&self) -> Result<ConvolutionEngine, ConvolutionError> {
        ConvolutionEngine::new(self.sample_width, self.x_bounds)
    }

    pub fn test_grid(&self) -> Result<TestGrid, ConvolutionError> {
        TestGrid::linspace(self.test_range.start, self.test_range.end, self.test_range.count)
    }

    pub fn verifier(&self) -> Result<PropertyVerifier, ConvolutionError> {
        let verifier = PropertyVerifier::new(self.engine()?, self.functions(), self.test_grid()?);
        Ok(match self.tolerance {
            Some(tolerance) => verifier.with_tolerance(tolerance),
            None => verifier
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
