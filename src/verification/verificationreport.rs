use std::fmt;
use std::io::Write;

use chrono::{
    DateTime,
    Utc
};
use serde::{
    Deserialize,
    Serialize
};
use uuid::Uuid;

use crate::verification::property::{
    IdentityReport,
    PropertyReport
};

/// 一次完整檢驗的結果，以 run id 與產生時間識別。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    run_id: Uuid,
    generated_at: DateTime<Utc>,
    sample_width: f64,
    x_bounds: (f64, f64),
    test_grid_len: usize,
    commutativity: PropertyReport,
    associativity: PropertyReport,
    distributivity: PropertyReport,
    identity: Option<IdentityReport>
}

impl VerificationReport {
    pub fn new(
        sample_width: f64,
        x_bounds: (f64, f64),
        test_grid_len: usize,
        commutativity: PropertyReport,
        associativity: PropertyReport,
        distributivity: PropertyReport,
        identity: Option<IdentityReport>,
    ) -> VerificationReport {
        VerificationReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            sample_width,
            x_bounds,
            test_grid_len,
            commutativity,
            associativity,
            distributivity,
            identity
        }
    }

    pub fn run_id(&self) -> &Uuid {
        &self.run_id
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn sample_width(&self) -> f64 {
        self.sample_width
    }

    pub fn x_bounds(&self) -> (f64, f64) {
        self.x_bounds
    }

    pub fn test_grid_len(&self) -> usize {
        self.test_grid_len
    }

    pub fn commutativity(&self) -> &PropertyReport {
        &self.commutativity
    }

    pub fn associativity(&self) -> &PropertyReport {
        &self.associativity
    }

    pub fn distributivity(&self) -> &PropertyReport {
        &self.distributivity
    }

    pub fn identity(&self) -> Option<&IdentityReport> {
        self.identity.as_ref()
    }

    pub fn properties(&self) -> [&PropertyReport; 3] {
        [&self.commutativity, &self.associativity, &self.distributivity]
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "run {} ({})", self.run_id, self.generated_at.to_rfc3339())?;
        writeln!(
            f,
            "sample width {} over [{}, {}], {} test points",
            self.sample_width, self.x_bounds.0, self.x_bounds.1, self.test_grid_len
        )?;
        for report in self.properties() {
            writeln!(f)?;
            writeln!(f, "{} ({})", report.property(), report.property().identity())?;
            for result in report.results() {
                writeln!(f, "  ({}): RMSD {:.6e}", result.functions().join(", "), result.rmsd())?;
            }
            writeln!(f, "  mean RMSD {:.6e}", report.mean_rmsd())?;
        }
        if let Some(identity) = &self.identity {
            writeln!(f)?;
            writeln!(
                f,
                "identity (delta * f = f), impulse width {} height {:.4}",
                identity.impulse_width(), identity.impulse_height()
            )?;
            for result in identity.results() {
                writeln!(f, "  ({}): RMSD {:.6e}", result.function(), result.rmsd())?;
            }
            writeln!(f, "  mean RMSD {:.6e}", identity.mean_rmsd())?;
        }
        Ok(())
    }
}
