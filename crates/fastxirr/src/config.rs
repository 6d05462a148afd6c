//! Solver configuration.
//!
//! Every default the solvers rely on is a named constant here and can be
//! overridden per [`XirrSolver`](crate::xirr::XirrSolver), either in code
//! or from a TOML file:
//!
//! ```toml
//! tolerance = 1e-7
//! max_iterations = 1000
//!
//! [bisection]
//! default_bracket = [-0.999999, 100.0]
//!
//! [brent]
//! default_bracket = [-0.9999, 10.0]
//!
//! [scan]
//! segments = [
//!   { start = -0.99999999, end = 10.0, step = 0.0001 },
//!   { start = 10.0, end = 10000.0, step = 10.0 },
//! ]
//! ```

use std::path::Path;

use fastxirr_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::bracket::{Bracket, ScanSchedule};
use crate::error::{XirrError, XirrResult};
use crate::xirr::XirrMethod;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default iteration budget per solver run.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1_000;

/// Interval bisection tries before searching for a bracket.
pub const BISECTION_DEFAULT_BRACKET: Bracket = Bracket {
    low: -0.999_999,
    high: 100.0,
};

/// Interval Brent's method tries before searching for a bracket.
pub const BRENT_DEFAULT_BRACKET: Bracket = Bracket {
    low: -0.9999,
    high: 10.0,
};

/// Per-method settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodConfig {
    /// Interval tried first when the caller supplies none.
    pub default_bracket: Bracket,
}

/// Configuration for XIRR solving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XirrConfig {
    /// Convergence tolerance
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iteration budget per solver run
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Bisection settings
    #[serde(default = "default_bisection")]
    pub bisection: MethodConfig,

    /// Brent settings
    #[serde(default = "default_brent")]
    pub brent: MethodConfig,

    /// Bracket search schedule
    #[serde(default)]
    pub scan: ScanSchedule,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_bisection() -> MethodConfig {
    MethodConfig {
        default_bracket: BISECTION_DEFAULT_BRACKET,
    }
}

fn default_brent() -> MethodConfig {
    MethodConfig {
        default_bracket: BRENT_DEFAULT_BRACKET,
    }
}

impl Default for XirrConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            bisection: default_bisection(),
            brent: default_brent(),
            scan: ScanSchedule::default(),
        }
    }
}

impl XirrConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::ConfigFile` if the file cannot be read or parsed,
    /// and `XirrError::InvalidConfig` if a value is unusable.
    pub fn from_file(path: impl AsRef<Path>) -> XirrResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| XirrError::ConfigFile(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> XirrResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| XirrError::ConfigFile(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration as TOML.
    pub fn to_toml_string(&self) -> XirrResult<String> {
        toml::to_string(self).map_err(|e| XirrError::ConfigFile(e.to_string()))
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the interval bisection tries first.
    #[must_use]
    pub fn with_bisection_bracket(mut self, bracket: Bracket) -> Self {
        self.bisection.default_bracket = bracket;
        self
    }

    /// Sets the interval Brent's method tries first.
    #[must_use]
    pub fn with_brent_bracket(mut self, bracket: Bracket) -> Self {
        self.brent.default_bracket = bracket;
        self
    }

    /// Sets the bracket search schedule.
    #[must_use]
    pub fn with_scan(mut self, scan: ScanSchedule) -> Self {
        self.scan = scan;
        self
    }

    /// Returns the interval tried first by `method`.
    #[must_use]
    pub fn default_bracket(&self, method: XirrMethod) -> Bracket {
        match method {
            XirrMethod::Bisection => self.bisection.default_bracket,
            XirrMethod::Brent => self.brent.default_bracket,
        }
    }

    /// Returns the tolerance and budget as a root-finder configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Checks tolerance, default brackets and scan schedule.
    pub fn validate(&self) -> XirrResult<()> {
        self.solver_config().validate()?;
        self.bisection.default_bracket.validate()?;
        self.brent.default_bracket.validate()?;
        self.scan.validate()
    }
}
