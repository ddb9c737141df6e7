/// Defines the standard gravity acceleration in m/s²
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Defines the default effective saturation below which the laws are regularized
pub const DEFAULT_SE_LOW: f64 = 0.01;

/// Defines the default effective saturation above which the laws are regularized
pub const DEFAULT_SE_HIGH: f64 = 0.99;

/// Defines the directory where the plot files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pmlaw/results";
