pub const PI: f64 = std::f64::consts::PI;

pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

pub const TWOPI: f64 = std::f64::consts::TAU;

pub const DEG_TO_RAD: f64 = PI / 180.0;

pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Number of HEALPix base pixels at order 0.
pub const BASE_PIXELS: u64 = 12;

/// Deepest HEALPix order whose NESTED index still fits in a `u64`.
pub const MAX_ORDER: u8 = 29;

/// Number of tiles grouped under one `Dir` directory of a HiPS tree.
pub const HIPS_DIR_SPAN: u64 = 10_000;
