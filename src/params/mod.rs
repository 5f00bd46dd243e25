pub mod params;
pub mod report;
pub mod tiered;

pub use params::*;
pub use report::*;
pub use tiered::*;
