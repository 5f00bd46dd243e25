pub mod history;
pub mod outcome;
pub mod round;
pub mod throw;

pub use history::*;
pub use outcome::*;
pub use round::*;
pub use throw::*;
