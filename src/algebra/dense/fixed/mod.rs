mod types;
pub use self::types::*;
mod dense3x3;
mod cofactors;
pub use self::cofactors::*;
