mod gemv;
mod symv;

mod fixed;
pub use self::fixed::*;
