mod general;
mod symmetric;
mod triangular;

pub use self::general::*;
pub use self::symmetric::*;
pub use self::triangular::*;
