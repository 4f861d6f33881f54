mod core;
mod norms;
mod ops;
mod types;
pub use self::core::*;
pub use self::norms::*;
pub use self::ops::*;
pub use self::types::*;
