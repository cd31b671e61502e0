pub mod conversion;
pub mod statement;

pub use conversion::*;
pub use statement::*;
