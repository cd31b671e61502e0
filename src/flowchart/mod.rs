pub mod exit;
pub mod factory;
pub mod model;
pub mod outline;

pub use exit::*;
pub use factory::*;
pub use model::*;
pub use outline::*;
