//! Language adapters that lower raw program documents into the canonical model.

pub mod c;
pub mod io;
pub mod json;
pub mod pascal;

pub use c::CDocument;
pub use io::IoVocabulary;
pub use pascal::PascalDocument;
