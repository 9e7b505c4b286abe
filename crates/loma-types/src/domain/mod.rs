pub mod item;
pub mod listing;
pub mod lodging;
pub mod record;
pub mod vocabulary;

pub use item::*;
pub use listing::*;
pub use lodging::*;
pub use record::*;
pub use vocabulary::*;
