// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod page_header;
pub mod skeleton;
pub mod stagger;

// Primitive wrappers
pub mod avatar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use page_header::*;
pub use skeleton::*;
pub use stagger::*;
