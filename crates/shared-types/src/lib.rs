pub mod error;
pub mod config;

// Portal domain modules
pub mod contract;
pub mod fixtures;
pub mod notice;
pub mod stats;
pub mod user;
pub mod view;

pub use config::*;
pub use error::*;

pub use contract::*;
pub use notice::*;
pub use stats::*;
pub use user::*;
pub use view::*;
