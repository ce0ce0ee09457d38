pub mod feed;
pub mod settings;
pub mod user;
pub mod withdrawal;

pub use feed::*;
pub use settings::*;
pub use user::*;
pub use withdrawal::*;
