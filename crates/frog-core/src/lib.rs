pub mod config;
pub mod constants;
pub mod layout;
pub mod proximity;
pub mod round;

pub use config::*;
pub use constants::*;
pub use layout::*;
pub use proximity::*;
pub use round::*;
