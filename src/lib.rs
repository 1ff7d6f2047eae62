pub mod arena;
pub mod bot;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logger;
pub mod results;
pub mod schedule;

pub use arena::*;
pub use bot::*;
pub use config::*;
pub use console::*;
pub use error::*;
pub use game::*;
pub use results::*;
pub use schedule::*;
