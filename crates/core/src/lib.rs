#![forbid(unsafe_code)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod time;

pub use catalog::PhraseCatalog;
pub use engine::{ShownSet, generate_question};
pub use error::QuizError;
pub use time::Clock;
