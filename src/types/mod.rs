pub mod user;

pub use user::{InjectionReport, UserView};
