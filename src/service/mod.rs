pub mod lookup;

pub use lookup::{LookupOutcome, MULTIPLE_USERS_WARNING};
