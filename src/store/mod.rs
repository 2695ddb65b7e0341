//! Persistence layer: thin, typed wrappers over the `sqlx` pool.
//!
//! Handlers never build SQL themselves; they go through `UserStore` and
//! `TaskStore`. Both operate on a shared `PgPool` reference and return plain
//! `sqlx` results, leaving error classification to `AppError`'s `From` impl.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
