pub mod task;
pub mod user;

pub use task::{ListQuery, Task, TaskInput, TaskUpdate};
pub use user::{User, UserSummary};
