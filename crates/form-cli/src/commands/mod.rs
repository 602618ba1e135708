pub mod delete;
pub mod dispatch;
pub mod get;
pub mod list;
pub mod preview;
pub mod save;
pub mod schema;
pub mod shared;
