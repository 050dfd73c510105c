mod albums;
mod categories;
mod channels;
mod client;
mod comments;
mod error;
mod groups;
mod query;
mod tags;
mod upload;
mod users;
mod videos;
pub mod types;

pub use self::client::{Client, Response};
pub use self::error::{ApiError, Error};
pub use self::query::{CallOption, Direction};
pub use self::upload::Uploader;
