//! HTTP API surface

pub mod albums;
pub mod health;

pub use albums::{add_album, delete_album, get_all_albums, update_album};
pub use health::health_routes;
