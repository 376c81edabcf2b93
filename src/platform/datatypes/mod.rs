//! Datatype module - the classification datasets refer to

mod api;
mod models;

pub use api::is_object_id;
pub use models::Datatype;
