// User persistence boundary: the record shape and the lookup trait.

pub mod models;
pub mod user_store;
