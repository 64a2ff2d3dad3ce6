mod estate_store;

pub use estate_store::{use_estate_store, EstateStore};
