mod use_store;

pub use use_store::use_store;
