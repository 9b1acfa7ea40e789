pub mod stores;

pub use stores::{StoresContext, StoresProvider};
