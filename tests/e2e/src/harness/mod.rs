//! Test harness: isolated stores and helpers for driving them


pub use db_manager::TestStoreManager;
