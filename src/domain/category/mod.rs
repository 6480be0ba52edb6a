// Category domain module

#![allow(clippy::module_inception)]

pub mod category;

pub use category::Category;
