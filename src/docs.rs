//! Guides and longer explanations that don't belong to any one type.

pub mod choosing_a_factory;
pub mod getting_started;
