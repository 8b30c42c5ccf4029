pub mod recommendation;
pub mod service;
