pub mod model;
pub mod pages;
pub mod preset;
pub mod service;
