//! Bucket compatibility matching and haul-cycle productivity simulation
//!
//! Every service in this crate is a pure function of its arguments and the
//! reference tables passed in; nothing is cached between calls.

mod guard;

pub mod model;
pub mod repository;
pub mod service;
