//! Weight-compliance domain: legal limits, bridge formula and classification

pub mod model;
pub mod repository;
pub mod service;
