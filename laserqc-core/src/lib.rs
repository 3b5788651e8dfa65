//! Core library for laserqc: the data model shared by the detector QC
//! post-processing tools (histograms, monitor-object archives) and the
//! utilities to read and reshape them.

pub mod errors;
pub mod models;
pub mod utils;
