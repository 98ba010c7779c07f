//! Portfolio gallery server: resolves directories of images into ordered
//! gallery listings and serves them over HTTP.

pub mod cli;
pub mod logging;
pub mod resolver;
pub mod serve;
pub mod sort;
