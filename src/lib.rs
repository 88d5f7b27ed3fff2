pub mod bars;
pub mod cli;
pub mod collect;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod store;
pub mod util;
