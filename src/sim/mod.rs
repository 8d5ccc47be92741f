pub mod driver;
pub mod workload;

pub use driver::{Cadence, Player};
pub use workload::bernoulli_procs;
