#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::HullError;

mod simplex;

mod triangulation;
pub use triangulation::Triangulation;

mod membership;
pub use membership::{is_in_hull, HullSpec};
