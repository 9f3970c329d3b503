#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use euklid_rotation as rotation;

#[doc(inline)]
pub use euklid_hull as hull;
