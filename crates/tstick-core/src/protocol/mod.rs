//! Address grammar shared by the bridge and its tests.

pub mod address;
