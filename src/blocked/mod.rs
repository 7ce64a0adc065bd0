//! Cache-blocked (tiled) matrix multiplication.
//!
//! The j and k loops are split into tiles so that the slices of Y and Z
//! touched by the inner i loop stay resident in cache, instead of
//! streaming a full column of Z for every output cell.

pub mod tiled;
