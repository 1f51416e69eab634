//! The "VRMC" field layout of both VRM generations.
//!
//! Records here drop unknown members, use fixed-size vectors and always
//! write their sequences, even when empty.

pub mod vrm0;
pub mod vrm1;
