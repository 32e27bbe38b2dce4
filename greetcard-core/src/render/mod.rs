//! Rasterization and output encoding.
//!
//! A [`CardPlan`](crate::compose::plan::CardPlan) is painted with `vello_cpu`, then encoded
//! to PNG with `image`.

pub mod cpu;
pub mod encode;
pub mod text;
