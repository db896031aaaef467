//! Static advisor tables.

pub mod dex;
pub mod type_chart;
