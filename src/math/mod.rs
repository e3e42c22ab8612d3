//! Mathematical utilities

/// Linear coordinate mapping and tick selection for charts
pub mod scale;
