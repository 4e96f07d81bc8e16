pub mod dataset;
pub mod prep;

pub use dataset::Dataset;
pub use prep::{linearly_separable, one_hot, split_at_fraction, standardize_columns, MAX_CATEGORIES};
