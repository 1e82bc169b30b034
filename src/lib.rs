pub mod error;
pub mod config;
pub mod logging;
pub mod features;
pub mod distance_matrix;
pub mod edit_distance;
pub mod candidates;
pub mod optimizer;
pub mod arpabet;
pub mod dictionary;
pub mod vocab_file;
pub mod lookup;
pub mod pipeline;

#[cfg(test)]
mod test_tables;
