pub use proc_chain_test_utils::builders;
pub use proc_chain_test_utils::init_tracing;

/// Owned argument vector from string literals.
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
