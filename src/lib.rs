pub mod commands;
pub mod contexts;
pub mod engine;
pub mod error;
pub mod kubeconfig;
pub mod paths;
pub mod resolve;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
