//! End-to-end tests for FavHub: stored state, the bookmark service, and
//! the command layer.

mod helpers;

mod cli_test;
mod exchange_test;
mod tree_flow_test;
