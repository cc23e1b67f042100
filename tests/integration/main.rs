//! Integration tests for hacktyper.

mod helpers;

mod cli_test;
mod config_test;
mod engine_test;
mod show_test;
