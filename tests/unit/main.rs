//! Unit test modules.

mod repository_test;
mod training_load_test;
mod window_test;
