mod engine_tests;
mod view_tests;
