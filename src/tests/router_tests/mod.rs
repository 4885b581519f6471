mod export_tests;
mod status_tests;
