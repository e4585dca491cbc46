mod concurrency_tests;
mod persistence_tests;
mod scenario_tests;
