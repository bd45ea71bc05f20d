mod adapter_tests;
mod web_mercator_tests;
