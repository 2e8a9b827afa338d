mod fragment_tests;
mod identifier_tests;
mod query_validator_tests;
