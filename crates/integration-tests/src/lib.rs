//! End-to-end tests for the LLMR client against a mock WordPress host
