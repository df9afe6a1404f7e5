//! Integration tests for the TaskFlow configuration system
