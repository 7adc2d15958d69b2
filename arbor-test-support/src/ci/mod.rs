//! CI-facing configuration shared by the property-test suites.

pub mod property_test_profile;
