// Utility helpers shared by the test suites.
pub mod testing;
