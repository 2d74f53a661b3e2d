mod property_tests;
mod scenario_tests;
mod session_tests;
