//! Step definitions for matrix transfer scenarios.


mod then;
