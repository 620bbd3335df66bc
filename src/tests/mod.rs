pub mod bpt_tests;
