pub mod support;

mod page_flow_tests;
