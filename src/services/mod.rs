pub mod assistant_service;
pub mod helpers;
pub mod quiz_parser;
pub mod quiz_service;
