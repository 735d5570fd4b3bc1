pub mod model_service;
pub mod points_service;
pub mod response_parser;
