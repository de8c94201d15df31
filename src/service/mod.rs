pub mod forward_service;
pub mod measure_service;
