// Application layer - Use cases over the launch table
pub mod dashboard_service;
pub mod launch_repository;
pub mod payload_outcome;
pub mod session_service;
pub mod success_rate;
