// Domain layer - Launch records, filter state and chart view models
pub mod dashboard;
pub mod filter;
pub mod launch;
