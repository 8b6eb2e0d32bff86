pub mod backend_supervisor;
pub mod command_runner;
