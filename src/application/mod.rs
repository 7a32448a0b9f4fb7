// Application layer - Simulator use cases and collaborator ports
pub mod command;
pub mod ports;
pub mod session;
pub mod simulator;
