//! Low-level utilities shared by every subsystem

pub mod logging;
