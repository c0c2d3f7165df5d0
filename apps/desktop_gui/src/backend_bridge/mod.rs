//! Backend bridge: command queue intake and the worker thread that runs fetches.

pub mod commands;
pub mod runtime;
