//! Core scanning functionality

pub mod scanner;
pub mod walker;

pub use scanner::Scanner;
pub use walker::Walker;
