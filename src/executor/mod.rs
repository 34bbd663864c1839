//! External processes and output files
//!
//! This module launches editors and manages the files handed to them.

pub mod command;
pub mod temp_files;

pub use command::{Command, CommandError, CommandRunner, ProcessRunner};
pub use temp_files::{DEFAULT_BASE_NAME, create_temp_output, temp_file_base_name};
