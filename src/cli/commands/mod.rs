//! CLI command implementations.

mod batch;
mod chirp;
mod config;
mod doctor;
mod init;
mod run;

pub use batch::run_batch;
pub use chirp::run_chirp;
pub use config::run_config;
pub use doctor::run_doctor;
pub use init::run_init;
pub use run::run_diagnostic;
