//! # Addrbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only invokes
//! `cli::run()` and turns an error into a message on stderr and exit code 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Home/config wiring and dispatch (commands.rs)            │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! │  - tracing setup (logger.rs)                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!              addrbook library (see lib.rs for the layers)
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
