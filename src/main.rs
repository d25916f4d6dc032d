//! Binary entrypoint that boots the Airwave station.
//! Run with: cargo run --bin airwave-server

use std::process::ExitCode;

use airwave_agent::start_airwave_agent;

fn main() -> ExitCode {
    start_airwave_agent::run()
}
