use std::process::ExitCode;

use mailbox_engine::{logger, uci};

fn main() -> ExitCode {
    if let Err(e) = logger::init() {
        eprintln!("logger: {e}");
    }

    match uci::run_uci_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("uci loop: {e}");
            ExitCode::FAILURE
        }
    }
}
