use std::process::exit;

use address_book::prelude::run_app;
use log::error;

fn main() {
    if let Err(e) = run_app() {
        if e.is_fatal() {
            error!("Cannot continue without a usable contact store");
        }
        eprintln!("Error: {}", e);
        exit(1);
    }
}
