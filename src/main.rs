//! progressdash main entrypoint.

use progressdash::run;
use progressdash::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
