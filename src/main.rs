//! Turns text into stroke-font curves.
//!
//! Reads a stroke font, lays the text out along a baseline and writes the
//! resulting polylines as SVG or JSON.

use strokefont::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
