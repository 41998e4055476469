//! Version command implementation

use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("capctl {} ({})", env!("CARGO_PKG_VERSION"), build_profile());
    println!("install mechanisms: capability registry (primary), dism (fallback)");

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
