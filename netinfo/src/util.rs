use std::panic;

use anyhow::Result;
use tracing::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr, filtered by `RUST_LOG` and defaulting to info
pub fn setup_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Make sure panics, including an inconsistent parameter registry, end up in the log
pub fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        error!("Application panicked!");
        error!("Panic info: {panic_info}");
    }));
}

/// Convert atoms to a coin string
pub fn atoms_to_coins(atoms: u64) -> String {
    let coins = atoms as f64 / 100_000_000.0;
    format!("{coins:.8} coins")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_atoms_as_coins() {
        assert_eq!(atoms_to_coins(50_000_000_000), "500.00000000 coins");
        assert_eq!(atoms_to_coins(1), "0.00000001 coins");
    }
}
