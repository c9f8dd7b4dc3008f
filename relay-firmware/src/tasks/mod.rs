// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// I2C-Interrupt und Relay kommunizieren über den BusSlot.

pub mod boot_blink;
pub mod bus_relay;
pub mod uart_relay;

// Re-export Tasks für einfachen Import
pub use boot_blink::boot_blink;
pub use bus_relay::bus_relay_task;
pub use uart_relay::uart_relay_task;

use defmt::{error, info, warn};

use crate::{Diagnostic, Outcome};

/// Lokales Log einer verarbeiteten Eingabe (beide Varianten)
pub fn log_outcome(outcome: &Outcome) {
    match outcome.diagnostic() {
        Some(diagnostic @ Diagnostic::UnknownCommand(_)) => warn!("{}", diagnostic),
        Some(diagnostic) => info!("{}", diagnostic),
        None => {}
    }

    if let Err(e) = outcome.output {
        error!("Failed to write LED: {}", e);
    }
}
