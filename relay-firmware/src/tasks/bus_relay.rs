// I2C Relay Task - LED-Steuerung als I2C-Slave
//
// Der I2C0-Interrupt legt jede abgeschlossene Transaktion im BusSlot ab,
// der Relay-Task verarbeitet eine Nachricht pro Iteration.
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Timer};

use crate::config::POLL_INTERVAL_MS;
use crate::hal::I2cSlaveListener;
use crate::tasks::log_outcome;
use crate::{BusSlot, CommandRelay, OutputDriver, StatusRelay, serve_bus_message};

/// Bus Relay Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Wartet auf den Slot, schaltet die LED und loggt lokal.
/// Auf dem Bus gibt es keinen Rückkanal.
pub async fn bus_relay_logic<D: OutputDriver, M: RawMutex>(
    mut relay: CommandRelay<D>,
    slot: &BusSlot<M>,
) {
    loop {
        let outcome = serve_bus_message(&mut relay, slot).await;
        log_outcome(&outcome);

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Bus Relay Task - Embassy Task
///
/// Besitzt den Listener, damit Peripheral und Interrupt aktiv bleiben.
#[embassy_executor::task]
pub async fn bus_relay_task(relay: StatusRelay, listener: I2cSlaveListener<'static>) {
    bus_relay_logic(relay, listener.messages()).await;
}
