//! Async Sessions für die beiden Varianten
//!
//! Jeder Aufruf verarbeitet genau ein Token. Die Schleife und das
//! Delay zwischen den Iterationen liegen in der Firmware.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::codec::LINE_ENDING;
use crate::relay::{CommandRelay, Outcome};
use crate::slot::BusSlot;
use crate::traits::{ByteLink, LinkError, OutputDriver};
use crate::types::Response;

/// Ergebnis eines UART-Austauschs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub outcome: Outcome,
    /// Ergebnis der Antwort-Zeile, `Ok` wenn keine Antwort fällig war
    pub reply: Result<(), LinkError>,
}

/// Sendet eine Antwort als Zeile
pub async fn send_response<L: ByteLink>(link: &mut L, response: Response) -> Result<(), LinkError> {
    link.write_all(response.as_str().as_bytes()).await?;
    link.write_all(LINE_ENDING).await
}

/// Sendet das Banner `ESP32_READY_UART2` (einmal nach dem Start)
pub async fn announce_ready<L: ByteLink>(link: &mut L) -> Result<(), LinkError> {
    send_response(link, Response::Ready).await
}

/// Liest genau ein Byte, verarbeitet es und sendet ggf. die Antwort
///
/// Lesefehler werden zurückgegeben. Schreibfehler landen in
/// `Exchange::reply`, der Zustandswechsel bleibt bestehen.
pub async fn serve_stream_byte<D, L>(
    relay: &mut CommandRelay<D>,
    link: &mut L,
) -> Result<Exchange, LinkError>
where
    D: OutputDriver,
    L: ByteLink,
{
    let byte = link.read_byte().await?;
    let outcome = relay.process_stream_byte(byte);

    let reply = match outcome.response {
        Some(response) => send_response(link, response).await,
        None => Ok(()),
    };

    Ok(Exchange { outcome, reply })
}

/// Wartet auf die nächste I2C-Nachricht und verarbeitet sie
pub async fn serve_bus_message<D, M>(relay: &mut CommandRelay<D>, slot: &BusSlot<M>) -> Outcome
where
    D: OutputDriver,
    M: RawMutex,
{
    let message = slot.take().await;
    relay.process_bus_message(message)
}
