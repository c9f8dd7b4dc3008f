// UART Relay Task - LED-Steuerung über ASCII-Kommandos
use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::Async;
use esp_hal::uart::Uart;

use crate::config::POLL_INTERVAL_MS;
use crate::hal::UartLink;
use crate::tasks::log_outcome;
use crate::{
    ByteLink, CommandRelay, OutputDriver, Response, StatusRelay, announce_ready, serve_stream_byte,
};

/// UART Relay Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// - Sendet einmal das Ready-Banner
/// - Liest pro Iteration genau ein Byte
/// - Schaltet die LED und sendet die Bestätigung zurück
/// - Wartet danach `POLL_INTERVAL_MS`
///
/// # Trait-basierte Abstraktion
/// - `D: OutputDriver`: SmartLedOutput / GpioLedOutput
/// - `L: ByteLink`: UartLink
pub async fn uart_relay_logic<D: OutputDriver, L: ByteLink>(
    mut relay: CommandRelay<D>,
    mut link: L,
) {
    match announce_ready(&mut link).await {
        Ok(()) => info!("UART: Sent {}", Response::Ready),
        Err(e) => warn!("UART: Failed to send ready banner: {}", e),
    }

    loop {
        match serve_stream_byte(&mut relay, &mut link).await {
            Ok(exchange) => {
                log_outcome(&exchange.outcome);
                if let Err(e) = exchange.reply {
                    warn!("UART: Response not delivered: {}", e);
                }
            }
            Err(e) => warn!("UART: Read failed: {}", e),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// UART Relay Task - Embassy Task
///
/// # Parameter
/// - `relay`: gestarteter Relay mit LED-Treiber
/// - `uart`: UART1 im Async-Modus (8N1)
#[embassy_executor::task]
pub async fn uart_relay_task(relay: StatusRelay, uart: Uart<'static, Async>) {
    uart_relay_logic(relay, UartLink::new(uart)).await;
}
