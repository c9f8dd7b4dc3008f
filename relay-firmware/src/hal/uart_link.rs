// UART Link - ByteLink Implementierung für esp-hal UART (Async)
//
// Eigener UART (UART1) für die Verbindung zum Raspberry Pi,
// getrennt vom Debug-Kanal (defmt über esp-println).

use defmt::{Debug2Format, error};
use esp_hal::Async;
use esp_hal::uart::{Config, DataBits, Parity, StopBits, Uart};
use relay_core::{ByteLink, LinkError};

/// UART-Konfiguration 8N1 mit gegebener Baudrate
pub fn uart_config(baud_rate: u32) -> Config {
    Config::default()
        .with_baudrate(baud_rate)
        .with_data_bits(DataBits::_8)
        .with_parity(Parity::None)
        .with_stop_bits(StopBits::_1)
}

/// Byte-Verbindung über einen async UART
pub struct UartLink<'d> {
    uart: Uart<'d, Async>,
}

impl<'d> UartLink<'d> {
    pub fn new(uart: Uart<'d, Async>) -> Self {
        Self { uart }
    }
}

impl<'d> ByteLink for UartLink<'d> {
    async fn read_byte(&mut self) -> Result<u8, LinkError> {
        let mut byte = [0u8; 1];
        loop {
            let count = self.uart.read_async(&mut byte).await.map_err(|e| {
                error!("UART: Read error: {}", Debug2Format(&e));
                LinkError::Read
            })?;
            if count == 1 {
                return Ok(byte[0]);
            }
        }
    }

    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), LinkError> {
        let mut remaining = bytes;
        while !remaining.is_empty() {
            let written = self.uart.write_async(remaining).await.map_err(|e| {
                error!("UART: Write error: {}", Debug2Format(&e));
                LinkError::Write
            })?;
            remaining = &remaining[written..];
        }
        Ok(())
    }
}
