//! Build-Zeit Konfiguration
//!
//! Prüft die Overrides aus der `.env`. Wird vom Build-Script der Firmware
//! aufgerufen, ein ungültiger Wert bricht dort den Build ab.

use core::fmt;

/// Baudrate ohne Override
pub const DEFAULT_UART_BAUD: u32 = 115_200;

/// I2C-Adresse ohne Override
pub const DEFAULT_I2C_ADDRESS: u8 = 0x08;

/// Kleinste nicht reservierte 7-Bit Adresse
pub const I2C_ADDRESS_MIN: u8 = 0x08;

/// Größte nicht reservierte 7-Bit Adresse
pub const I2C_ADDRESS_MAX: u8 = 0x77;

/// Fehler beim Prüfen eines Konfigurationswertes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Keine gültige Zahl (auch Leerzeichen, Vorzeichen, Überlauf)
    NotANumber,
    /// Baudrate 0
    ZeroBaudRate,
    /// Adresse außerhalb von 0x08..=0x77
    ReservedAddress(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::NotANumber => f.write_str("not a number"),
            ConfigError::ZeroBaudRate => f.write_str("baud rate must not be 0"),
            ConfigError::ReservedAddress(addr) => write!(
                f,
                "address 0x{:02X} outside 0x{:02X}..=0x{:02X}",
                addr, I2C_ADDRESS_MIN, I2C_ADDRESS_MAX
            ),
        }
    }
}

/// Prüft eine Baudrate (dezimal, größer 0)
///
/// ```
/// # use relay_core::config::{ConfigError, parse_baud_rate};
/// assert_eq!(parse_baud_rate("9600"), Ok(9600));
/// assert_eq!(parse_baud_rate("115200 "), Err(ConfigError::NotANumber));
/// ```
pub fn parse_baud_rate(value: &str) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(0) => Err(ConfigError::ZeroBaudRate),
        Ok(baud) => Ok(baud),
        Err(_) => Err(ConfigError::NotANumber),
    }
}

/// Prüft eine 7-Bit I2C-Adresse (dezimal oder `0x`-hex)
///
/// ```
/// # use relay_core::config::{ConfigError, parse_i2c_address};
/// assert_eq!(parse_i2c_address("0x08"), Ok(8));
/// assert_eq!(parse_i2c_address("0x8g"), Err(ConfigError::NotANumber));
/// ```
pub fn parse_i2c_address(value: &str) -> Result<u8, ConfigError> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    let address = parsed.map_err(|_| ConfigError::NotANumber)?;

    if (I2C_ADDRESS_MIN..=I2C_ADDRESS_MAX).contains(&address) {
        Ok(address)
    } else {
        Err(ConfigError::ReservedAddress(address))
    }
}
