// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus relay-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod i2c_slave;
pub mod led_output;
pub mod uart_link;

pub use i2c_slave::{I2cSlaveError, I2cSlaveListener};
pub use led_output::{LedInitError, StatusLed};
pub use uart_link::{UartLink, uart_config};

#[cfg(not(feature = "gpio-led"))]
pub use led_output::{LED_BUFFER_SIZE, LedBuffer, SmartLedOutput};

#[cfg(feature = "gpio-led")]
pub use led_output::GpioLedOutput;
