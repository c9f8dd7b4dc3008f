// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_relay::config::{I2C_SCL_PIN, I2C_SDA_PIN, I2C_SLAVE_ADDRESS};
use esp_led_relay::hal::I2cSlaveListener;
use esp_led_relay::CommandRelay;
use esp_led_relay::tasks::bus_relay_task;

#[cfg(not(feature = "gpio-led"))]
use esp_led_relay::{
    config::{LED_ON_COLOR, RMT_CLOCK_MHZ},
    hal::{LedBuffer, SmartLedOutput},
};
#[cfg(not(feature = "gpio-led"))]
use esp_hal_smartled::smart_led_buffer;

#[cfg(feature = "gpio-led")]
use esp_led_relay::hal::GpioLedOutput;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point (I2C-Slave-Variante)
///
/// Initialisiert Hardware, startet den Relay und spawnt den Relay-Task.
/// Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED-Treiber erstellen
    #[cfg(not(feature = "gpio-led"))]
    let led = {
        static RMT_BUFFER: static_cell::StaticCell<LedBuffer> = static_cell::StaticCell::new();
        let buffer = RMT_BUFFER.init(smart_led_buffer!(1));
        SmartLedOutput::new(
            peripherals.GPIO8,
            peripherals.RMT,
            RMT_CLOCK_MHZ,
            buffer,
            LED_ON_COLOR,
        )
        .expect("Failed to initialize RMT for LED")
    };
    #[cfg(feature = "gpio-led")]
    let led = GpioLedOutput::new(peripherals.GPIO2);

    let mut relay = CommandRelay::new(led);
    if let Err(e) = relay.start() {
        error!("Failed to switch LED off at startup: {}", e);
    }

    // I2C0 als Slave (SDA GPIO6, SCL GPIO7)
    let listener = I2cSlaveListener::new(
        peripherals.I2C0,
        peripherals.GPIO6,
        peripherals.GPIO7,
        I2C_SLAVE_ADDRESS,
    )
    .expect("Failed to configure I2C0 as slave");

    info!("ESP32 I2C Slave Ready");
    info!(
        "Address: 0x{=u8:x}, SDA: GPIO{}, SCL: GPIO{}",
        listener.address(),
        I2C_SDA_PIN,
        I2C_SCL_PIN
    );
    info!("Send 1 to turn LED ON, 0 to turn LED OFF");

    // Spawn Relay Task (Bus-Kontext ist der I2C0-Interrupt)
    spawner.spawn(bus_relay_task(relay, listener)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
