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
use esp_hal::uart::Uart;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_relay::CommandRelay;
use esp_led_relay::config::{STARTUP_DELAY_MS, UART_BAUD_RATE, UART_RX_PIN, UART_TX_PIN};
use esp_led_relay::hal::uart_config;
use esp_led_relay::tasks::{boot_blink, uart_relay_task};

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
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point (UART-Variante)
///
/// Initialisiert Hardware, blinkt zur Bestätigung, startet den Relay
/// und spawnt den UART-Task. Danach schläft main().
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

    // Debug-Kanal stabilisieren lassen
    Timer::after(Duration::from_millis(STARTUP_DELAY_MS)).await;

    // LED-Treiber erstellen
    // RMT-Buffer muss 'static sein, da der Treiber an den Task geht
    #[cfg(not(feature = "gpio-led"))]
    let mut led = {
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
    let mut led = GpioLedOutput::new(peripherals.GPIO2);

    // Sichtbare Boot-Bestätigung, danach übernimmt der Relay die LED
    boot_blink(&mut led).await;

    let mut relay = CommandRelay::new(led);
    if let Err(e) = relay.start() {
        error!("Failed to switch LED off at startup: {}", e);
    }

    // UART1 für die Verbindung zum Raspberry Pi (8N1)
    let uart = Uart::new(peripherals.UART1, uart_config(UART_BAUD_RATE))
        .expect("Failed to initialize UART1")
        .with_rx(peripherals.GPIO4)
        .with_tx(peripherals.GPIO5)
        .into_async();

    info!("=== ESP32 UART Slave Ready (UART1) ===");
    info!("RX: GPIO{}, TX: GPIO{}", UART_RX_PIN, UART_TX_PIN);
    info!("Baud: {}", UART_BAUD_RATE);
    info!("Commands: '1' = ON, '0' = OFF");

    // Spawn UART Relay Task (sendet zuerst das Ready-Banner)
    spawner.spawn(uart_relay_task(relay, uart)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
