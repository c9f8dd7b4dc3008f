// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

use std::env::{self, VarError};
use std::fs;
use std::path::Path;

use relay_core::config::{
    ConfigError, DEFAULT_I2C_ADDRESS, DEFAULT_UART_BAUD, parse_baud_rate, parse_i2c_address,
};

fn main() {
    // Lade .env file für optionale Overrides
    // Fehlt die Datei, gelten die Defaults aus relay-core
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env nicht gefunden ({}), nutze Defaults", e);
    }

    // Neu bauen, wenn sich .env oder die Variablen ändern
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");

    // Relay-Konfiguration prüfen und als Konstanten einbacken
    let baud = env_or("RELAY_UART_BAUD", DEFAULT_UART_BAUD, parse_baud_rate);
    let address = env_or("RELAY_I2C_ADDRESS", DEFAULT_I2C_ADDRESS, parse_i2c_address);
    write_relay_env(baud, address);

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Liest eine optionale Variable, ungültige Werte brechen den Build ab
fn env_or<T>(key: &str, default: T, parse: fn(&str) -> Result<T, ConfigError>) -> T {
    println!("cargo:rerun-if-env-changed={}", key);
    match env::var(key) {
        Ok(value) => match parse(&value) {
            Ok(parsed) => parsed,
            Err(e) => panic!("{}={:?} in .env is invalid: {}", key, value, e),
        },
        Err(VarError::NotPresent) => default,
        Err(e) => panic!("{} in .env is invalid: {}", key, e),
    }
}

// Schreibt die geprüften Werte nach $OUT_DIR/relay_env.rs (include! in config.rs)
fn write_relay_env(baud: u32, address: u8) {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let code = format!(
        "/// Baudrate für die UART-Verbindung zum Raspberry Pi (8N1)\n\
         /// Kann über RELAY_UART_BAUD in der .env überschrieben werden\n\
         pub const UART_BAUD_RATE: u32 = {};\n\
         \n\
         /// 7-Bit Slave-Adresse\n\
         /// Kann über RELAY_I2C_ADDRESS in der .env überschrieben werden (z.B. 0x08)\n\
         pub const I2C_SLAVE_ADDRESS: u8 = 0x{:02X};\n",
        baud, address
    );
    fs::write(Path::new(&out_dir).join("relay_env.rs"), code).unwrap();
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!("💡 `defmt` not found - make sure `defmt.x` is added as a linker script");
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!("💡 `esp-rtos` is not started. Call `esp_rtos::start()` before spawning tasks.");
                    eprintln!();
                }
                _ => (),
            },
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
