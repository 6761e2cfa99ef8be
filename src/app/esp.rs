//! Device wiring: UART0 transport, FreeRTOS idle, ESP-IDF restart.

use core::time::Duration;

use esp_idf_svc::hal::delay::{FreeRtos, NON_BLOCK};
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::uart::{self, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys as esp_idf_sys;

use serial_cli_console::hal::{
    delay_millis, Acceleration, Circle, Display, Imu, LedGrid, Rgb, SystemControl,
};
use serial_cli_console::{register_builtins, Console, ConsoleConfig, DeviceError, Idle, Transport, UartConfig};

/// Console port
pub struct UartTransport<'d> {
    uart: UartDriver<'d>,
}

impl Transport for UartTransport<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.uart.read(&mut buf, NON_BLOCK) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        let _ = self.uart.write(bytes);
    }
}

/// Yields the console task to FreeRTOS
pub struct FreeRtosIdle;

impl Idle for FreeRtosIdle {
    fn sleep(&mut self, duration: Duration) {
        FreeRtos::delay_ms(delay_millis(duration));
    }
}

/// Board with only the SoC itself wired up.
///
/// The IMU, keypad LEDs and OLED are not wired on this board: `imu` reports
/// no data and `led`/`draw` report `NotAttached`.
pub struct EspBoard;

impl Imu for EspBoard {
    fn read_acceleration(&mut self) -> Option<Acceleration> {
        None
    }
}

impl LedGrid for EspBoard {
    fn set_led(&mut self, _key: u8, _color: Rgb) -> Result<(), DeviceError> {
        Err(DeviceError::NotAttached)
    }

    fn commit(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotAttached)
    }
}

impl Display for EspBoard {
    fn draw_circle(&mut self, circle: Circle) {
        log::debug!("draw_circle {:?} dropped, no display", circle);
    }

    fn flush(&mut self) -> Result<(), DeviceError> {
        Err(DeviceError::NotAttached)
    }
}

impl SystemControl for EspBoard {
    fn reset(&mut self) {
        esp_idf_svc::hal::reset::restart();
    }
}

/// Initialize UART0 for the console.
pub fn init_uart<'d>(
    uart: impl Peripheral<P = uart::UART0> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
    config: &UartConfig,
) -> Result<UartDriver<'d>, esp_idf_sys::EspError> {
    let uart_config = uart::config::Config::default().baudrate(Hertz(config.baud_rate));

    UartDriver::new(
        uart,
        tx_pin,
        rx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

pub fn run() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let Some(peripherals) = Peripherals::take().ok() else {
        log::error!("peripherals already taken");
        return;
    };

    let uart_config = UartConfig::default();
    log::info!(
        "console on UART0 tx=GPIO{} rx=GPIO{} @ {} baud",
        uart_config.tx_pin,
        uart_config.rx_pin,
        uart_config.baud_rate
    );

    let uart = match init_uart(
        peripherals.uart0,
        peripherals.pins.gpio43,
        peripherals.pins.gpio44,
        &uart_config,
    ) {
        Ok(uart) => uart,
        Err(e) => {
            log::error!("UART init failed: {:?}", e);
            return;
        }
    };

    let mut console = Console::new(ConsoleConfig::default());
    if let Err(e) = register_builtins(console.registry_mut()) {
        log::error!("command registration failed: {}", e);
        return;
    }

    let mut io = UartTransport { uart };
    console.run(&mut io, &mut EspBoard, &mut FreeRtosIdle)
}
