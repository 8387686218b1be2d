//! Built-in reference board: the Raspberry Pi 40-pin GPIO header.

use crate::color::{Bg, ColorSpec, Fg, Symbol};

use super::Pull::{High, Low, Unset};
use super::{LayoutTable, LegendEntry, PinRecord, Pull, Side, Widths};

const GLYPH: &str = "●";

/// Functional group of a pin; each group has its own symbol color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Gpio,
    I2c,
    Spi,
    Uart,
    Pcm,
    Eeprom,
    Power,
    Ground,
}

impl Role {
    const ALL: [Role; 8] = [
        Role::Gpio,
        Role::I2c,
        Role::Spi,
        Role::Uart,
        Role::Pcm,
        Role::Eeprom,
        Role::Power,
        Role::Ground,
    ];

    fn color(self) -> ColorSpec {
        match self {
            Role::Gpio => ColorSpec::fg(Fg::Green),
            Role::I2c => ColorSpec::fg(Fg::Blue),
            Role::Spi => ColorSpec::fg(Fg::BrightMagenta),
            Role::Uart => ColorSpec::fg(Fg::Magenta),
            Role::Pcm => ColorSpec::fg(Fg::Cyan),
            Role::Eeprom => ColorSpec::fg(Fg::Yellow),
            Role::Power => ColorSpec::fg(Fg::BrightRed),
            Role::Ground => ColorSpec::new(Fg::Black, Bg::White),
        }
    }

    fn symbol(self) -> Symbol {
        Symbol::new(GLYPH, self.color())
    }

    fn legend(self) -> LegendEntry {
        let (name, description) = match self {
            Role::Gpio => ("GPIO", "general purpose I/O"),
            Role::I2c => ("I2C", "inter-integrated circuit"),
            Role::Spi => ("SPI", "serial peripheral interface"),
            Role::Uart => ("UART", "serial console"),
            Role::Pcm => ("PCM", "pulse-code modulated audio"),
            Role::Eeprom => ("EEPROM", "HAT ID bus, reserved"),
            Role::Power => ("Power", ""),
            Role::Ground => ("Ground", ""),
        };
        LegendEntry::new(self.symbol(), name, description)
    }
}

/// Pin number, name, description, default pull and role, in physical order.
const PINS: [(u32, &str, &str, Pull, Role); 40] = [
    (1, "3v3", "Power", Unset, Role::Power),
    (2, "5v", "Power", Unset, Role::Power),
    (3, "GPIO2", "I2C1 SDA", High, Role::I2c),
    (4, "5v", "Power", Unset, Role::Power),
    (5, "GPIO3", "I2C1 SCL", High, Role::I2c),
    (6, "GND", "", Unset, Role::Ground),
    (7, "GPIO4", "GPCLK0", High, Role::Gpio),
    (8, "GPIO14", "UART TX", Low, Role::Uart),
    (9, "GND", "", Unset, Role::Ground),
    (10, "GPIO15", "UART RX", Low, Role::Uart),
    (11, "GPIO17", "", Low, Role::Gpio),
    (12, "GPIO18", "PCM CLK", Low, Role::Pcm),
    (13, "GPIO27", "", Low, Role::Gpio),
    (14, "GND", "", Unset, Role::Ground),
    (15, "GPIO22", "", Low, Role::Gpio),
    (16, "GPIO23", "", Low, Role::Gpio),
    (17, "3v3", "Power", Unset, Role::Power),
    (18, "GPIO24", "", Low, Role::Gpio),
    (19, "GPIO10", "SPI0 MOSI", Low, Role::Spi),
    (20, "GND", "", Unset, Role::Ground),
    (21, "GPIO9", "SPI0 MISO", Low, Role::Spi),
    (22, "GPIO25", "", Low, Role::Gpio),
    (23, "GPIO11", "SPI0 SCLK", Low, Role::Spi),
    (24, "GPIO8", "SPI0 CE0", High, Role::Spi),
    (25, "GND", "", Unset, Role::Ground),
    (26, "GPIO7", "SPI0 CE1", High, Role::Spi),
    (27, "GPIO0", "ID_SD", High, Role::Eeprom),
    (28, "GPIO1", "ID_SC", High, Role::Eeprom),
    (29, "GPIO5", "", High, Role::Gpio),
    (30, "GND", "", Unset, Role::Ground),
    (31, "GPIO6", "", High, Role::Gpio),
    (32, "GPIO12", "PWM0", Low, Role::Gpio),
    (33, "GPIO13", "PWM1", Low, Role::Gpio),
    (34, "GND", "", Unset, Role::Ground),
    (35, "GPIO19", "PCM FS", Low, Role::Pcm),
    (36, "GPIO16", "", Low, Role::Gpio),
    (37, "GPIO26", "", Low, Role::Gpio),
    (38, "GPIO20", "PCM DIN", Low, Role::Pcm),
    (39, "GND", "", Unset, Role::Ground),
    (40, "GPIO21", "PCM DOUT", Low, Role::Pcm),
];

/// The Raspberry Pi 40-pin header with its legend.
pub fn raspberry_pi() -> LayoutTable {
    let pins = PINS
        .iter()
        .map(|&(pin, name, description, pull, role)| {
            let side = if pin % 2 == 1 { Side::Left } else { Side::Right };
            PinRecord::new(pin, side, name, role.symbol())
                .with_pull(pull)
                .with_description(description)
        })
        .collect();

    LayoutTable {
        title: "Raspberry Pi GPIO header".to_string(),
        widths: Widths::default(),
        pins,
        legend: Role::ALL.iter().map(|r| r.legend()).collect(),
    }
}
