//! Board configuration loading
//!
//! The build script validates board.toml and embeds it as postcard.
//! It is decoded once at boot; anything unusable falls back to defaults.

use defmt::*;

use tictac_core::config::{ConfigError, GameConfig, SCORE_SLOTS};
use tictac_hal_dtekv::map::{SEGMENT_COUNT, VGA_HEIGHT, VGA_WIDTH};

const _: () = assert!(SCORE_SLOTS <= SEGMENT_COUNT);

/// Embedded configuration, edit board.toml and rebuild to customize
static CONFIG_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/board_config.bin"));

/// Configuration loading errors
#[derive(Debug, Clone, Copy, defmt::Format)]
pub enum LoadError {
    /// Blob does not decode as `GameConfig`
    Deserialize,
    /// Values are inconsistent
    Invalid(ConfigError),
    /// Configured screen is larger than the VGA buffer
    ScreenTooLarge,
}

/// Load the embedded configuration, or defaults if it is unusable
pub fn load() -> GameConfig {
    match decode(CONFIG_BLOB) {
        Ok(config) => {
            info!("Loaded board configuration ({} bytes)", CONFIG_BLOB.len());
            log_config_summary(&config);
            config
        }
        Err(e) => {
            warn!("Board configuration unusable: {:?}, using defaults", e);
            GameConfig::default()
        }
    }
}

fn decode(bytes: &[u8]) -> Result<GameConfig, LoadError> {
    let config: GameConfig = postcard::from_bytes(bytes).map_err(|_| LoadError::Deserialize)?;
    config.validate().map_err(LoadError::Invalid)?;

    if config.layout.screen_width > VGA_WIDTH || config.layout.screen_height > VGA_HEIGHT {
        return Err(LoadError::ScreenTooLarge);
    }
    Ok(config)
}

fn log_config_summary(config: &GameConfig) {
    debug!(
        "Layout: {}x{} screen, {} px cells",
        config.layout.screen_width, config.layout.screen_height, config.layout.cell_size
    );
    debug!(
        "Input: columns {}, rows {}, button bit {}",
        config.input.column_switches, config.input.row_switches, config.input.button
    );
    debug!(
        "Score: enabled={}, X slots {}, O slots {}",
        config.score.enabled, config.score.x_slots, config.score.o_slots
    );
}
