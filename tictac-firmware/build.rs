//! Build script for tictac-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and embeds it as a postcard blob

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tictac_core::config::GameConfig;

/// Name of the encoded configuration in OUT_DIR
const CONFIG_BLOB: &str = "board_config.bin";

fn main() {
    setup_linker();
    let config = load_config();
    write_blob(&config);
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // riscv-rt and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate board.toml
fn load_config() -> GameConfig {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the tictac-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Missing keys keep their defaults
    let config: GameConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Inconsistent values in board.toml                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(describe(e))
        );
    }

    println!("cargo:warning=board.toml validated successfully");
    config
}

/// Human-readable explanation of a validation error
fn describe(error: tictac_core::config::ConfigError) -> &'static str {
    use tictac_core::config::ConfigError::*;

    match error {
        BitOutOfRange => "[input] switch and button bits must be below 32",
        SelectorOverlap => "[input] column_switches and row_switches must be six distinct bits",
        ZeroTimerPeriod => "[timer] period_cycles must be greater than zero",
        GlyphTooLarge => "[layout] glyph_inset/cursor_inset leave no room inside a cell",
        BoardTooLarge => "[layout] 3 cells plus 2 grid lines do not fit on screen",
        ScoreSlotOverlap => "[score] x_slots and o_slots must be four distinct slots",
        ScoreSlotOutOfRange => "[score] x_slots and o_slots must be display slots 0-5",
    }
}

/// Encode the configuration for the firmware to decode at boot
fn write_blob(config: &GameConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let bytes = match postcard::to_stdvec(config) {
        Ok(bytes) => bytes,
        Err(e) => panic!("Failed to encode board configuration: {}", e),
    };

    let mut f = File::create(out_dir.join(CONFIG_BLOB)).unwrap();
    f.write_all(&bytes).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
