//! Tictac - tic-tac-toe firmware for the DTEK-V board
//!
//! Slide switches 0-2 pick the column and 3-5 pick the row; KEY1 places
//! the current player's mark, or starts a new game once one has ended.
//! The board is drawn on VGA and the score shown on the seven-segment
//! displays.
//!
//! A single polling loop waits for the interval timer, then runs one
//! decode, update and render pass.

#![no_std]
#![no_main]

use defmt::*;
use riscv_rt::entry;
use {defmt_rtt as _, panic_halt as _};

use tictac_core::Controller;
use tictac_display::Rasterizer;
use tictac_drivers::input::SwitchPanel;
use tictac_drivers::segment::SegmentScoreboard;
use tictac_hal::PeriodicTimer;
use tictac_hal_dtekv::map::TIMER_CLOCK_HZ;
use tictac_hal_dtekv::Peripherals;

mod config;
mod report;

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Tictac firmware starting...");

    let config = config::load();

    // SAFETY: called once at boot, nothing else accesses the peripherals
    let Peripherals {
        switches,
        button,
        mut timer,
        segments,
        vga,
    } = unsafe { Peripherals::steal() };
    info!("Peripherals initialized");

    // The loaded layout always fits the VGA buffer, see config::load
    let renderer = match Rasterizer::new(vga, &config.layout) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Rasterizer setup failed: {}", e);
            halt();
        }
    };
    let input = SwitchPanel::new(switches, button, config.input.button);
    let scoreboard = SegmentScoreboard::new(segments);

    let mut controller = Controller::new(&config, input, renderer, scoreboard);
    report::log_boot(&controller.boot());

    timer.start(config.timer.period_cycles);
    if !timer.is_running() {
        warn!("Interval timer not running after start");
    }
    info!(
        "Tick every {} cycles ({} us)",
        config.timer.period_cycles,
        config.timer.period_cycles / (TIMER_CLOCK_HZ / 1_000_000)
    );

    loop {
        timer.wait();
        let report = controller.tick();
        report::log_tick(&report, controller.state());
    }
}

/// Stop doing anything, forever
fn halt() -> ! {
    loop {
        riscv::asm::wfi();
    }
}
