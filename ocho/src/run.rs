use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use ocho_core::constants::KEY_COUNT;
use ocho_core::{read_rom, Machine};
use ocho_display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;

/// Interpreter steps per rendered frame; 10 at 60Hz gives the usual ~600Hz
/// effective instruction clock.
const STEPS_PER_FRAME: u32 = 10;

/// One frame at 60Hz.
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// How long the cue tone is held.
const BEEP_TIME: Duration = Duration::from_millis(80);

/// The frame driver. Once per frame, in order: overwrite the keypad, run
/// a fixed number of steps, tick the timers (beeping on the cue), and
/// render the frame buffer when it changed.
pub fn run(rom: PathBuf) -> Result<(), Box<dyn Error>> {
    let file = File::open(rom)?;
    let bytes = read_rom(&mut BufReader::new(file))?;
    let mut machine = Machine::new(&bytes)?;

    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let beeper = Beeper::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let mut beep_until: Option<Instant> = None;

    'frame: loop {
        let frame_start = Instant::now();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'frame,
                _ => continue,
            }
        }

        let mut keys = [false; KEY_COUNT];
        for scancode in events.keyboard_state().pressed_scancodes() {
            if let Some(key) = keymap(scancode) {
                keys[key as usize] = true;
            }
        }
        machine.set_keys(keys);

        for _ in 0..STEPS_PER_FRAME {
            machine.step();
        }

        if machine.tick_timers() {
            beeper.play();
            beep_until = Some(frame_start + BEEP_TIME);
        }
        if let Some(until) = beep_until {
            if Instant::now() >= until {
                beeper.pause();
                beep_until = None;
            }
        }

        if let Some(frame) = machine.take_frame() {
            display.render(&frame)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }

    Ok(())
}
