//! Frame-by-frame playback of a trajectory in the terminal

use crate::colors::{shade_color, ColorState, Shade};
use crate::config::RenderConfig;
use crate::grid::Grid;
use crate::terminal::{Canvas, Terminal};
use crate::trajectory::{Classification, Trajectory};
use crossterm::event::{KeyCode, KeyModifiers};
use crossterm::style::Color;
use std::io;
use std::time::Duration;

/// Rows reserved above the grid for the step title
const HEADER_ROWS: u16 = 2;
/// Rows reserved below the grid for the status line
const FOOTER_ROWS: u16 = 2;
/// Key poll interval while paused
const PAUSED_POLL: Duration = Duration::from_millis(100);

/// Frame delay per digit key, '0' through '9'
const SPEED_PRESETS_MS: [u64; 10] = [2000, 50, 100, 200, 300, 500, 700, 1000, 1250, 1500];

/// Runtime state for interactive controls
pub struct PlaybackState {
    pub speed: Duration,
    pub colors: ColorState,
    pub paused: bool,
}

impl PlaybackState {
    pub fn new(frame_delay: Duration, scheme: u8) -> Self {
        Self {
            speed: frame_delay,
            colors: ColorState::new(scheme),
            paused: false,
        }
    }

    /// Handle keypress, returns true if should quit
    pub fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            // 1 fastest .. 9 slowest, 0 very slow
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let preset = SPEED_PRESETS_MS[(c as u8 - b'0') as usize];
                self.speed = Duration::from_millis(preset);
            }
            other => {
                self.colors.handle_key(other);
            }
        }
        false
    }

    /// How long to wait for input before the next frame
    fn wait(&self) -> Duration {
        if self.paused {
            PAUSED_POLL
        } else {
            self.speed
        }
    }
}

/// Top-left corner and horizontal cell width for an N×N grid on screen.
///
/// Cells are two columns wide when there is room, which keeps them roughly
/// square in most fonts.
pub fn layout(width: u16, height: u16, n: usize) -> (i32, i32, i32) {
    let cell_w: i32 = if n * 2 <= width as usize { 2 } else { 1 };
    let grid_w = n as i32 * cell_w;
    let grid_h = n as i32;
    let usable_h = height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as i32;

    let x0 = ((width as i32 - grid_w) / 2).max(0);
    let y0 = HEADER_ROWS as i32 + ((usable_h - grid_h) / 2).max(0);
    (x0, y0, cell_w)
}

/// Title shown above each frame
fn title(frame: usize, last: usize, grid: &Grid) -> String {
    format!("Step {} / {}   live {}", frame, last, grid.live_cells())
}

/// Play `trajectory` frame by frame, then wait on the final frame until a
/// key is pressed.
pub fn run(
    trajectory: &Trajectory,
    classification: &Classification,
    config: &RenderConfig,
) -> io::Result<()> {
    let mut term = Terminal::enter()?;
    let mut state = PlaybackState::new(config.frame_delay, config.color_scheme);
    let last = trajectory.len() - 1;
    let mut frame = 0usize;

    loop {
        term.sync_size()?;

        let status = if frame == last {
            format!("{}  (any key to exit)", super::report_line(classification))
        } else if state.paused {
            "paused  (space resume, q quit)".to_string()
        } else {
            "space pause  q quit  0-9 speed  shift+0-9 colors".to_string()
        };
        draw_frame(term.canvas(), trajectory, frame, &state, config.draw_char, &status);
        term.present()?;

        if frame == last {
            break;
        }
        match term.poll_key(state.wait())? {
            // redraw without advancing so the new state shows at once
            Some(key) => {
                if state.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
            None if !state.paused => frame += 1,
            None => {}
        }
    }

    log::debug!("playback finished at frame {}", last);
    while term.poll_key(PAUSED_POLL)?.is_none() {}
    Ok(())
}

fn draw_frame(
    canvas: &mut Canvas,
    trajectory: &Trajectory,
    frame: usize,
    state: &PlaybackState,
    draw_char: char,
    status: &str,
) {
    let grid = &trajectory.states()[frame];
    let previous = frame.checked_sub(1).and_then(|i| trajectory.get(i));
    let (w, h) = canvas.size();
    let (x0, y0, cell_w) = layout(w, h, grid.size());

    canvas.blank();
    canvas.text_centered(0, &title(frame, trajectory.len() - 1, grid), Color::White, true);

    for (y, row) in grid.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            let shade = Shade::of(value, previous.and_then(|p| p.get(y, x)));
            let (color, bold) = shade_color(state.colors.scheme, shade);
            let ch = if value == 1 { draw_char } else { '.' };
            canvas.block(x0 + x as i32 * cell_w, y0 + y as i32, cell_w, ch, color, bold);
        }
    }

    canvas.text(1, h as i32 - 1, status, Color::Grey, false);
}
