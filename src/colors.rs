use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Number of selectable schemes (0-9)
pub const SCHEME_COUNT: u8 = 10;

/// Shift+digit on a US layout, indexed by the scheme it selects
const SCHEME_KEYS: [char; SCHEME_COUNT as usize] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

/// How a cell is drawn, given its value now and on the previous frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Dead,
    Died,
    Alive,
    Born,
}

impl Shade {
    pub fn of(value: u8, previous: Option<u8>) -> Self {
        let flipped = previous.is_some_and(|old| old != value);
        match (value == 1, flipped) {
            (true, true) => Shade::Born,
            (true, false) => Shade::Alive,
            (false, true) => Shade::Died,
            (false, false) => Shade::Dead,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Palettes in `Shade` order: dead, died, alive, born
const PALETTES: [[Color; 4]; SCHEME_COUNT as usize] = [
    // viridis ends
    [
        Color::Rgb { r: 68, g: 1, b: 84 },
        Color::Rgb { r: 33, g: 145, b: 140 },
        Color::Rgb { r: 253, g: 231, b: 37 },
        Color::Rgb { r: 253, g: 231, b: 37 },
    ],
    [Color::DarkRed, Color::Red, Color::DarkYellow, Color::Yellow], // fire
    [Color::DarkBlue, Color::Blue, Color::Cyan, Color::Cyan],       // ice
    [Color::DarkMagenta, Color::Magenta, Color::Magenta, Color::AnsiValue(13)], // pink
    [Color::DarkYellow, Color::Yellow, Color::Yellow, Color::AnsiValue(11)],    // gold
    [Color::DarkCyan, Color::Cyan, Color::Cyan, Color::AnsiValue(14)],          // electric
    [Color::DarkRed, Color::Red, Color::Magenta, Color::AnsiValue(9)],          // lava
    [Color::DarkGrey, Color::Grey, Color::White, Color::White],                 // mono
    [Color::Red, Color::Yellow, Color::Green, Color::Cyan],                     // rainbow
    [Color::DarkBlue, Color::Blue, Color::Magenta, Color::AnsiValue(13)],       // neon
];

/// Scheme selected for playback, switched with Shift+digit
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self { scheme: default_scheme % SCHEME_COUNT }
    }

    /// Returns true if the key selected a scheme.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let KeyCode::Char(c) = code else {
            return false;
        };
        match SCHEME_KEYS.iter().position(|&k| k == c) {
            Some(scheme) => {
                self.scheme = scheme as u8;
                true
            }
            None => false,
        }
    }
}

/// Terminal color for a shade; newborn cells are bold.
pub fn shade_color(scheme: u8, shade: Shade) -> (Color, bool) {
    let palette = &PALETTES[(scheme % SCHEME_COUNT) as usize];
    (palette[shade.index()], shade == Shade::Born)
}

/// RGB for a dead (0) and live (1) cell, used where there is no terminal
/// palette to fall back on (GIF frames).
pub fn cell_rgb(scheme: u8, alive: bool) -> [u8; 3] {
    let shade = if alive { Shade::Alive } else { Shade::Dead };
    to_rgb(shade_color(scheme, shade).0)
}

/// Approximate RGB for a terminal color
pub fn to_rgb(color: Color) -> [u8; 3] {
    match color {
        Color::Rgb { r, g, b } => [r, g, b],
        Color::Black => [0, 0, 0],
        Color::DarkRed => [128, 0, 0],
        Color::DarkGreen => [0, 128, 0],
        Color::DarkYellow => [128, 128, 0],
        Color::DarkBlue => [0, 0, 128],
        Color::DarkMagenta => [128, 0, 128],
        Color::DarkCyan => [0, 128, 128],
        Color::Grey => [192, 192, 192],
        Color::DarkGrey => [128, 128, 128],
        Color::Red | Color::AnsiValue(9) => [255, 0, 0],
        Color::Green | Color::AnsiValue(10) => [0, 255, 0],
        Color::Yellow | Color::AnsiValue(11) => [255, 255, 0],
        Color::Blue | Color::AnsiValue(12) => [0, 0, 255],
        Color::Magenta | Color::AnsiValue(13) => [255, 0, 255],
        Color::Cyan | Color::AnsiValue(14) => [0, 255, 255],
        _ => [255, 255, 255],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_is_viridis() {
        assert_eq!(cell_rgb(0, false), [68, 1, 84]);
        assert_eq!(cell_rgb(0, true), [253, 231, 37]);
    }

    #[test]
    fn live_and_dead_differ_in_every_scheme() {
        for scheme in 0..SCHEME_COUNT {
            assert_ne!(cell_rgb(scheme, false), cell_rgb(scheme, true), "scheme {scheme}");
        }
    }

    #[test]
    fn shade_follows_previous_frame() {
        assert_eq!(Shade::of(1, Some(0)), Shade::Born);
        assert_eq!(Shade::of(1, Some(1)), Shade::Alive);
        assert_eq!(Shade::of(0, Some(1)), Shade::Died);
        assert_eq!(Shade::of(0, Some(0)), Shade::Dead);
        // first frame has nothing to compare with
        assert_eq!(Shade::of(1, None), Shade::Alive);
    }

    #[test]
    fn only_newborn_cells_are_bold() {
        assert!(shade_color(3, Shade::Born).1);
        assert!(!shade_color(3, Shade::Alive).1);
        assert!(!shade_color(3, Shade::Died).1);
    }

    #[test]
    fn shifted_digits_select_schemes() {
        let mut state = ColorState::new(0);
        assert!(state.handle_key(KeyCode::Char('!')));
        assert_eq!(state.scheme, 1);
        assert!(state.handle_key(KeyCode::Char('(')));
        assert_eq!(state.scheme, 9);
        assert!(state.handle_key(KeyCode::Char(')')));
        assert_eq!(state.scheme, 0);
        assert!(!state.handle_key(KeyCode::Char('x')));
        assert!(!state.handle_key(KeyCode::Enter));
    }

    #[test]
    fn out_of_range_default_wraps() {
        assert_eq!(ColorState::new(12).scheme, 2);
    }
}
