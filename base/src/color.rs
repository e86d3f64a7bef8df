/// An 8 bit per channel RGBA color, not premultiplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);
pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);
pub const RED: ColorU8 = ColorU8::from_rgb(255, 0, 0);
pub const GREEN: ColorU8 = ColorU8::from_rgb(0, 128, 0);
pub const BLUE: ColorU8 = ColorU8::from_rgb(0, 0, 255);
pub const TRANSPARENT: ColorU8 = ColorU8::from_rgba(0, 0, 0, 0);

impl ColorU8 {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from a `#rgb` or `#rrggbb` literal.
    ///
    /// Panics on malformed input, which makes it suited for constants only.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex[0] != b'#' {
            panic!("Invalid hex color");
        }
        match hex.len() {
            4 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                ColorU8::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b)
            }
            7 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                ColorU8::from_rgb(r, g, b)
            }
            _ => panic!("Invalid hex color"),
        }
    }

    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn red(&self) -> u8 {
        self.r
    }

    pub const fn green(&self) -> u8 {
        self.g
    }

    pub const fn blue(&self) -> u8 {
        self.b
    }

    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// The opacity in `[0, 1]`, or `None` for an opaque color
    pub const fn opacity(&self) -> Option<f32> {
        if self.a == 255 {
            None
        } else {
            Some(self.a as f32 / 255.0)
        }
    }

    /// The `#rrggbb` representation (alpha is not included)
    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for ColorU8 {
    fn default() -> Self {
        BLACK
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}
