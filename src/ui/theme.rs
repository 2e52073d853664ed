use crossterm::style::Color;

pub struct Theme {
    pub header: Color, // Blue
    pub label: Color,  // Cyan
    pub value: Color,  // Orange
    pub error: Color,  // Red
}

pub const DEFAULT_THEME: Theme = Theme {
    header: Color::Rgb { r: 137, g: 180, b: 250 },
    label: Color::Rgb { r: 148, g: 226, b: 213 },
    value: Color::Rgb { r: 250, g: 179, b: 135 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
};
