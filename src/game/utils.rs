use chess::Color;

/// Convert a chess color to a string
pub fn color_to_string(color: Color) -> String {
    match color {
        Color::White => "white".to_string(),
        Color::Black => "black".to_string(),
    }
}

/// Parse a color name, ignoring case and surrounding whitespace
pub fn color_from_str(s: &str) -> Option<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        _ => None,
    }
}

/// The game program takes 0 for white and 1 for black
pub fn color_to_process_arg(color: Color) -> &'static str {
    match color {
        Color::White => "0",
        Color::Black => "1",
    }
}
