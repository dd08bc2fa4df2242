//! Text measurement for the Times faces.
//!
//! Widths are per-character advance widths in thousandths of an em, taken
//! from the Adobe core font metrics for Times-Roman and Times-Bold.
//! Characters outside the table fall back to a 500-unit advance. Centering
//! only needs widths that are consistent between measurement and painting,
//! and distinct between the two weights.

use crate::command::FontWeight;
use crate::geometry::MM_PER_PT;

/// Advance width of one character in millesimal em units.
pub fn char_units(c: char, weight: FontWeight) -> u32 {
    match weight {
        FontWeight::Regular => roman_units(c),
        FontWeight::Bold => bold_units(c),
    }
}

/// Width of a text run in points at the given nominal size.
pub fn text_width_pt(text: &str, weight: FontWeight, size_pt: f64) -> f64 {
    let units: u32 = text.chars().map(|c| char_units(c, weight)).sum();
    units as f64 / 1000.0 * size_pt
}

/// Width of a text run in millimetres at the given nominal size.
pub fn text_width_mm(text: &str, weight: FontWeight, size_pt: f64) -> f64 {
    text_width_pt(text, weight, size_pt) * MM_PER_PT
}

fn roman_units(c: char) -> u32 {
    match c {
        ' ' => 250,
        '!' => 333,
        '"' => 408,
        '\'' => 180,
        '(' | ')' => 333,
        ',' | '.' => 250,
        '-' => 333,
        '/' => 278,
        '0'..='9' => 500,
        ':' | ';' => 278,
        '?' => 444,
        'A' => 722,
        'B' => 667,
        'C' => 667,
        'D' => 722,
        'E' => 611,
        'F' => 556,
        'G' => 722,
        'H' => 722,
        'I' => 333,
        'J' => 389,
        'K' => 722,
        'L' => 611,
        'M' => 889,
        'N' => 722,
        'O' => 722,
        'P' => 556,
        'Q' => 722,
        'R' => 667,
        'S' => 556,
        'T' => 611,
        'U' => 722,
        'V' => 722,
        'W' => 944,
        'X' => 722,
        'Y' => 722,
        'Z' => 611,
        'a' => 444,
        'b' => 500,
        'c' => 444,
        'd' => 500,
        'e' => 444,
        'f' => 333,
        'g' => 500,
        'h' => 500,
        'i' => 278,
        'j' => 278,
        'k' => 500,
        'l' => 278,
        'm' => 778,
        'n' => 500,
        'o' => 500,
        'p' => 500,
        'q' => 500,
        'r' => 333,
        's' => 389,
        't' => 278,
        'u' => 500,
        'v' => 500,
        'w' => 722,
        'x' => 500,
        'y' => 500,
        'z' => 444,
        _ => 500,
    }
}

fn bold_units(c: char) -> u32 {
    match c {
        ' ' => 250,
        '!' => 333,
        '"' => 555,
        '\'' => 278,
        '(' | ')' => 333,
        ',' | '.' => 250,
        '-' => 333,
        '/' => 278,
        '0'..='9' => 500,
        ':' | ';' => 333,
        '?' => 500,
        'A' => 722,
        'B' => 667,
        'C' => 722,
        'D' => 722,
        'E' => 667,
        'F' => 611,
        'G' => 778,
        'H' => 778,
        'I' => 389,
        'J' => 500,
        'K' => 778,
        'L' => 667,
        'M' => 944,
        'N' => 722,
        'O' => 778,
        'P' => 611,
        'Q' => 778,
        'R' => 722,
        'S' => 556,
        'T' => 667,
        'U' => 722,
        'V' => 722,
        'W' => 1000,
        'X' => 722,
        'Y' => 722,
        'Z' => 667,
        'a' => 500,
        'b' => 556,
        'c' => 444,
        'd' => 556,
        'e' => 444,
        'f' => 333,
        'g' => 500,
        'h' => 556,
        'i' => 278,
        'j' => 333,
        'k' => 556,
        'l' => 278,
        'm' => 833,
        'n' => 556,
        'o' => 500,
        'p' => 556,
        'q' => 556,
        'r' => 444,
        's' => 389,
        't' => 333,
        'u' => 556,
        'v' => 500,
        'w' => 722,
        'x' => 500,
        'y' => 500,
        'z' => 444,
        _ => 500,
    }
}
