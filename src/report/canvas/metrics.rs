//! Helvetica text metrics for alignment, wrapping and truncation.
//!
//! Advance widths are the standard AFM values (1/1000 em) for printable
//! ASCII; other characters use the width of a digit.

const FALLBACK_WIDTH: u16 = 556;

/// Ascender height as a fraction of the font size.
pub const ASCENT: f32 = 0.718;

/// Line height as a fraction of the font size (ascender - descender + gap).
pub const LINE_HEIGHT_FACTOR: f32 = 1.156;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // p..~
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(ch: char, bold: bool) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    match ch as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        _ => FALLBACK_WIDTH,
    }
}

pub fn line_height(size: f32) -> f32 {
    size * LINE_HEIGHT_FACTOR
}

/// Rendered width of `text` in points.
pub fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text.chars().map(|ch| char_width(ch, bold) as u32).sum();
    units as f32 * size / 1000.0
}

/// Greedy word wrap. Explicit newlines are kept, words wider than
/// `max_width` are split by character. Always returns at least one line.
pub fn wrap_text(text: &str, size: f32, bold: bool, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(&candidate, size, bold) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if text_width(word, size, bold) <= max_width {
                current = word.to_string();
            } else {
                for ch in word.chars() {
                    current.push(ch);
                    if text_width(&current, size, bold) > max_width && current.chars().count() > 1 {
                        let overflow = current.pop();
                        lines.push(std::mem::take(&mut current));
                        current.extend(overflow);
                    }
                }
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Cuts `text` to fit `max_width`, ending with `...` when shortened.
pub fn truncate_text(text: &str, size: f32, bold: bool, max_width: f32) -> String {
    if text_width(text, size, bold) <= max_width {
        return text.to_string();
    }

    let ellipsis = "...";
    let budget = max_width - text_width(ellipsis, size, bold);
    let mut result = String::new();
    for ch in text.chars() {
        result.push(ch);
        if text_width(&result, size, bold) > budget {
            result.pop();
            break;
        }
    }
    format!("{}{}", result.trim_end(), ellipsis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_size() {
        let w10 = text_width("Total", 10.0, false);
        let w20 = text_width("Total", 20.0, false);
        assert!((w20 - 2.0 * w10).abs() < 0.001);
        assert!(text_width("Total", 10.0, true) > w10);
    }

    #[test]
    fn test_digit_width() {
        assert!((text_width("0", 10.0, false) - 5.56).abs() < 0.001);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "Clean evaporator coil and replace the condensate pump on the rooftop unit";
        let lines = wrap_text(text, 10.0, false, 120.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 10.0, false) <= 120.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_text_keeps_newlines_and_empty_input() {
        assert_eq!(wrap_text("a\nb", 10.0, false, 500.0), vec!["a", "b"]);
        assert_eq!(wrap_text("", 10.0, false, 500.0), vec![""]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text(&"W".repeat(40), 10.0, false, 50.0);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| text_width(l, 10.0, false) <= 50.0));
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Filter", 9.0, false, 200.0), "Filter");
        let cut = truncate_text(&"Replacement compressor ".repeat(10), 9.0, false, 100.0);
        assert!(cut.ends_with("..."));
        assert!(text_width(&cut, 9.0, false) <= 100.0);
    }
}
