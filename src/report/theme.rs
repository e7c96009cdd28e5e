//! Visual themes.
//!
//! `Professional` draws filled boxes, a colored table header and zebra rows.
//! `Plain` keeps the same geometry with outlines only and black text, and
//! lists material/labor subtotals above the work-order total.

use std::fmt;
use std::str::FromStr;

use super::canvas::Rgb;
use crate::models::{QuoteStatus, WorkOrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Professional,
    Plain,
}

impl Theme {
    pub fn palette(&self) -> Palette {
        match self {
            Self::Professional => Palette::PROFESSIONAL,
            Self::Plain => Palette::PLAIN,
        }
    }

    /// Whether boxes get a background fill.
    pub fn filled(&self) -> bool {
        matches!(self, Self::Professional)
    }

    pub fn shows_subtotals(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "professional" | "styled" => Ok(Self::Professional),
            "plain" | "simple" => Ok(Self::Plain),
            other => Err(format!("unknown report theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Professional => write!(f, "professional"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    pub box_fill: Rgb,
    pub header_fill: Rgb,
    pub header_text: Rgb,
    pub row_even: Rgb,
    pub row_odd: Rgb,
    pub total_fill: Rgb,
    pub total_text: Rgb,
}

impl Palette {
    pub const PROFESSIONAL: Palette = Palette {
        primary: Rgb(30, 64, 175),      // #1E40AF
        text: Rgb(31, 41, 55),          // #1F2937
        muted: Rgb(107, 114, 128),      // #6B7280
        border: Rgb(209, 213, 219),     // #D1D5DB
        box_fill: Rgb(243, 244, 246),   // #F3F4F6
        header_fill: Rgb(30, 64, 175),  // #1E40AF
        header_text: Rgb::WHITE,
        row_even: Rgb::WHITE,
        row_odd: Rgb(249, 250, 251),    // #F9FAFB
        total_fill: Rgb(30, 64, 175),   // #1E40AF
        total_text: Rgb::WHITE,
    };

    pub const PLAIN: Palette = Palette {
        primary: Rgb::BLACK,
        text: Rgb::BLACK,
        muted: Rgb(85, 85, 85),
        border: Rgb::BLACK,
        box_fill: Rgb::WHITE,
        header_fill: Rgb::WHITE,
        header_text: Rgb::BLACK,
        row_even: Rgb::WHITE,
        row_odd: Rgb::WHITE,
        total_fill: Rgb::WHITE,
        total_text: Rgb::BLACK,
    };

    /// Zebra fill for body row `index`.
    pub fn row_fill(&self, index: usize) -> Rgb {
        if index % 2 == 0 {
            self.row_even
        } else {
            self.row_odd
        }
    }
}

pub fn quote_status_style(status: QuoteStatus) -> (&'static str, Rgb) {
    match status {
        QuoteStatus::Pending => ("PENDING", Rgb(217, 119, 6)),
        QuoteStatus::Approved => ("APPROVED", Rgb(5, 150, 105)),
        QuoteStatus::Rejected => ("REJECTED", Rgb(220, 38, 38)),
    }
}

pub fn work_order_status_style(status: WorkOrderStatus) -> (&'static str, Rgb) {
    match status {
        WorkOrderStatus::Pending => ("PENDING", Rgb(217, 119, 6)),
        WorkOrderStatus::InProgress => ("IN PROGRESS", Rgb(37, 99, 235)),
        WorkOrderStatus::Completed => ("COMPLETED", Rgb(5, 150, 105)),
        WorkOrderStatus::Cancelled => ("CANCELLED", Rgb(220, 38, 38)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Plain".parse::<Theme>().unwrap(), Theme::Plain);
        assert_eq!(" styled ".parse::<Theme>().unwrap(), Theme::Professional);
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn test_zebra_alternates_by_parity() {
        let palette = Theme::Professional.palette();
        assert_eq!(palette.row_fill(0), palette.row_fill(2));
        assert_ne!(palette.row_fill(0), palette.row_fill(1));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(work_order_status_style(WorkOrderStatus::InProgress).0, "IN PROGRESS");
        assert_eq!(quote_status_style(QuoteStatus::Approved).0, "APPROVED");
    }
}
