//! Color theme for the TUI.
//!
//! Dark and light themes built on a slate palette (Tailwind CSS colors), with
//! the catalogue's green as the accent for the current page.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Theme variant (dark or light).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Current theme variant.
    pub variant: ThemeVariant,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // Interactive elements
    pub selected: Style,

    // Status colors
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Style,
    pub title: Style,
    pub help_key: Style,
    pub help_desc: Style,

    // Detail card
    pub card_heading: Style,
    pub card_label: Style,
    pub card_value: Style,

    // Pagination bar
    pub page_number: Style,
    pub page_current: Style,
    pub page_disabled: Style,
    pub page_arrow: Style,
    pub ellipsis: Style,

    // Loading indicator
    pub spinner: Style,

    // Header/Footer
    pub header: Style,
    pub footer: Style,

    // Command palette
    pub command_prompt: Style,
    pub command_input: Style,
    pub command_cursor: Style,
}

/// The catalogue's accent green (#20a258).
const ACCENT: Color = Color::Rgb(32, 162, 88);

impl Theme {
    /// Dark theme using a slate-based palette.
    pub fn dark() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_300 = Color::Rgb(203, 213, 225);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        let blue_400 = Color::Rgb(96, 165, 250);
        let yellow_500 = Color::Rgb(234, 179, 8);
        let red_500 = Color::Rgb(239, 68, 68);

        Self {
            variant: ThemeVariant::Dark,
            background: slate_900,
            foreground: slate_100,
            muted: slate_500,

            selected: Style::new().bg(slate_700).fg(slate_50).add_modifier(Modifier::BOLD),

            warning: yellow_500,
            error: red_500,
            info: blue_400,

            border: Style::new().fg(slate_600),
            title: Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_400),

            card_heading: Style::new().fg(slate_50).add_modifier(Modifier::BOLD),
            card_label: Style::new().fg(slate_400),
            card_value: Style::new().fg(slate_300),

            page_number: Style::new().fg(slate_300),
            page_current: Style::new().bg(ACCENT).fg(slate_50).add_modifier(Modifier::BOLD),
            page_disabled: Style::new().fg(slate_600),
            page_arrow: Style::new().fg(slate_100).add_modifier(Modifier::BOLD),
            ellipsis: Style::new().fg(slate_500),

            spinner: Style::new().fg(ACCENT),

            header: Style::new().bg(slate_800).fg(slate_100),
            footer: Style::new().bg(slate_800).fg(slate_400),

            command_prompt: Style::new().fg(blue_400).add_modifier(Modifier::BOLD),
            command_input: Style::new().fg(slate_100),
            command_cursor: Style::new().add_modifier(Modifier::REVERSED),
        }
    }

    /// Light theme using a slate-based palette.
    pub fn light() -> Self {
        let slate_50 = Color::Rgb(248, 250, 252);
        let slate_100 = Color::Rgb(241, 245, 249);
        let slate_200 = Color::Rgb(226, 232, 240);
        let slate_400 = Color::Rgb(148, 163, 184);
        let slate_500 = Color::Rgb(100, 116, 139);
        let slate_600 = Color::Rgb(71, 85, 105);
        let slate_700 = Color::Rgb(51, 65, 85);
        let slate_800 = Color::Rgb(30, 41, 59);
        let slate_900 = Color::Rgb(15, 23, 42);

        let blue_700 = Color::Rgb(29, 78, 216);
        let yellow_600 = Color::Rgb(202, 138, 4);
        let red_600 = Color::Rgb(220, 38, 38);

        Self {
            variant: ThemeVariant::Light,
            background: slate_50,
            foreground: slate_900,
            muted: slate_500,

            selected: Style::new().bg(slate_200).fg(slate_900).add_modifier(Modifier::BOLD),

            warning: yellow_600,
            error: red_600,
            info: blue_700,

            border: Style::new().fg(slate_400),
            title: Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
            help_key: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            help_desc: Style::new().fg(slate_600),

            card_heading: Style::new().fg(slate_900).add_modifier(Modifier::BOLD),
            card_label: Style::new().fg(slate_600),
            card_value: Style::new().fg(slate_800),

            page_number: Style::new().fg(slate_700),
            page_current: Style::new().bg(ACCENT).fg(slate_50).add_modifier(Modifier::BOLD),
            page_disabled: Style::new().fg(slate_400),
            page_arrow: Style::new().fg(slate_900).add_modifier(Modifier::BOLD),
            ellipsis: Style::new().fg(slate_500),

            spinner: Style::new().fg(ACCENT),

            header: Style::new().bg(slate_100).fg(slate_800),
            footer: Style::new().bg(slate_100).fg(slate_600),

            command_prompt: Style::new().fg(blue_700).add_modifier(Modifier::BOLD),
            command_input: Style::new().fg(slate_900),
            command_cursor: Style::new().add_modifier(Modifier::REVERSED),
        }
    }

    /// Create theme from variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Toggle between dark and light themes.
    pub fn toggle(&self) -> Self {
        match self.variant {
            ThemeVariant::Dark => Self::light(),
            ThemeVariant::Light => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
