//! Parsing of single-line answers typed at the shell's prompts.
//!
//! Every parser trims surrounding whitespace and returns `None` for input
//! the prompt should reject and ask again.
use crate::composite::ReconcileMode;
use crate::tone::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Grayscale,
    EdgeDetect,
    Merge,
    Brightness,
    Purple,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
}

pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "0" => Some(MenuChoice::Exit),
        "1" => Some(MenuChoice::Grayscale),
        "2" => Some(MenuChoice::EdgeDetect),
        "3" => Some(MenuChoice::Merge),
        "4" => Some(MenuChoice::Brightness),
        "5" => Some(MenuChoice::Purple),
        _ => None,
    }
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

pub fn parse_save_choice(input: &str) -> Option<SaveChoice> {
    match input.trim().to_lowercase().as_str() {
        "save" => Some(SaveChoice::Save),
        "discard" => Some(SaveChoice::Discard),
        _ => None,
    }
}

pub fn parse_direction(input: &str) -> Option<Direction> {
    match input.trim() {
        "1" => Some(Direction::Brighten),
        "2" => Some(Direction::Darken),
        _ => None,
    }
}

pub fn parse_merge_mode(input: &str) -> Option<ReconcileMode> {
    match input.trim() {
        "1" => Some(ReconcileMode::GrowToMax),
        "2" => Some(ReconcileMode::ShrinkToMin),
        _ => None,
    }
}

/// Whole number typed for a percent; range checking is left to
/// [`Adjustment::new`](crate::tone::Adjustment::new).
pub fn parse_percent(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}
