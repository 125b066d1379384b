//! Coarse password strength classification.

use std::fmt;

use console::{Color, style};

use crate::generators::is_symbol;

pub const MAX_SCORE: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorHint {
    Red,
    Orange,
    Green,
}

impl ColorHint {
    fn terminal_color(self) -> Color {
        match self {
            ColorHint::Red => Color::Red,
            // closest ANSI-256 entry to orange
            ColorHint::Orange => Color::Color256(208),
            ColorHint::Green => Color::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub label: Strength,
    pub color: ColorHint,
    pub score: u32,
}

impl StrengthResult {
    /// Renders the score as a bar `width` cells wide, filled in proportion to `MAX_SCORE`.
    pub fn bar(&self, width: usize) -> String {
        let filled = (width * self.score as usize) / MAX_SCORE as usize;
        let color = self.color.terminal_color();

        format!(
            "{}{}",
            style("█".repeat(filled)).fg(color),
            style("░".repeat(width - filled)).dim()
        )
    }

    pub fn styled_label(&self) -> String {
        style(self.label).fg(self.color.terminal_color()).bold().to_string()
    }
}

/// Classifies `password` by length and the number of character classes it uses.
pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count();

    let class_count = [
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_uppercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_symbol),
    ]
    .iter()
    .filter(|&&present| present)
    .count();

    if length >= 12 && class_count == 4 {
        StrengthResult { label: Strength::Strong, color: ColorHint::Green, score: 300 }
    } else if length >= 8 && class_count >= 3 {
        StrengthResult { label: Strength::Moderate, color: ColorHint::Orange, score: 200 }
    } else {
        StrengthResult { label: Strength::Weak, color: ColorHint::Red, score: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_classes_long_is_strong() {
        let result = score("abcdefgh12AB!@");

        assert_eq!(result.label, Strength::Strong);
        assert_eq!(result.color, ColorHint::Green);
        assert_eq!(result.score, 300);
    }

    #[test]
    fn two_classes_is_weak_even_at_eight() {
        assert_eq!(score("abcdefg1").label, Strength::Weak);
    }

    #[test]
    fn three_classes_at_ten_is_moderate() {
        let result = score("abcdefgh1A");

        assert_eq!(result.label, Strength::Moderate);
        assert_eq!(result.color, ColorHint::Orange);
        assert_eq!(result.score, 200);
    }

    #[test]
    fn four_classes_below_twelve_is_moderate() {
        assert_eq!(score("aB3!aB3!aB3").label, Strength::Moderate);
    }

    #[test]
    fn three_classes_below_eight_is_weak() {
        assert_eq!(score("aB3aB3a").label, Strength::Weak);
    }

    #[test]
    fn three_classes_long_is_not_strong() {
        assert_eq!(score("abcdefghijklmnopQRST1234").label, Strength::Moderate);
    }

    #[test]
    fn empty_is_weak() {
        let result = score("");

        assert_eq!(result.label, Strength::Weak);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 11 chars, 14 bytes: stays below the strong threshold
        assert_eq!(score("aB3!éééaB3!").label, Strength::Moderate);
    }

    #[test]
    fn numeric_but_not_digit_does_not_count() {
        assert_eq!(score("abcdefgh½A").label, Strength::Weak);
        assert_eq!(score("abcdefghⅫA").label, Strength::Weak);
        assert_eq!(score("abcdefgh〇A").label, Strength::Weak);
    }

    #[test]
    fn space_is_not_a_symbol() {
        assert_eq!(score("abcdefgh ABC 123").label, Strength::Moderate);
    }

    #[test]
    fn score_is_deterministic() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            assert_eq!(score(pwd), score(pwd));
        }
    }

    #[test]
    fn bar_fills_in_proportion() {
        console::set_colors_enabled(false);

        assert_eq!(score("").bar(30), format!("{}{}", "█".repeat(10), "░".repeat(20)));
        assert_eq!(score("abcdefgh12AB!@").bar(30), "█".repeat(30));
    }

    #[test]
    fn labels_display() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Strong.to_string(), "Strong");
    }
}
