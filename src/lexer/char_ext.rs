//! Useful character extensions.
use unicode_general_category::{get_general_category, GeneralCategory};

pub trait CharExt {
    /// Whether the character is in one of the Unicode letter categories
    /// (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`), in any script.
    fn is_unicode_letter(&self) -> bool;
}
impl CharExt for char {
    fn is_unicode_letter(&self) -> bool {
        matches!(
            get_general_category(*self),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
    }
}
