use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

/// Grades a password: at least 8 characters with upper, lower, digit
/// and special characters is Strong; 8+ with one letter class and one
/// of digit/special is Moderate; anything else is Weak.
pub fn check_password_strength(password: &str) -> PasswordStrength {
    let long_enough = password.len() >= 8;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c));

    if long_enough && has_upper && has_lower && has_digit && has_special {
        PasswordStrength::Strong
    } else if long_enough && (has_upper || has_lower) && (has_digit || has_special) {
        PasswordStrength::Moderate
    } else {
        PasswordStrength::Weak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_character_classes_is_strong() {
        assert_eq!(
            check_password_strength("Abcdef1!"),
            PasswordStrength::Strong
        );
    }

    #[test]
    fn letters_and_digits_is_moderate() {
        assert_eq!(
            check_password_strength("abcdefg1"),
            PasswordStrength::Moderate
        );
    }

    #[test]
    fn short_or_plain_is_weak() {
        assert_eq!(check_password_strength("Ab1!"), PasswordStrength::Weak);
        assert_eq!(check_password_strength("abcdefgh"), PasswordStrength::Weak);
    }
}
