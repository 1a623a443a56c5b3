// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Digit masking for form input fields.
//!
//! This module implements the punctuation logic shared by the CPF, CNPJ and
//! phone number fields. A [`MaskProfile`] is an ordered table mapping an
//! exact digit count to a declarative template, where `#` marks a digit
//! position and every other character is a literal. A field's text is always
//! rebuilt from its digits-only projection, so partial entries produce
//! partial punctuation and earlier punctuation is never corrupted by later
//! keystrokes.
//!
//! The masking pass itself is a pure function over text and caret bounds,
//! with no terminal coupling; scheduling and key handling live in the form
//! components.

pub(crate) mod debounce;
pub(crate) mod profiles;

/// A single entry in a profile's pattern table.
pub(crate) struct MaskRule {
    pub(crate) digits: usize,
    pub(crate) template: &'static str,
}

/// An ordered table of digit-count rules for one family of field.
///
/// Rules are ordered by ascending digit count so that shorter partial
/// patterns apply first and are superseded as digits accumulate.
pub(crate) struct MaskProfile {
    pub(crate) name: &'static str,
    rules: &'static [MaskRule],
}

impl MaskProfile {
    pub(crate) const fn new(name: &'static str, rules: &'static [MaskRule]) -> Self {
        Self { name, rules }
    }

    // Exact match on digit count, there is no nearest-rule fallback.
    fn template_for(&self, digit_count: usize) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.digits == digit_count)
            .map(|rule| rule.template)
    }

    /// Punctuates a digits-only string according to the profile's table.
    ///
    /// Digit counts with no matching rule pass through unpunctuated; this is
    /// the permissive policy for incomplete or overfull entries, not an
    /// error.
    pub(crate) fn apply(&self, digits: &str) -> String {
        let Some(template) = self.template_for(digits.chars().count()) else {
            return digits.to_string();
        };

        let mut source = digits.chars();
        let mut out = String::with_capacity(template.len());
        for c in template.chars() {
            if c == '#' {
                if let Some(digit) = source.next() {
                    out.push(digit);
                }
            } else {
                out.push(c);
            }
        }

        out
    }
}

/// The digits-only projection of a field's text.
pub(crate) fn strip_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// The outcome of a masking pass: the rewritten text and the shifted caret
/// selection bounds.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Rewrite {
    pub(crate) text: String,
    pub(crate) selection: (usize, usize),
}

/// Runs one masking pass over a field's text.
///
/// The text is reduced to its digits and re-punctuated from scratch. Both
/// caret bounds shift by exactly the length delta of the rewrite, clamped to
/// the new text, so the caret stays adjacent to the digit the user was last
/// editing.
pub(crate) fn rewrite(profile: &MaskProfile, old_text: &str, selection: (usize, usize)) -> Rewrite {
    let digits = strip_digits(old_text);
    let text = profile.apply(&digits);

    let old_len = old_text.chars().count() as isize;
    let new_len = text.chars().count() as isize;
    let diff = new_len - old_len;

    let shift = |bound: usize| (bound as isize + diff).clamp(0, new_len) as usize;
    let selection = (shift(selection.0), shift(selection.1));

    Rewrite { text, selection }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_RULES: &[MaskRule] = &[
        MaskRule { digits: 4, template: "##-##" },
        MaskRule { digits: 6, template: "##.##/##" },
    ];

    const TEST_PROFILE: MaskProfile = MaskProfile::new("test", TEST_RULES);

    #[test]
    fn applies_matching_template() {
        assert_eq!(TEST_PROFILE.apply("1234"), "12-34");
        assert_eq!(TEST_PROFILE.apply("123456"), "12.34/56");
    }

    #[test]
    fn unmatched_digit_count_passes_through() {
        assert_eq!(TEST_PROFILE.apply(""), "");
        assert_eq!(TEST_PROFILE.apply("123"), "123");
        assert_eq!(TEST_PROFILE.apply("12345"), "12345");
        assert_eq!(TEST_PROFILE.apply("1234567"), "1234567");
    }

    #[test]
    fn strip_digits_removes_punctuation_and_letters() {
        assert_eq!(strip_digits("12.34/56"), "123456");
        assert_eq!(strip_digits("+55 (11) 98765-4321"), "5511987654321");
        assert_eq!(strip_digits("abc"), "");
        assert_eq!(strip_digits(""), "");
    }

    #[test]
    fn apply_round_trips_through_strip() {
        for rule in TEST_RULES {
            let digits: String = "123456789012345678".chars().take(rule.digits).collect();
            let masked = TEST_PROFILE.apply(&digits);
            assert_eq!(strip_digits(&masked), digits);
        }
    }

    #[test]
    fn rewrite_shifts_both_caret_bounds_by_length_delta() {
        // "1234" (4 chars) becomes "12-34" (5 chars), diff = +1.
        let result = rewrite(&TEST_PROFILE, "1234", (2, 3));
        assert_eq!(result.text, "12-34");
        assert_eq!(result.selection, (3, 4));
    }

    #[test]
    fn rewrite_shifts_caret_backwards_when_text_shrinks() {
        // Re-punctuating "1-2-3-4" (7 chars) yields "12-34" (5 chars),
        // diff = -2.
        let result = rewrite(&TEST_PROFILE, "1-2-3-4", (7, 7));
        assert_eq!(result.text, "12-34");
        assert_eq!(result.selection, (5, 5));
    }

    #[test]
    fn rewrite_clamps_caret_to_text_bounds() {
        // A large negative delta cannot push the caret before the start.
        let result = rewrite(&TEST_PROFILE, "--------1234", (0, 1));
        assert_eq!(result.text, "12-34");
        assert_eq!(result.selection, (0, 0));
    }

    #[test]
    fn rewrite_of_unmatched_count_is_digit_projection() {
        let result = rewrite(&TEST_PROFILE, "1-2-3", (5, 5));
        assert_eq!(result.text, "123");
        assert_eq!(result.selection, (3, 3));
    }

    #[test]
    fn rewrite_is_stable_on_already_masked_text() {
        let once = rewrite(&TEST_PROFILE, "1234", (4, 4));
        let twice = rewrite(&TEST_PROFILE, &once.text, once.selection);
        assert_eq!(once, twice);
    }
}
