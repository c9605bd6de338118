// src/export/shaping.rs
//
// Arabic contextual shaping through Unicode presentation forms (FE70-FEFF).
// Each letter is swapped for its isolated, final, initial or medial form
// depending on whether its neighbours join to it. Lam followed by alef
// becomes a single ligature.

use std::borrow::Cow;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Joining {
    /// Hamza: never joins.
    None,
    /// Joins only to the letter before it.
    Right,
    /// Joins on both sides.
    Dual,
    /// Tatweel: joins both sides but has no forms of its own.
    Causing,
}

/// Joining class and first presentation form (the isolated one).
/// Forms follow in the order isolated, final, initial, medial.
fn letter(ch: char) -> Option<(Joining, u32)> {
    use Joining::*;
    let entry = match ch {
        '\u{0621}' => (None, 0xFE80),
        '\u{0622}' => (Right, 0xFE81),
        '\u{0623}' => (Right, 0xFE83),
        '\u{0624}' => (Right, 0xFE85),
        '\u{0625}' => (Right, 0xFE87),
        '\u{0626}' => (Dual, 0xFE89),
        '\u{0627}' => (Right, 0xFE8D),
        '\u{0628}' => (Dual, 0xFE8F),
        '\u{0629}' => (Right, 0xFE93),
        '\u{062A}' => (Dual, 0xFE95),
        '\u{062B}' => (Dual, 0xFE99),
        '\u{062C}' => (Dual, 0xFE9D),
        '\u{062D}' => (Dual, 0xFEA1),
        '\u{062E}' => (Dual, 0xFEA5),
        '\u{062F}' => (Right, 0xFEA9),
        '\u{0630}' => (Right, 0xFEAB),
        '\u{0631}' => (Right, 0xFEAD),
        '\u{0632}' => (Right, 0xFEAF),
        '\u{0633}' => (Dual, 0xFEB1),
        '\u{0634}' => (Dual, 0xFEB5),
        '\u{0635}' => (Dual, 0xFEB9),
        '\u{0636}' => (Dual, 0xFEBD),
        '\u{0637}' => (Dual, 0xFEC1),
        '\u{0638}' => (Dual, 0xFEC5),
        '\u{0639}' => (Dual, 0xFEC9),
        '\u{063A}' => (Dual, 0xFECD),
        '\u{0640}' => (Causing, 0x0640),
        '\u{0641}' => (Dual, 0xFED1),
        '\u{0642}' => (Dual, 0xFED5),
        '\u{0643}' => (Dual, 0xFED9),
        '\u{0644}' => (Dual, 0xFEDD),
        '\u{0645}' => (Dual, 0xFEE1),
        '\u{0646}' => (Dual, 0xFEE5),
        '\u{0647}' => (Dual, 0xFEE9),
        '\u{0648}' => (Right, 0xFEED),
        '\u{0649}' => (Right, 0xFEEF),
        '\u{064A}' => (Dual, 0xFEF1),
        _ => return Option::None,
    };
    Some(entry)
}

/// Harakat and other marks sit on a letter without affecting joining.
fn is_transparent(ch: char) -> bool {
    matches!(ch, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

const LAM: char = '\u{0644}';

/// Isolated form of the lam-alef ligature for a given alef.
fn lam_alef(alef: char) -> Option<u32> {
    match alef {
        '\u{0622}' => Some(0xFEF5),
        '\u{0623}' => Some(0xFEF7),
        '\u{0625}' => Some(0xFEF9),
        '\u{0627}' => Some(0xFEFB),
        _ => None,
    }
}

fn joins_forward(joining: Joining) -> bool {
    matches!(joining, Joining::Dual | Joining::Causing)
}

fn joins_backward(joining: Joining) -> bool {
    matches!(joining, Joining::Right | Joining::Dual | Joining::Causing)
}

fn form(base: u32, offset: u32) -> char {
    char::from_u32(base + offset).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Returns `text` with Arabic letters in their contextual forms, still in
/// logical order. Text without Arabic letters is borrowed unchanged.
pub fn shape_arabic(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| letter(ch).is_some()) {
        return Cow::Borrowed(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let neighbour = |from: usize, step: isize| -> Option<Joining> {
        let mut i = from as isize + step;
        while i >= 0 && (i as usize) < chars.len() {
            let ch = chars[i as usize];
            if !is_transparent(ch) {
                return letter(ch).map(|(joining, _)| joining);
            }
            i += step;
        }
        None
    };

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let Some((joining, base)) = letter(ch) else {
            out.push(ch);
            i += 1;
            continue;
        };

        let after_joining = neighbour(i, -1).is_some_and(joins_forward);

        if ch == LAM {
            if let Some(ligature) = chars.get(i + 1).copied().and_then(lam_alef) {
                out.push(form(ligature, u32::from(after_joining)));
                i += 2;
                continue;
            }
        }

        let before_joining = neighbour(i, 1).is_some_and(joins_backward);
        let shaped = match joining {
            Joining::None | Joining::Causing => ch,
            Joining::Right => form(base, u32::from(after_joining)),
            Joining::Dual => match (after_joining, before_joining) {
                (false, false) => form(base, 0),
                (true, false) => form(base, 1),
                (false, true) => form(base, 2),
                (true, true) => form(base, 3),
            },
        };
        out.push(shaped);
        i += 1;
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_is_borrowed() {
        assert!(matches!(shape_arabic("480.00 SAR"), Cow::Borrowed(_)));
    }

    #[test]
    fn dual_joining_letters_take_positional_forms() {
        // beh beh beh: initial, medial, final
        assert_eq!(
            shape_arabic("\u{0628}\u{0628}\u{0628}"),
            "\u{FE91}\u{FE92}\u{FE90}"
        );
        assert_eq!(shape_arabic("\u{0628}"), "\u{FE8F}");
    }

    #[test]
    fn right_joining_letter_breaks_the_chain() {
        // "دبي": dal isolated, beh initial, yeh final
        assert_eq!(shape_arabic("دبي"), "\u{FEA9}\u{FE91}\u{FEF2}");
    }

    #[test]
    fn lam_alef_becomes_a_ligature() {
        // "الحجز": alef isolated, lam initial, hah medial, jeem medial, zain final
        assert_eq!(shape_arabic("الحجز"), "\u{FE8D}\u{FEDF}\u{FEA4}\u{FEA0}\u{FEB0}");
        // "كلا": kaf initial, then the final lam-alef ligature
        assert_eq!(shape_arabic("كلا"), "\u{FEDB}\u{FEFC}");
        assert_eq!(shape_arabic("لا"), "\u{FEFB}");
    }

    #[test]
    fn marks_do_not_break_joining() {
        // beh + fatha + beh stays joined across the mark.
        assert_eq!(shape_arabic("\u{0628}\u{064E}\u{0628}"), "\u{FE91}\u{064E}\u{FE90}");
    }

    #[test]
    fn words_are_shaped_independently() {
        let shaped = shape_arabic("تم تأكيد");
        let words: Vec<&str> = shaped.split(' ').collect();
        // teh initial, meem final
        assert_eq!(words[0], "\u{FE97}\u{FEE2}");
        // teh initial, alef-hamza final, kaf initial, yeh medial, dal final
        assert_eq!(words[1], "\u{FE97}\u{FE84}\u{FEDB}\u{FEF4}\u{FEAA}");
    }
}
