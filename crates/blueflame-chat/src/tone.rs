//! Tone decoration applied after reply generation.

use blueflame_core::types::Mode;

const STUDENT_HEADER: &str = "Student Mode:\n- Simple explanation\n- Key points\n- Short example\n\n";
const PROFESSIONAL_HEADER: &str = "Professional Mode:\n- Concise\n- Actionable\n- Business tone\n\n";
const FUN_HEADER: &str = "Fun Mode 🎉:\n";
const FUN_SIGN_OFF: &str = "\n(peppered with a friendly, upbeat vibe)";

/// Decorate generated text for the tone modes. Identity for every other mode.
pub fn wrap(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Student => format!("{}{}", STUDENT_HEADER, text),
        Mode::Professional => format!("{}{}", PROFESSIONAL_HEADER, text),
        Mode::Fun => format!("{}{}{}", FUN_HEADER, text, FUN_SIGN_OFF),
        Mode::Qa | Mode::Writing | Mode::Translation | Mode::Summary => text.to_string(),
    }
}
