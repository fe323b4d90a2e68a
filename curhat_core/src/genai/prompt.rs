//! Prompt composition for the listener persona

/// Label used when the visitor leaves the pseudonym blank.
pub const DEFAULT_PSEUDONYM: &str = "Anonim";

/// Fixed persona sent as the system instruction on every request.
pub const SYSTEM_INSTRUCTION: &str = "Anda adalah 'Rekan Curhat', seorang pendengar yang sangat empatik, hangat, dan menenangkan. Berikan respon singkat yang memvalidasi perasaan pengguna. Ingatkan mereka bahwa ini bukan layanan medis profesional, namun Anda di sini untuk mendengarkan. Gunakan bahasa Indonesia yang santai tapi sopan. Fokus pada dukungan emosional.";

/// The label shown to the model. Only an empty pseudonym is replaced;
/// anything else, whitespace included, is passed through as typed.
pub fn display_pseudonym(pseudonym: &str) -> &str {
    if pseudonym.is_empty() {
        DEFAULT_PSEUDONYM
    } else {
        pseudonym
    }
}

/// Builds the user turn. The message is embedded exactly as typed.
pub fn compose_prompt(pseudonym: &str, message: &str) -> String {
    format!(
        "User (Pseudonym: {}) says: {}",
        display_pseudonym(pseudonym),
        message
    )
}
