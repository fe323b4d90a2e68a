//! The Rekan Curhat landing page.

use super::styles::{FORM_SCRIPT, PAGE_CSS};
use crate::support::CurhatSession;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SUBMIT_LABEL: &str = "Kirim Curhatan";
pub const LOADING_LABEL: &str = "Sabar ya, aku sedang menyimak...";

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "\u{1F6E1}\u{FE0F}",
        "100% Anonim",
        "Identitasmu tetap menjadi rahasiamu. Kami tidak menyimpan data pribadi yang bisa melacakmu.",
    ),
    (
        "\u{1F319}",
        "Tersedia 24/7",
        "Butuh teman bicara di jam 3 pagi? Rekan Curhat selalu ada di sini untuk mendengarkanmu.",
    ),
    (
        "\u{1F54A}\u{FE0F}",
        "Bebas Penghakiman",
        "Curhat apa saja tanpa takut dinilai. Kami di sini untuk memvalidasi dan mendukungmu.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Pilih Nama Samaran",
        "Gunakan nama apa pun yang membuatmu merasa nyaman dan bebas.",
    ),
    (
        "Tuliskan Segalanya",
        "Tuangkan beban, kebahagiaan, atau kecemasanmu tanpa batas kata.",
    ),
    (
        "Dapatkan Respon Empati",
        "Teknologi AI kami akan memberikan respon hangat yang mendengarkan perasaanmu.",
    ),
];

const NATURE_VIDEO: &str = "https://assets.mixkit.co/videos/4132/4132-720.mp4";
const NATURE_POSTER: &str = "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?auto=format&fit=crop&q=80&w=800";
const RAIN_AUDIO: &str = "https://assets.mixkit.co/active_storage/sfx/2473/2473-preview.mp3";

/// Render the full page. The form is pre-filled from `session` and the
/// reply panel appears once the session holds a response.
pub fn landing_page(session: &CurhatSession) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Rekan Curhat - Your Safe Space" }
                meta name="description" content="Platform anonim untuk mencurahkan isi hati.";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (site_header())
                main {
                    (hero())
                    (about())
                    (curhat_form(session))
                    (media())
                    (disclaimer())
                }
                (site_footer())
                script { (PreEscaped(FORM_SCRIPT)) }
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header {
            nav class="container flex-nav" {
                a href="/" class="logo" { "Rekan" span class="title-accent" { "Curhat" } }
                div class="nav-links" {
                    a href="#about" { "Tentang" }
                    a href="#curhat" { "Curhat" }
                    a href="#media" { "Relaksasi" }
                }
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section id="hero-section" {
            div class="container" {
                span class="hero-kicker" { "Your Safe Space" }
                h1 {
                    "Lepaskan beban pikiranmu. " br;
                    span class="title-accent" { "Kami mendengarkan." }
                }
                p class="hero-lead" {
                    "Platform anonim untuk mencurahkan isi hati. Tidak perlu identitas, cukup kejujuran dari dalam hatimu."
                }
                a href="#curhat" class="btn-primary" { "Mulai Cerita Sekarang" }
            }
        }
    }
}

fn about() -> Markup {
    html! {
        section id="about" class="section-padding" {
            div class="container" {
                div class="section-intro" {
                    h2 { "Kenapa Kamu Membutuhkan Ini?" }
                    p { "Kadang, kata-kata yang terucap adalah langkah pertama menuju ketenangan." }
                }
                div class="grid-3" {
                    @for (icon, title, body) in FEATURES {
                        div class="feature-card" {
                            span class="feature-icon" { (icon) }
                            h3 { (title) }
                            p { (body) }
                        }
                    }
                }
                div class="how-it-works" {
                    h3 { "Cara Kerja Rekan Curhat" }
                    @for (index, (title, body)) in STEPS.iter().enumerate() {
                        div class="step" {
                            div class="step-num" { (index + 1) }
                            div {
                                h4 { (title) }
                                p { (body) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn curhat_form(session: &CurhatSession) -> Markup {
    html! {
        section id="curhat" class="section-padding" {
            div class="container" {
                div class="card-main" {
                    h2 { "Tuangkan Isi Hatimu" }
                    p class="card-subtitle" { "Tarik napas dalam, dan mulailah menulis..." }

                    form class="vent-form" method="post" action="/curhat#curhat" {
                        label for="pseudonym" { "Nama Samaran" }
                        input type="text" id="pseudonym" name="pseudonym"
                            placeholder="Contoh: Senja Di Desa" value=(session.pseudonym);

                        label for="story" { "Apa yang sedang kamu pikirkan?" }
                        textarea id="story" name="story" required
                            placeholder="Ceritakan apa saja... aku mendengarkan." { (session.story) }

                        div class="form-actions" {
                            button type="submit" class="btn-primary" disabled[session.loading]
                                data-loading-label=(LOADING_LABEL) {
                                @if session.loading { (LOADING_LABEL) } @else { (SUBMIT_LABEL) }
                            }
                        }
                    }

                    @if let Some(response) = &session.response {
                        div class="ai-response" {
                            p class="ai-response-label" { "PESAN UNTUKMU:" }
                            p class="ai-response-text" { "\"" (response) "\"" }
                        }
                    }
                }
            }
        }
    }
}

fn media() -> Markup {
    html! {
        section id="media" class="section-padding" {
            div class="container" {
                div class="section-intro" {
                    h2 { "Relaksasi Sejenak" }
                    p { "Ambil waktu untuk dirimu sendiri dengan konten yang menenangkan." }
                }
                div class="media-grid" {
                    div class="media-item" {
                        h3 { "Visual Alam" }
                        video controls poster=(NATURE_POSTER) {
                            source src=(NATURE_VIDEO) type="video/mp4";
                        }
                        p class="media-caption" { "Pemandangan gunung yang damai" }
                    }
                    div class="media-item" {
                        h3 { "Suara Hujan & Burung" }
                        audio controls {
                            source src=(RAIN_AUDIO) type="audio/mpeg";
                        }
                        p class="media-caption" { "Suasana hutan di pagi hari" }
                    }
                }
            }
        }
    }
}

fn disclaimer() -> Markup {
    html! {
        section class="disclaimer" {
            div class="container" {
                p {
                    strong { "PENTING:" }
                    " Rekan Curhat adalah platform pendukung emosional yang ditenagai oleh AI. Layanan ini "
                    strong { "BUKAN" }
                    " pengganti bantuan medis profesional, psikolog, atau psikiater. Jika Anda berada dalam bahaya atau memikirkan untuk menyakiti diri sendiri, segera hubungi layanan darurat atau hotline pencegahan bunuh diri di wilayah Anda."
                }
            }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer {
            div class="container" {
                p class="footer-brand" { "RekanCurhat" }
                p class="footer-note" {
                    "\u{00A9} 2024 Rekan Curhat. Berani bercerita adalah awal dari pemulihan."
                }
                div class="footer-links" {
                    a href="#" { "Twitter" }
                    a href="#" { "Instagram" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_has_no_reply_panel() {
        let page = landing_page(&CurhatSession::default()).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Tuangkan Isi Hatimu"));
        assert!(page.contains(SUBMIT_LABEL));
        assert!(!page.contains("PESAN UNTUKMU:"));
        assert!(page.contains("BUKAN"));
        assert!(!page.contains(r#"class="btn-primary" disabled"#));
    }

    #[test]
    fn test_reply_panel_shows_response() {
        let mut session = CurhatSession::new("Senja", "hari ini berat");
        session.response = Some("Kamu tidak sendirian.".to_string());

        let page = landing_page(&session).into_string();

        assert!(page.contains("PESAN UNTUKMU:"));
        assert!(page.contains("Kamu tidak sendirian."));
        assert!(page.contains(r#"value="Senja""#));
        assert!(page.contains("hari ini berat</textarea>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut session = CurhatSession::new("<b>x</b>", "<script>alert(1)</script>");
        session.response = Some("<img src=x>".to_string());

        let page = landing_page(&session).into_string();

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("&lt;img src=x&gt;"));
        assert!(!page.contains("<b>x</b>"));
    }

    #[test]
    fn test_loading_session_disables_button() {
        let mut session = CurhatSession::new("", "menunggu");
        session.loading = true;

        let page = landing_page(&session).into_string();

        assert!(page.contains(r#"class="btn-primary" disabled"#));
        assert!(page.contains(&format!(">{}</button>", LOADING_LABEL)));
    }
}
