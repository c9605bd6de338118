use crate::domain::Language;
use maud::{html, Markup, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, "Noto Naskh Arabic", sans-serif; margin: 0; color: #212529; background: #f8f9fa; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #0f4c5c; color: #fff; }
header a { color: #fff; text-decoration: none; margin-inline-start: 1rem; }
main { max-width: 1080px; margin: 1.5rem auto; padding: 0 1rem; }
.card { background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.08); padding: 1rem 1.25rem; margin-bottom: 1rem; }
.muted { color: #868e96; }
.search { display: grid; grid-template-columns: 260px 1fr; gap: 1.5rem; }
.hotel { display: flex; justify-content: space-between; gap: 1rem; }
.price { font-size: 1.25rem; font-weight: 600; color: #0f4c5c; }
"#;

/// `current_page` may carry a query string; the language toggle keeps it.
pub fn desktop_layout(title: &str, language: Language, current_page: &str, content: Markup) -> Markup {
    let sep = if current_page.contains('?') { '&' } else { '?' };

    html! {
        (DOCTYPE)
        html lang=(language.code()) dir=(language.direction().as_html()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
                header {
                    h3 { (language.pick("Makkah Stays", "إقامات مكة")) }
                    nav {
                        a href=(format!("/hotels?lang={}", language.code())) {
                            (language.pick("Hotels", "الفنادق"))
                        }
                        @for other in Language::ALL.into_iter().filter(|l| *l != language) {
                            a href=(format!("{current_page}{sep}lang={}", other.code())) {
                                (other.pick("English", "العربية"))
                            }
                        }
                    }
                }
                (content)
            }
        }
    }
}
