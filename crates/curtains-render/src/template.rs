//! Assembles the final self-contained page: one `<section>` per slide, the
//! merged stylesheet inlined, and the navigation script embedded. No
//! external resources are referenced.

use html_escape::encode_text;

/// Keyboard/click slide navigation, embedded verbatim into every page.
pub const NAV_JS: &str = include_str!("../assets/nav.js");

pub fn render_page(title: &str, css: &str, slides_html: &[String]) -> String {
    let mut sections = String::new();
    for (index, body) in slides_html.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        sections.push_str(&format!(
            "    <section class=\"curtains-slide{active}\" id=\"slide-{index}\">\n{body}\n    </section>\n"
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{css}\n</style>\n\
         </head>\n\
         <body>\n\
         <main class=\"curtains-deck\">\n{sections}</main>\n\
         <script>\n{nav}</script>\n\
         </body>\n\
         </html>\n",
        title = encode_text(title),
        css = css,
        sections = sections,
        nav = NAV_JS,
    )
}
