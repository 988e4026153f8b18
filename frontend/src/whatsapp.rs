use log::{info, warn};

use crate::config;

/// Builds a `wa.me` deep link for `phone`, prefixing the country code once
/// and attaching `message` as `?text=` when it is non-empty.
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let number = if digits.starts_with(config::COUNTRY_CODE) {
        digits
    } else {
        format!("{}{}", config::COUNTRY_CODE, digits)
    };

    match message.filter(|m| !m.is_empty()) {
        Some(text) => format!(
            "{}/{}?text={}",
            config::WHATSAPP_BASE_URL,
            number,
            urlencoding::encode(text)
        ),
        None => format!("{}/{}", config::WHATSAPP_BASE_URL, number),
    }
}

/// Text sent to the consultancy after a successful form submission.
pub fn contact_message(name: &str, message: &str) -> String {
    let name = name.trim();
    let message = message.trim();
    match (name.is_empty(), message.is_empty()) {
        (true, true) => config::DEFAULT_CONTACT_MESSAGE.to_string(),
        (true, false) => message.to_string(),
        (false, true) => format!("Olá! Meu nome é {}.", name),
        (false, false) => format!("Olá! Meu nome é {}. {}", name, message),
    }
}

pub fn navigate(url: &str) {
    info!("navigating to {}", url);
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            warn!("navigation to {} was blocked", url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(link: &str) -> (&str, Option<&str>) {
        let rest = link
            .strip_prefix("https://wa.me/")
            .expect("link should use the wa.me host");
        match rest.split_once("?text=") {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        }
    }

    #[test]
    fn formats_the_reference_scenario() {
        assert_eq!(
            whatsapp_link("32999083793", Some("Olá")),
            "https://wa.me/5532999083793?text=Ol%C3%A1"
        );
    }

    #[test]
    fn strips_punctuation_from_the_number() {
        for phone in ["(32) 99908-3793", "32.99908.3793", " 32 99908 3793 ", "32/99908/3793"] {
            let link = whatsapp_link(phone, None);
            let (path, query) = split(&link);
            assert!(path.chars().all(|c| c.is_ascii_digit()), "{}", link);
            assert_eq!(path, "5532999083793");
            assert!(query.is_none());
        }
    }

    #[test]
    fn country_code_is_prefixed_exactly_once() {
        let bare = whatsapp_link("32 99908-3793", None);
        let with_code = whatsapp_link("+55 (32) 99908-3793", None);
        assert_eq!(bare, with_code);
        assert_eq!(split(&with_code).0, "5532999083793");
    }

    #[test]
    fn empty_message_has_no_query_string() {
        assert_eq!(whatsapp_link("32999083793", Some("")), "https://wa.me/5532999083793");
        assert_eq!(whatsapp_link("32999083793", None), "https://wa.me/5532999083793");
    }

    #[test]
    fn message_decodes_back_to_the_original() {
        let messages = [
            "Olá! Quero uma proposta & um orçamento?",
            "linha 1\nlinha 2",
            "100% de crescimento #meta = sim",
            "emoji 🚀 + acentuação çãé",
        ];
        for message in messages {
            let link = whatsapp_link("32999083793", Some(message));
            let query = split(&link).1.expect("query expected");
            assert!(!query.contains(' '));
            assert_eq!(urlencoding::decode(query).unwrap(), message);
        }
    }

    #[test]
    fn empty_phone_still_yields_a_link() {
        assert_eq!(whatsapp_link("", None), "https://wa.me/55");
        assert_eq!(whatsapp_link("abc", Some("oi")), "https://wa.me/55?text=oi");
    }

    #[test]
    fn contact_message_embeds_name_and_message() {
        assert_eq!(
            contact_message("  Ana Souza ", "Preciso de ajuda com fluxo de caixa."),
            "Olá! Meu nome é Ana Souza. Preciso de ajuda com fluxo de caixa."
        );
        assert_eq!(contact_message("Ana", "  "), "Olá! Meu nome é Ana.");
        assert_eq!(contact_message("", "Oi"), "Oi");
        assert_eq!(contact_message("", ""), config::DEFAULT_CONTACT_MESSAGE);
    }
}
