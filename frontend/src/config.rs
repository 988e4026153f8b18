#[cfg(debug_assertions)]
pub fn get_asset_base_url() -> &'static str {
    "" // Trunk serves /assets locally
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base_url() -> &'static str {
    "https://cdn.atriaconsultoria.com.br"
}

pub fn asset(path: &str) -> String {
    format!("{}/assets/{}", get_asset_base_url(), path.trim_start_matches('/'))
}

/// Embedded at build time: `WEB3FORMS_ACCESS_KEY=... trunk build --release`
pub fn web3forms_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("00000000-0000-0000-0000-000000000000")
}

pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const CONTACT_SUBJECT: &str = "Novo contato pelo site - Átria Consultoria";

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const WHATSAPP_NUMBER: &str = "(32) 99908-3793";
pub const COUNTRY_CODE: &str = "55";

pub const CONTACT_EMAIL: &str = "contato@atriaconsultoria.com.br";
pub const INSTAGRAM_URL: &str = "https://instagram.com/atriaconsultoria";
pub const LINKEDIN_URL: &str = "https://linkedin.com/company/atriaconsultoria";

pub const DEFAULT_CONTACT_MESSAGE: &str =
    "Olá! Gostaria de saber mais sobre os serviços da Átria Consultoria.";

// UX pacing, in milliseconds
pub const REDIRECT_DELAY_MS: u32 = 1_500;
pub const AUTO_CLOSE_DELAY_MS: u32 = 3_000;
pub const SIMULATED_DELAY_MS: u32 = 1_200;
pub const CAROUSEL_INTERVAL_MS: u32 = 6_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_joined_once() {
        assert_eq!(asset("/logo.svg"), format!("{}/assets/logo.svg", get_asset_base_url()));
        assert_eq!(asset("logo.svg"), asset("/logo.svg"));
    }

    #[test]
    fn default_message_is_not_empty() {
        assert!(!DEFAULT_CONTACT_MESSAGE.trim().is_empty());
    }
}
