//! Site-wide settings. Build-time environment variables override the defaults.

pub const COMPANY_NAME: &str = "Genesis Printers & Publishers";
pub const COMPANY_LEGAL_NAME: &str = "Genesis Printers & Publishers Private Limited";
pub const PHONE_DISPLAY: &str = "8471916297";
pub const PHONE_HREF: &str = "tel:+918471916297";
pub const EMAIL: &str = "genesispress@gmail.com";
pub const EMAIL_HREF: &str = "mailto:genesispress@gmail.com";
pub const ADDRESS: &str =
    "348 Express Highway (VIP Road), Opp. Doordarshan Colony, Near Six Mile, Barbari, Guwahati-781036";
pub const MAP_URL: &str = "https://www.google.com/maps/place/Genesis+Printers+%26+Publishers+Private+Limited/@26.1381865,91.8028296,15z";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3581.8234567890123!2d91.8028296!3d26.1381865!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x92e77dce10d166a7!2sGenesis%20Printers%20%26%20Publishers%20Private%20Limited!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";

const DEFAULT_WHATSAPP_NUMBER: &str = "918471916297";

/// Prefix for every media path. Empty means the site root.
pub fn get_asset_root() -> &'static str {
    option_env!("GENESIS_ASSET_ROOT").unwrap_or("")
}

/// Number the contact form forwards to, digits only with country code.
pub fn get_whatsapp_number() -> &'static str {
    option_env!("GENESIS_WHATSAPP_NUMBER").unwrap_or(DEFAULT_WHATSAPP_NUMBER)
}

pub fn get_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Resolves a media path against the asset root.
pub fn asset_url(path: &str) -> String {
    join_asset_root(get_asset_root(), path)
}

fn join_asset_root(root: &str, path: &str) -> String {
    if root.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_root_leaves_paths_alone() {
        assert_eq!(join_asset_root("", "/books/1.jpg"), "/books/1.jpg");
    }

    #[test]
    fn root_is_joined_with_a_single_slash() {
        assert_eq!(
            join_asset_root("https://cdn.example.com/site/", "/books/1.jpg"),
            "https://cdn.example.com/site/books/1.jpg"
        );
        assert_eq!(join_asset_root("/static", "hero.mp4"), "/static/hero.mp4");
    }

    #[test]
    fn absolute_urls_are_not_rebased() {
        let url = "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg";
        assert_eq!(join_asset_root("/static", url), url);
    }
}
