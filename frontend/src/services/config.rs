use anyhow::{anyhow, Context, Result};
use web_sys::Element;

use shared::wallet::DEFAULT_USER_ID;

/// Which controller the host page wants mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Menu,
    ManagerReports,
    FinancialReports,
    Reservations,
    Restaurant,
    ReservationSearch,
    Wallet,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Menu,
        Page::ManagerReports,
        Page::FinancialReports,
        Page::Reservations,
        Page::Restaurant,
        Page::ReservationSearch,
        Page::Wallet,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Menu => "menu",
            Page::ManagerReports => "manager-reports",
            Page::FinancialReports => "financial-reports",
            Page::Reservations => "reservations",
            Page::Restaurant => "restaurant",
            Page::ReservationSearch => "reservation-search",
            Page::Wallet => "wallet",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        let key = key.trim().to_ascii_lowercase();
        Page::ALL.into_iter().find(|page| page.key() == key)
    }
}

/// Settings read from the `data-*` attributes of the mount element.
///
/// ```html
/// <div id="app" data-page="wallet" data-api-base="" data-user-id="7"></div>
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page: Page,
    pub api_base: String,
    pub user_id: i64,
}

impl PageConfig {
    pub fn parse(page: Option<&str>, api_base: Option<&str>, user_id: Option<&str>) -> Result<Self> {
        let page_key = page
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| anyhow!("mount element has no data-page attribute"))?;
        let page = Page::from_key(page_key).ok_or_else(|| anyhow!("unknown page '{}'", page_key))?;

        let user_id = match user_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .with_context(|| format!("data-user-id '{}' is not a number", raw))?,
            None => DEFAULT_USER_ID,
        };

        Ok(Self {
            page,
            api_base: api_base.unwrap_or_default().trim().to_string(),
            user_id,
        })
    }

    pub fn from_root(root: &Element) -> Result<Self> {
        Self::parse(
            root.get_attribute("data-page").as_deref(),
            root.get_attribute("data-api-base").as_deref(),
            root.get_attribute("data-user-id").as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_keys() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key(" Wallet "), Some(Page::Wallet));
        assert_eq!(Page::from_key("dashboard"), None);
    }

    #[test]
    fn test_user_id_defaults() {
        let config = PageConfig::parse(Some("wallet"), None, None).unwrap();
        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert_eq!(config.api_base, "");

        let config = PageConfig::parse(Some("wallet"), Some("http://api"), Some("7")).unwrap();
        assert_eq!(config.user_id, 7);
        assert_eq!(config.api_base, "http://api");
    }

    #[test]
    fn test_bad_config_is_rejected() {
        assert!(PageConfig::parse(None, None, None).is_err());
        assert!(PageConfig::parse(Some("nope"), None, None).is_err());
        let err = PageConfig::parse(Some("wallet"), None, Some("abc")).unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
