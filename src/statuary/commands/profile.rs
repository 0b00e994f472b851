use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::{Result, StoreError};
use crate::model::{Order, Profile, WishlistItem};
use serde::Serialize;
use std::str::FromStr;

pub const BADGES: &[&str] = &["Premium Member", "Verified Collector"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Profile,
    Orders,
    Wishlist,
    Settings,
}

impl FromStr for ProfileTab {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "profile" => Ok(ProfileTab::Profile),
            "orders" => Ok(ProfileTab::Orders),
            "wishlist" => Ok(ProfileTab::Wishlist),
            "settings" => Ok(ProfileTab::Settings),
            other => Err(StoreError::Api(format!(
                "Unknown tab '{}': expected profile, orders, wishlist or settings",
                other
            ))),
        }
    }
}

/// Editable personal-information fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
    Bio,
}

impl FromStr for ProfileField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            "phone" => Ok(ProfileField::Phone),
            "address" => Ok(ProfileField::Address),
            "bio" => Ok(ProfileField::Bio),
            other => Err(StoreError::Api(format!(
                "Unknown profile field '{}': expected name, email, phone, address or bio",
                other
            ))),
        }
    }
}

/// Returns a copy of `profile` with one field replaced.
pub fn with_field(profile: &Profile, field: ProfileField, value: &str) -> Profile {
    let mut next = profile.clone();
    let slot = match field {
        ProfileField::Name => &mut next.name,
        ProfileField::Email => &mut next.email,
        ProfileField::Phone => &mut next.phone,
        ProfileField::Address => &mut next.address,
        ProfileField::Bio => &mut next.bio,
    };
    *slot = value.to_string();
    next
}

#[derive(Debug, Clone, Serialize)]
pub struct Setting {
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsSection {
    pub title: &'static str,
    pub settings: Vec<Setting>,
}

pub fn settings() -> Vec<SettingsSection> {
    let action = |label: &'static str| Setting {
        label,
        description: None,
        action: label,
    };
    vec![
        SettingsSection {
            title: "Notifications",
            settings: vec![
                Setting {
                    label: "Email Notifications",
                    description: Some("Receive updates about your orders"),
                    action: "Enable",
                },
                Setting {
                    label: "Marketing Emails",
                    description: Some("Get notified about new collections"),
                    action: "Disable",
                },
            ],
        },
        SettingsSection {
            title: "Security",
            settings: vec![
                action("Change Password"),
                action("Enable Two-Factor Authentication"),
            ],
        },
        SettingsSection {
            title: "Account",
            settings: vec![action("Delete Account")],
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub tab: ProfileTab,
    pub profile: Profile,
    pub initials: String,
    pub badges: Vec<&'static str>,
    pub orders: Vec<Order>,
    pub wishlist: Vec<WishlistItem>,
    pub settings: Vec<SettingsSection>,
}

pub fn run(
    catalog: &Catalog,
    tab: ProfileTab,
    edits: &[(ProfileField, String)],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let profile = edits
        .iter()
        .fold(catalog.profile().clone(), |p, (field, value)| {
            with_field(&p, *field, value)
        });
    if !edits.is_empty() {
        result.add_message(CmdMessage::info(
            "Profile changes apply to this preview only and are not saved.",
        ));
    }

    Ok(result.with_page(Page::Profile(ProfilePage {
        tab,
        initials: profile.initials(),
        profile,
        badges: BADGES.to_vec(),
        orders: catalog.orders().to_vec(),
        wishlist: catalog.wishlist().to_vec(),
        settings: settings(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;

    fn page(edits: &[(ProfileField, String)]) -> (ProfilePage, CmdResult) {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        let mut result = run(&catalog, ProfileTab::Profile, edits).unwrap();
        match result.page.take() {
            Some(Page::Profile(page)) => (page, result),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn shows_the_seeded_profile() {
        let (page, result) = page(&[]);
        assert_eq!(page.profile.name, "Alexandra Chen");
        assert_eq!(page.initials, "AC");
        assert_eq!(page.orders.len(), 2);
        assert_eq!(page.wishlist.len(), 2);
        assert_eq!(page.settings.len(), 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn edits_are_applied_in_order_without_touching_the_catalog() {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        let edits = vec![
            (ProfileField::Name, "Sam Rivera".to_string()),
            (ProfileField::Name, "Sam Q Rivera".to_string()),
            (ProfileField::Bio, "Collector".to_string()),
        ];
        let page = match run(&catalog, ProfileTab::Profile, &edits).unwrap().page {
            Some(Page::Profile(page)) => page,
            other => panic!("unexpected page {:?}", other),
        };
        assert_eq!(page.profile.name, "Sam Q Rivera");
        assert_eq!(page.initials, "SQR");
        assert_eq!(page.profile.bio, "Collector");
        assert_eq!(catalog.profile().name, "Alexandra Chen");
    }

    #[test]
    fn edits_carry_a_not_saved_notice() {
        let (_, result) = page(&[(ProfileField::Phone, "555".to_string())]);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn fields_and_tabs_parse() {
        assert_eq!("email".parse::<ProfileField>().unwrap(), ProfileField::Email);
        assert!("age".parse::<ProfileField>().is_err());
        assert_eq!("wishlist".parse::<ProfileTab>().unwrap(), ProfileTab::Wishlist);
    }
}
