/// A Proxmox authentication realm (`pam`, `pve`, an LDAP or AD realm id...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxmoxRealm(String);

impl ProxmoxRealm {
    pub const DEFAULT: &'static str = "pam";

    /// Resolves an optional realm. `None` and the empty string fall back to `pam`.
    pub fn or_default(realm: Option<&str>) -> Self {
        match realm {
            Some(realm) if !realm.is_empty() => Self(realm.to_string()),
            _ => Self(Self::DEFAULT.to_string()),
        }
    }

    /// Returns the realm as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProxmoxRealm {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}
