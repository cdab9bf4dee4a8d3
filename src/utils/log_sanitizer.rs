//! Masking helpers so identities never reach the logs in full.

/// Mask an email address for safe logging.
///
/// Keeps at most the first three characters of the local part and the
/// whole domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("guest@bistro.com"), "gue***@bistro.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

/// Mask an optional identity taken from a session or query string.
pub fn mask_identity(identity: Option<&str>) -> String {
    identity.map(mask_email).unwrap_or_else(|| "<none>".to_string())
}

fn visible_prefix(value: &str) -> String {
    value.chars().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_normal() {
        assert_eq!(mask_email("guest@bistro.com"), "gue***@bistro.com");
    }

    #[test]
    fn test_mask_email_short_local_part() {
        assert_eq!(mask_email("ab@bistro.com"), "ab***@bistro.com");
    }

    #[test]
    fn test_mask_email_multibyte() {
        assert_eq!(mask_email("çaféx@bistro.fr"), "çaf***@bistro.fr");
    }

    #[test]
    fn test_mask_identity_missing() {
        assert_eq!(mask_identity(None), "<none>");
        assert_eq!(mask_identity(Some("chef")), "che***");
    }
}
