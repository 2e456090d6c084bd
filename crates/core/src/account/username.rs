//! Username derivation from owner names.
//!
//! Usernames are the lower-cased initials of the owner's name: "Steven
//! Thomas Williams" becomes "stw". Two owners with identical initials
//! collide; lookups resolve to the first match in store order, which is an
//! accepted limitation of the demo.

use super::types::Account;

/// Derives the login handle for one owner name.
#[must_use]
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Stores a derived username on every account.
///
/// Must run before the first login lookup.
pub fn derive_usernames(accounts: &mut [Account]) {
    for account in accounts {
        account.username = derive_username(&account.owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibank_shared::types::{Currency, Locale};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Jonas Schmedtmann", "js")]
    #[case("Jessica Davis", "jd")]
    #[case("Steven Thomas Williams", "stw")]
    #[case("Sarah Smith", "ss")]
    #[case("UPPER CASE", "uc")]
    #[case("  spaced   out  ", "so")]
    #[case("single", "s")]
    fn test_derive_username(#[case] owner: &str, #[case] expected: &str) {
        assert_eq!(derive_username(owner), expected);
    }

    #[test]
    fn test_derive_usernames_fills_every_account() {
        let mut accounts = vec![
            Account::new(
                "Jonas Schmedtmann",
                1111,
                vec![dec!(200)],
                None,
                dec!(1.2),
                Currency::Eur,
                Locale::PtPt,
            ),
            Account::new(
                "Jessica Davis",
                2222,
                vec![dec!(5000)],
                None,
                dec!(1.5),
                Currency::Usd,
                Locale::EnUs,
            ),
        ];

        derive_usernames(&mut accounts);

        assert_eq!(accounts[0].username, "js");
        assert_eq!(accounts[1].username, "jd");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(
            derive_username("Steven Thomas Williams"),
            derive_username("Steven Thomas Williams")
        );
    }
}
