//! Routing prefix used by swift-s3-sync for replicated containers.

use md5::{Digest, Md5};

/// Number of distinct shard values (six hex digits)
const SHARD_SPACE: u128 = 16u128.pow(6);

/// The Swift account a container is synced under: `AUTH_<name>`, where
/// `<name>` is the part of the account identifier before any `:`.
pub fn sync_account(account: &str) -> String {
    let name = account.split(':').next().unwrap_or(account);
    format!("AUTH_{name}")
}

/// Key prefix for `container` of `account` in the destination bucket:
/// `<shard>/<sync account>/<container>/`, where the shard is the MD5 of
/// `<sync account>/<container>` reduced modulo 16^6 and written as six
/// lower-case hex digits.
///
/// The shard is always zero padded to six digits. The Python verify_sync.py
/// script rendered it with `hex(...)[2:-1]`, which drops leading zeros, so for
/// shards below 0x100000 (about 1 in 16 containers) the two name different
/// prefixes.
pub fn sync_prefix(account: &str, container: &str) -> String {
    let sync_account = sync_account(account);
    let digest = Md5::digest(format!("{sync_account}/{container}").as_bytes());

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    let shard = u128::from_be_bytes(bytes) % SHARD_SPACE;

    format!("{shard:06x}/{sync_account}/{container}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_account_strips_user() {
        assert_eq!(sync_account("test:tester"), "AUTH_test");
        assert_eq!(sync_account("test"), "AUTH_test");
        assert_eq!(sync_account("a:b:c"), "AUTH_a");
    }

    #[test]
    fn test_sync_prefix_known_value() {
        // md5("AUTH_test/photos") = c41a315e9ed7440fd3e190d04a389e7e
        assert_eq!(sync_prefix("test:tester", "photos"), "389e7e/AUTH_test/photos/");
    }

    #[test]
    fn test_sync_prefix_is_zero_padded() {
        // md5("AUTH_test/c20") = 92257bd329510d2f53f30b839e0e0597
        assert_eq!(sync_prefix("test", "c20"), "0e0597/AUTH_test/c20/");
    }

    #[test]
    fn test_sync_prefix_ignores_user_part() {
        assert_eq!(
            sync_prefix("test:tester", "backups"),
            sync_prefix("test", "backups")
        );
        assert_eq!(sync_prefix("test", "backups"), "64b1fc/AUTH_test/backups/");
    }

    #[test]
    fn test_sync_prefix_is_deterministic() {
        let first = sync_prefix("acct:user", "bucket-1");
        for _ in 0..10 {
            assert_eq!(sync_prefix("acct:user", "bucket-1"), first);
        }
    }

    #[test]
    fn test_sync_prefix_differs_per_container() {
        let prefixes: std::collections::HashSet<String> = (0..100)
            .map(|i| sync_prefix("test", &format!("container-{i}")))
            .collect();
        assert_eq!(prefixes.len(), 100);

        let shards: std::collections::HashSet<&str> =
            prefixes.iter().map(|p| &p[..6]).collect();
        assert!(shards.len() > 90);
    }
}
