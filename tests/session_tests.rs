//! Integration tests for session persistence
//!
//! Exercises the on-disk jar: entry lifetimes, expiry enforcement on read,
//! and the restore/persist/discard cycle around login state

use dialogue_forge::session::{
    self, SESSION_TTL_SECS, Session, SessionEntry, SessionJar, TOKEN_ENTRY, USER_ENTRY,
};
use dialogue_forge::types::UserIdentity;
use tempfile::tempdir;
use time::OffsetDateTime;

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

mod jar_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        jar.set(TOKEN_ENTRY, "tok-123").expect("Failed to set entry");
        assert_eq!(jar.get(TOKEN_ENTRY), Some("tok-123".to_string()));
    }

    #[test]
    fn test_get_nonexistent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        assert_eq!(jar.get("never_written"), None);
    }

    #[test]
    fn test_remove_absent_entry_is_ok() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        jar.remove(TOKEN_ENTRY).expect("Remove of absent entry failed");
    }

    #[test]
    fn test_expired_entry_reads_as_absent() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        jar.set_with_expiry(TOKEN_ENTRY, "stale", now_unix() - 10)
            .expect("Failed to set entry");

        assert_eq!(jar.get(TOKEN_ENTRY), None);
        // The dead entry file is dropped by the read itself
        assert!(!dir.path().join("auth_token.json").exists());
    }

    #[test]
    fn test_default_lifetime_is_seven_days() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        let before = now_unix();
        jar.set(TOKEN_ENTRY, "fresh").expect("Failed to set entry");
        let after = now_unix();

        let raw = std::fs::read_to_string(dir.path().join("auth_token.json"))
            .expect("Failed to read entry file");
        let entry: SessionEntry = serde_json::from_str(&raw).expect("Failed to parse entry");

        assert_eq!(entry.value, "fresh");
        assert!(entry.expires_at >= before + SESSION_TTL_SECS);
        assert!(entry.expires_at <= after + SESSION_TTL_SECS);
    }

    #[test]
    fn test_jar_isolation() {
        let dir_a = tempdir().expect("Failed to create temp dir");
        let dir_b = tempdir().expect("Failed to create temp dir");
        let jar_a = SessionJar::new(dir_a.path());
        let jar_b = SessionJar::new(dir_b.path());

        jar_a.set(TOKEN_ENTRY, "token-a").expect("Failed to set in jar a");
        jar_b.set(TOKEN_ENTRY, "token-b").expect("Failed to set in jar b");

        assert_eq!(jar_a.get(TOKEN_ENTRY), Some("token-a".to_string()));
        assert_eq!(jar_b.get(TOKEN_ENTRY), Some("token-b".to_string()));
    }

    #[test]
    fn test_entry_names_survive_special_characters() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        jar.set("user:session", "value").expect("Failed to set entry");
        assert_eq!(jar.get("user:session"), Some("value".to_string()));
    }
}

mod login_cycle_tests {
    use super::*;

    fn sample_user() -> UserIdentity {
        UserIdentity {
            username: "gamedev".to_string(),
        }
    }

    #[test]
    fn test_persist_then_restore() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        session::persist(&jar, &sample_user(), "tok-789").expect("Failed to persist session");

        let restored = session::restore_from(&jar);
        assert!(restored.is_authenticated());
        assert_eq!(restored.user, Some(sample_user()));
        assert_eq!(restored.token, Some("tok-789".to_string()));
    }

    #[test]
    fn test_restore_from_empty_jar_is_signed_out() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        let restored = session::restore_from(&jar);
        assert_eq!(restored, Session::default());
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn test_discard_removes_both_entries() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        session::persist(&jar, &sample_user(), "tok-789").expect("Failed to persist session");
        session::discard(&jar).expect("Failed to discard session");

        assert_eq!(jar.get(USER_ENTRY), None);
        assert_eq!(jar.get(TOKEN_ENTRY), None);
        assert!(!session::restore_from(&jar).is_authenticated());
    }

    #[test]
    fn test_expired_login_restores_as_signed_out() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        session::persist(&jar, &sample_user(), "tok-789").expect("Failed to persist session");

        // Age both entries past their lifetime
        let past = now_unix() - 1;
        jar.set_with_expiry(USER_ENTRY, "{\"username\":\"gamedev\"}", past)
            .expect("Failed to age user entry");
        jar.set_with_expiry(TOKEN_ENTRY, "tok-789", past)
            .expect("Failed to age token entry");

        assert_eq!(session::restore_from(&jar), Session::default());
    }

    #[test]
    fn test_token_expiry_alone_signs_out() {
        let dir = tempdir().expect("Failed to create temp dir");
        let jar = SessionJar::new(dir.path());

        session::persist(&jar, &sample_user(), "tok-789").expect("Failed to persist session");
        jar.set_with_expiry(TOKEN_ENTRY, "tok-789", now_unix() - 1)
            .expect("Failed to age token entry");

        let restored = session::restore_from(&jar);
        assert_eq!(restored.user, Some(sample_user()));
        assert!(!restored.is_authenticated());
    }
}
