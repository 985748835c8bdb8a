use staffdesk_core::db::open_db_in_memory;
use staffdesk_core::{PortalService, RepoError, Role, ADMIN_EMAIL, ADMIN_PASSWORD};

#[test]
fn register_verify_login_lifecycle() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal.register("A", "B", "a@x.com", "secret1").unwrap();
    let created = portal
        .accounts()
        .iter()
        .find(|a| a.email == "a@x.com")
        .cloned()
        .unwrap();
    assert_eq!(created.role, Role::User);
    assert!(!created.verified);
    assert_eq!(portal.pending_email().unwrap().as_deref(), Some("a@x.com"));

    // Not verified yet: the correct password must still be refused.
    assert!(portal.login("a@x.com", "secret1").is_err());
    assert!(!portal.session().is_authenticated());

    let verified_email = portal.verify_pending_email().unwrap();
    assert_eq!(verified_email, "a@x.com");
    assert_eq!(portal.pending_email().unwrap(), None);

    let account = portal.login("a@x.com", "secret1").unwrap();
    assert_eq!(account.role, Role::User);
    assert!(portal.session().is_authenticated());
    assert!(!portal.session().is_admin());
}

#[test]
fn registration_validates_fields_and_password_length() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    let err = portal.register("", "B", "a@x.com", "secret1").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = portal.register("A", "B", "a@x.com", "short").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Nothing was stored besides the seeded admin.
    assert_eq!(portal.accounts().len(), 1);
    assert_eq!(portal.pending_email().unwrap(), None);
}

#[test]
fn duplicate_email_registration_is_a_conflict() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal.register("A", "B", "a@x.com", "secret1").unwrap();
    let err = portal.register("C", "D", "a@x.com", "secret2").unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    let err = portal
        .register("E", "F", ADMIN_EMAIL, "secret3")
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[test]
fn login_failure_is_uniform_across_causes() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal.register("A", "B", "a@x.com", "secret1").unwrap();

    // Unknown email, wrong password, unverified account: one message.
    let unknown = portal.login("nobody@x.com", "secret1").unwrap_err();
    let wrong_password = portal.login(ADMIN_EMAIL, "nope").unwrap_err();
    let unverified = portal.login("a@x.com", "secret1").unwrap_err();

    assert_eq!(unknown.to_string(), wrong_password.to_string());
    assert_eq!(wrong_password.to_string(), unverified.to_string());
}

#[test]
fn verify_without_pending_email_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    let err = portal.verify_pending_email().unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn admin_account_creation_enforces_password_and_unique_email() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    let err = portal
        .create_account("A", "B", "a@x.com", "", Role::User, true)
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = portal
        .create_account("A", "B", "a@x.com", "short", Role::User, true)
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    portal
        .create_account("A", "B", "a@x.com", "secret1", Role::User, true)
        .unwrap();
    let err = portal
        .create_account("C", "D", "a@x.com", "secret2", Role::User, false)
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // Admin-created verified accounts can sign in immediately.
    portal.login("a@x.com", "secret1").unwrap();
}

#[test]
fn admin_edit_touches_email_only_when_changed_and_password_only_when_supplied() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal
        .create_account("A", "B", "a@x.com", "secret1", Role::User, true)
        .unwrap();
    portal
        .create_account("C", "D", "c@x.com", "secret2", Role::User, true)
        .unwrap();

    // Renaming onto an existing email is refused.
    let err = portal
        .update_account("a@x.com", "A", "B", "c@x.com", "", Role::User, true)
        .unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));

    // Keeping the same email while editing other fields is fine, and a
    // blank password leaves the stored one alone.
    portal
        .update_account("a@x.com", "Anna", "Burns", "a@x.com", "", Role::Admin, true)
        .unwrap();
    let account = portal
        .accounts()
        .iter()
        .find(|a| a.email == "a@x.com")
        .unwrap();
    assert_eq!(account.first_name, "Anna");
    assert_eq!(account.password, "secret1");
    assert_eq!(account.role, Role::Admin);

    // A supplied password must meet the minimum length.
    let err = portal
        .update_account("a@x.com", "Anna", "Burns", "a@x.com", "tiny", Role::Admin, true)
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // Changing the email to a free one works.
    portal
        .update_account(
            "a@x.com",
            "Anna",
            "Burns",
            "anna@x.com",
            "newsecret",
            Role::Admin,
            true,
        )
        .unwrap();
    let account = portal
        .accounts()
        .iter()
        .find(|a| a.email == "anna@x.com")
        .unwrap();
    assert_eq!(account.password, "newsecret");
}

#[test]
fn password_reset_enforces_minimum_length() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal
        .create_account("A", "B", "a@x.com", "secret1", Role::User, true)
        .unwrap();

    let err = portal.reset_account_password("a@x.com", "tiny").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    portal.reset_account_password("a@x.com", "longer-secret").unwrap();
    portal.login("a@x.com", "longer-secret").unwrap();

    let err = portal
        .reset_account_password("nobody@x.com", "longer-secret")
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn deleting_the_signed_in_account_is_refused() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    let before = portal.accounts().len();

    let err = portal.delete_account(ADMIN_EMAIL).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(portal.accounts().len(), before);
    assert!(portal.session().is_authenticated());
}

#[test]
fn deleting_another_account_works() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal.login(ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
    portal
        .create_account("A", "B", "a@x.com", "secret1", Role::User, true)
        .unwrap();

    portal.delete_account("a@x.com").unwrap();
    assert!(portal.accounts().iter().all(|a| a.email != "a@x.com"));

    let err = portal.delete_account("a@x.com").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn profile_edit_updates_names_and_session_copy() {
    let conn = open_db_in_memory().unwrap();
    let mut portal = PortalService::open(&conn).unwrap();

    portal.register("A", "B", "a@x.com", "secret1").unwrap();
    portal.verify_pending_email().unwrap();
    portal.login("a@x.com", "secret1").unwrap();

    let err = portal.update_profile("", "B", "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let updated = portal.update_profile("Ada", "Byron", "").unwrap();
    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.password, "secret1");
    assert_eq!(
        portal.session().identity().unwrap().first_name,
        "Ada"
    );

    portal.update_profile("Ada", "Byron", "changed-secret").unwrap();
    let stored = portal
        .accounts()
        .iter()
        .find(|a| a.email == "a@x.com")
        .unwrap();
    assert_eq!(stored.password, "changed-secret");
}
