//! Account operations: registration, verification, sign-in and admin CRUD.
//!
//! # Invariants
//! - `email` stays unique (case-sensitive) across every write path.
//! - Sign-in failure is reported with one uniform message, never revealing
//!   which of email, password or verification state was wrong.

use log::info;

use crate::model::account::{Account, Role};
use crate::repo::{RepoError, RepoResult, Repository};

const MIN_PASSWORD_LEN: usize = 6;

impl Repository<'_> {
    /// All accounts, in stored order.
    pub fn accounts(&self) -> &[Account] {
        &self.db.accounts
    }

    pub fn find_account(&self, email: &str) -> Option<&Account> {
        self.db.accounts.iter().find(|a| a.email == email)
    }

    fn account_index(&self, email: &str) -> Option<usize> {
        self.db.accounts.iter().position(|a| a.email == email)
    }

    /// Self-service registration. The new account starts unverified with
    /// the user role and cannot sign in until verified.
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> RepoResult<()> {
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty()
        {
            return Err(RepoError::Validation("all fields are required".to_string()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(RepoError::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }
        if self.find_account(email).is_some() {
            return Err(RepoError::Conflict("email already registered".to_string()));
        }

        self.db.accounts.push(Account {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::User,
            verified: false,
        });
        self.flush()
    }

    /// Marks the account at `email` as verified. Idempotent for accounts
    /// that are already verified.
    pub fn verify(&mut self, email: &str) -> RepoResult<()> {
        let Some(account) = self.db.accounts.iter_mut().find(|a| a.email == email) else {
            return Err(RepoError::NotFound(format!("account not found: {email}")));
        };
        account.verified = true;
        self.flush()
    }

    /// Returns the account iff email, password and verified state all
    /// match. Any mismatch yields the same error.
    pub fn authenticate(&self, email: &str, password: &str) -> RepoResult<Account> {
        let matched = self
            .db
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password && a.verified);

        match matched {
            Some(account) => {
                info!("event=sign_in module=repo status=ok email={email}");
                Ok(account.clone())
            }
            None => {
                info!("event=sign_in module=repo status=refused");
                Err(RepoError::Validation(
                    "invalid email or password, or account not verified".to_string(),
                ))
            }
        }
    }

    /// Admin-side account creation; unlike [`Repository::register`] the
    /// role and verified flag are caller-chosen.
    pub fn create_account(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        role: Role,
        verified: bool,
    ) -> RepoResult<()> {
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err(RepoError::Validation(
                "first name, last name and email are required".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(RepoError::Validation(
                "password is required for new accounts".to_string(),
            ));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(RepoError::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }
        if self.find_account(email).is_some() {
            return Err(RepoError::Conflict("email already exists".to_string()));
        }

        self.db.accounts.push(Account {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
            verified,
        });
        self.flush()
    }

    /// Admin-side edit of the account currently stored at `original_email`.
    ///
    /// The email is only touched when it actually changes (with a
    /// uniqueness check); the password only when a non-empty replacement is
    /// supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn update_account(
        &mut self,
        original_email: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        role: Role,
        verified: bool,
    ) -> RepoResult<()> {
        let Some(index) = self.account_index(original_email) else {
            return Err(RepoError::NotFound(format!(
                "account not found: {original_email}"
            )));
        };
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err(RepoError::Validation(
                "first name, last name and email are required".to_string(),
            ));
        }
        if email != original_email && self.find_account(email).is_some() {
            return Err(RepoError::Conflict("email already exists".to_string()));
        }
        if !password.is_empty() && password.len() < MIN_PASSWORD_LEN {
            return Err(RepoError::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }

        let account = &mut self.db.accounts[index];
        account.first_name = first_name.to_string();
        account.last_name = last_name.to_string();
        account.email = email.to_string();
        if !password.is_empty() {
            account.password = password.to_string();
        }
        account.role = role;
        account.verified = verified;
        self.flush()
    }

    /// Profile edit for the signed-in identity: names always, password only
    /// when a replacement is supplied.
    pub fn update_profile(
        &mut self,
        email: &str,
        first_name: &str,
        last_name: &str,
        new_password: &str,
    ) -> RepoResult<Account> {
        let Some(index) = self.account_index(email) else {
            return Err(RepoError::NotFound(format!("account not found: {email}")));
        };
        if first_name.is_empty() || last_name.is_empty() {
            return Err(RepoError::Validation(
                "first name and last name are required".to_string(),
            ));
        }

        let account = &mut self.db.accounts[index];
        account.first_name = first_name.to_string();
        account.last_name = last_name.to_string();
        if !new_password.is_empty() {
            account.password = new_password.to_string();
        }
        let updated = account.clone();
        self.flush()?;
        Ok(updated)
    }

    pub fn reset_password(&mut self, email: &str, new_password: &str) -> RepoResult<()> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(RepoError::Validation(
                "password must be at least 6 characters".to_string(),
            ));
        }
        let Some(account) = self.db.accounts.iter_mut().find(|a| a.email == email) else {
            return Err(RepoError::NotFound(format!("account not found: {email}")));
        };
        account.password = new_password.to_string();
        self.flush()
    }

    /// Deletes the account at `email`, unless it belongs to the identity
    /// performing the deletion.
    pub fn delete_account(
        &mut self,
        email: &str,
        current_identity: Option<&str>,
    ) -> RepoResult<()> {
        if current_identity == Some(email) {
            return Err(RepoError::Validation(
                "cannot delete the signed-in account".to_string(),
            ));
        }
        let Some(index) = self.account_index(email) else {
            return Err(RepoError::NotFound(format!("account not found: {email}")));
        };
        self.db.accounts.remove(index);
        self.flush()
    }
}
