//! Portal service: the surface consumed by external view controllers.
//!
//! # Responsibility
//! - Bundle the repository, the session and the scalar slots behind one
//!   handle per open portal.
//! - Own the token and pending-verification slot wiring so callers never
//!   touch storage keys directly.
//!
//! # Invariants
//! - The session and the `auth_token` slot change together: sign-in writes
//!   both, sign-out clears both.
//! - Operations that need an identity fail before touching any state when
//!   the session is anonymous.

use log::info;
use rusqlite::Connection;

use crate::model::account::{Account, Role};
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::request::{Request, RequestItemInput};
use crate::repo::{RepoError, RepoResult, Repository};
use crate::session::{resolve_view, Session, View};
use crate::store::{SlotStore, AUTH_TOKEN_SLOT, PENDING_EMAIL_SLOT};

/// One open portal: loaded data, session state and slot access.
pub struct PortalService<'conn> {
    slots: SlotStore<'conn>,
    repo: Repository<'conn>,
    session: Session,
}

impl<'conn> PortalService<'conn> {
    /// Loads (or seeds) the portal database and restores the session from
    /// the persisted token when it still resolves to a real account.
    pub fn open(conn: &'conn Connection) -> RepoResult<Self> {
        let repo = Repository::open(conn)?;
        let slots = SlotStore::new(conn);
        let mut portal = Self {
            slots,
            repo,
            session: Session::Anonymous,
        };
        portal.restore_session()?;
        Ok(portal)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolves a route name against the current session's access rights.
    pub fn navigate(&self, route: &str) -> View {
        resolve_view(View::from_route(route), &self.session)
    }

    // ── Authentication ──────────────────────────────────────────────────

    pub fn login(&mut self, email: &str, password: &str) -> RepoResult<Account> {
        if email.is_empty() || password.is_empty() {
            return Err(RepoError::Validation(
                "email and password are required".to_string(),
            ));
        }
        let account = self.repo.authenticate(email, password)?;
        self.slots.set(AUTH_TOKEN_SLOT, &account.email)?;
        self.session = Session::Authenticated(account.clone());
        Ok(account)
    }

    pub fn logout(&mut self) -> RepoResult<()> {
        self.slots.remove(AUTH_TOKEN_SLOT)?;
        self.session = Session::Anonymous;
        info!("event=sign_out module=service status=ok");
        Ok(())
    }

    /// Registers a new account and records its email as awaiting
    /// verification.
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> RepoResult<()> {
        self.repo.register(first_name, last_name, email, password)?;
        self.slots.set(PENDING_EMAIL_SLOT, email)?;
        Ok(())
    }

    /// The email awaiting verification, if any.
    pub fn pending_email(&self) -> RepoResult<Option<String>> {
        Ok(self.slots.get(PENDING_EMAIL_SLOT)?)
    }

    /// Completes the simulated email verification for the pending email.
    /// The pending slot is cleared only when the account was found and
    /// marked verified; a missing account keeps the slot so the caller can
    /// send the user back to registration.
    pub fn verify_pending_email(&mut self) -> RepoResult<String> {
        let Some(email) = self.slots.get(PENDING_EMAIL_SLOT)? else {
            return Err(RepoError::NotFound(
                "no pending verification found".to_string(),
            ));
        };
        self.repo.verify(&email)?;
        self.slots.remove(PENDING_EMAIL_SLOT)?;
        info!("event=email_verified module=service status=ok email={email}");
        Ok(email)
    }

    fn identity_email(&self) -> RepoResult<String> {
        match self.session.identity() {
            Some(account) => Ok(account.email.clone()),
            None => Err(RepoError::Validation("sign in required".to_string())),
        }
    }

    // ── Profile ─────────────────────────────────────────────────────────

    /// Edits the signed-in account's names (and password, when supplied)
    /// and refreshes the in-session copy.
    pub fn update_profile(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_password: &str,
    ) -> RepoResult<Account> {
        let email = self.identity_email()?;
        let updated = self
            .repo
            .update_profile(&email, first_name, last_name, new_password)?;
        self.session = Session::Authenticated(updated.clone());
        Ok(updated)
    }

    // ── Accounts ────────────────────────────────────────────────────────

    pub fn accounts(&self) -> &[Account] {
        self.repo.accounts()
    }

    pub fn create_account(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
        role: Role,
        verified: bool,
    ) -> RepoResult<()> {
        self.repo
            .create_account(first_name, last_name, email, password, role, verified)
    }

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
        self.repo.update_account(
            original_email,
            first_name,
            last_name,
            email,
            password,
            role,
            verified,
        )
    }

    pub fn reset_account_password(&mut self, email: &str, new_password: &str) -> RepoResult<()> {
        self.repo.reset_password(email, new_password)
    }

    /// Deletes an account; deleting the signed-in identity is refused and
    /// leaves both the data and the session untouched.
    pub fn delete_account(&mut self, email: &str) -> RepoResult<()> {
        let current = self.session.identity().map(|a| a.email.clone());
        self.repo.delete_account(email, current.as_deref())
    }

    // ── Departments ─────────────────────────────────────────────────────

    pub fn departments(&self) -> &[Department] {
        self.repo.departments()
    }

    pub fn create_department(&mut self, id: i64, name: &str, description: &str) -> RepoResult<()> {
        self.repo.create_department(id, name, description)
    }

    pub fn update_department(&mut self, id: i64, name: &str, description: &str) -> RepoResult<()> {
        self.repo.update_department(id, name, description)
    }

    pub fn delete_department(&mut self, id: i64) -> RepoResult<()> {
        self.repo.delete_department(id)
    }

    // ── Employees ───────────────────────────────────────────────────────

    pub fn employees(&self) -> &[Employee] {
        self.repo.employees()
    }

    /// Department name to show for an employee, or `None` for a dangling
    /// or non-assignable reference (rendered as an empty cell).
    pub fn employee_department_name(&self, employee: &Employee) -> Option<&str> {
        self.repo.assignable_department_name(employee)
    }

    pub fn create_employee(
        &mut self,
        id: &str,
        email: &str,
        position: &str,
        department_id: i64,
        hire_date: Option<&str>,
    ) -> RepoResult<()> {
        self.repo
            .create_employee(id, email, position, department_id, hire_date)
    }

    pub fn update_employee(
        &mut self,
        original_id: &str,
        id: &str,
        email: &str,
        position: &str,
        department_id: i64,
        hire_date: Option<&str>,
    ) -> RepoResult<()> {
        self.repo
            .update_employee(original_id, id, email, position, department_id, hire_date)
    }

    pub fn delete_employee(&mut self, id: &str) -> RepoResult<()> {
        self.repo.delete_employee(id)
    }

    // ── Requests ────────────────────────────────────────────────────────

    /// Files a request on behalf of the signed-in identity.
    pub fn submit_request(
        &mut self,
        kind: &str,
        items: &[RequestItemInput],
    ) -> RepoResult<Request> {
        let email = self.identity_email()?;
        self.repo.submit_request(&email, kind, items)
    }

    /// Requests filed by the signed-in identity, in submission order.
    pub fn my_requests(&self) -> RepoResult<Vec<Request>> {
        let email = self.identity_email()?;
        Ok(self.repo.requests_for(&email))
    }

    fn restore_session(&mut self) -> RepoResult<()> {
        let Some(token) = self.slots.get(AUTH_TOKEN_SLOT)? else {
            return Ok(());
        };
        if let Some(account) = self.repo.find_account(&token) {
            info!("event=session_restore module=service status=ok email={token}");
            self.session = Session::Authenticated(account.clone());
        }
        Ok(())
    }
}
