//! Server-side state for the two UI surfaces: the student table and the
//! creation drawer. The route handlers own no state of their own; they
//! drive these containers and render whatever the containers hold.

use crate::{data::Student, error::RollcallError};

/// The authoritative client-side copy of the student collection.
///
/// Refreshes are bracketed by an epoch token: a response belonging to a
/// superseded refresh is discarded without touching anything, so a
/// late-arriving reply can never clobber newer data. There is no
/// cancellation, just this guard.
#[derive(Debug, Default)]
pub struct ListView {
    students: Vec<Student>,
    is_loading: bool,
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

#[derive(Debug)]
pub enum RefreshOutcome {
    /// The collection now mirrors the server's response, order preserved.
    Replaced,
    /// The fetch failed; the previously held rows are untouched.
    Failed(RollcallError),
    /// The token was superseded by a newer refresh; nothing was touched.
    Stale,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn begin_refresh(&mut self) -> RefreshToken {
        self.is_loading = true;
        self.epoch += 1;
        RefreshToken(self.epoch)
    }

    /// Settle a refresh. Whatever the result, a current token always clears
    /// `is_loading` - a fetch failure must never leave the view stuck on
    /// the spinner.
    pub fn complete_refresh(
        &mut self,
        token: RefreshToken,
        result: Result<Vec<Student>, RollcallError>,
    ) -> RefreshOutcome {
        if token.0 != self.epoch {
            return RefreshOutcome::Stale;
        }

        self.is_loading = false;
        match result {
            Ok(students) => {
                self.students = students;
                RefreshOutcome::Replaced
            }
            Err(e) => RefreshOutcome::Failed(e),
        }
    }
}

/// State for the creation drawer: whether it is shown, and whether a
/// submission is currently in flight.
#[derive(Debug, Default)]
pub struct DrawerForm {
    is_open: bool,
    is_submitting: bool,
}

impl DrawerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub const fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.is_submitting = false;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.is_submitting = false;
    }

    /// Claim the right to submit. Returns `false` while an earlier
    /// submission has not settled yet, so a double-click issues one network
    /// call and not two.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        true
    }

    /// Clears the in-flight flag; called on success and failure alike.
    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Gender;

    fn student(id: i64, first_name: &str) -> Student {
        Student {
            id,
            first_name: first_name.to_string(),
            last_name: "Lovelace".to_string(),
            email: "a@x.com".to_string(),
            gender: Gender::Female,
        }
    }

    fn failure() -> RollcallError {
        RollcallError::ApiRejected {
            status: 500,
            error: "Internal Server Error".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn successful_refresh_replaces_the_collection_in_server_order() {
        let mut view = ListView::new();
        let token = view.begin_refresh();
        assert!(view.is_loading());

        let fetched = vec![student(2, "Grace"), student(1, "Ada")];
        let outcome = view.complete_refresh(token, Ok(fetched.clone()));

        assert!(matches!(outcome, RefreshOutcome::Replaced));
        assert!(!view.is_loading());
        assert_eq!(view.students(), fetched.as_slice());
    }

    #[test]
    fn failed_refresh_keeps_prior_rows_and_clears_loading() {
        let mut view = ListView::new();
        let token = view.begin_refresh();
        view.complete_refresh(token, Ok(vec![student(1, "Ada")]));

        let token = view.begin_refresh();
        assert!(view.is_loading());
        let outcome = view.complete_refresh(token, Err(failure()));

        assert!(matches!(outcome, RefreshOutcome::Failed(_)));
        assert!(!view.is_loading(), "loading must never stay stuck on error");
        assert_eq!(view.students(), [student(1, "Ada")].as_slice());
    }

    #[test]
    fn stale_refresh_response_is_a_no_op() {
        let mut view = ListView::new();
        let old_token = view.begin_refresh();
        let new_token = view.begin_refresh();

        // The superseded response arrives late and must not touch anything,
        // including the loading flag the newer refresh owns.
        let outcome = view.complete_refresh(old_token, Ok(vec![student(9, "Stale")]));
        assert!(matches!(outcome, RefreshOutcome::Stale));
        assert!(view.students().is_empty());
        assert!(view.is_loading());

        view.complete_refresh(new_token, Ok(vec![student(1, "Ada")]));
        assert!(!view.is_loading());
        assert_eq!(view.students(), [student(1, "Ada")].as_slice());
    }

    #[test]
    fn submit_guard_blocks_a_second_click_until_the_first_settles() {
        let mut drawer = DrawerForm::new();
        drawer.open();

        assert!(drawer.begin_submit());
        assert!(!drawer.begin_submit(), "double-submit must be refused");

        drawer.finish_submit();
        assert!(!drawer.is_submitting());
        assert!(drawer.begin_submit(), "a settled form accepts a new attempt");
    }

    #[test]
    fn closing_the_drawer_clears_the_in_flight_flag() {
        let mut drawer = DrawerForm::new();
        drawer.open();
        assert!(drawer.is_open());
        assert!(drawer.begin_submit());

        drawer.close();
        assert!(!drawer.is_open());
        assert!(!drawer.is_submitting());
    }
}
