//! Management screens: the searchable user list and the read-only
//! deposit/withdraw listing.
//!
//! [`UserScreen`] wires the generic list controller to the user search
//! call and translates gateway failures into the fixed notice strings
//! the console shows. [`TransactionScreen`] is simpler - one filtered
//! fetch, no paging. Failed fetches never clear rows already on
//! screen.

use ledgerdesk_core::{TransactionRecord, UserRecord};

use crate::gateway::{Gateway, GatewayError, TransactionFilter};
use crate::list::{ListError, ListState, PagedList};
use crate::notice;

/// The user-management screen's state.
#[derive(Debug, Default)]
pub struct UserScreen {
    query: String,
    list: PagedList<UserRecord>,
}

impl UserScreen {
    /// The last submitted search term.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The list controller, for rendering.
    #[must_use]
    pub const fn list(&self) -> &PagedList<UserRecord> {
        &self.list
    }

    /// Run a fresh search. Replaces the rows and resets paging; on
    /// failure the previous rows stay visible and the list carries the
    /// notice as its error state.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Busy`] while a fetch is already in flight.
    pub async fn search(&mut self, gateway: &Gateway, query: &str) -> Result<(), ListError> {
        self.list.begin_search()?;
        self.query = query.to_string();
        match gateway.search_users(query, None).await {
            Ok(rows) => {
                self.list.complete(rows);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "user search failed");
                self.list.fail(notice::FAILED_GET_USERS);
                Ok(())
            }
        }
    }

    /// Fetch the next page with the stored cursor and append it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Busy`] while a fetch is in flight and
    /// [`ListError::NoCursor`] when the last page ended the result
    /// set.
    pub async fn load_more(&mut self, gateway: &Gateway) -> Result<(), ListError> {
        let cursor = self.list.begin_load_more()?;
        match gateway.search_users(&self.query, Some(&cursor)).await {
            Ok(rows) => {
                self.list.complete(rows);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "user page fetch failed");
                self.list.fail(notice::FAILED_GET_USERS);
                Ok(())
            }
        }
    }

    /// True when the last completed fetch returned nothing to show.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        matches!(self.list.state(), ListState::Ready) && self.list.rows().is_empty()
    }

    /// Patch one cached row in place after a detail-editor save, so
    /// the list reflects the edit without a refetch.
    pub fn patch_row(&mut self, replacement: UserRecord) {
        self.list.patch_row(replacement);
    }
}

/// The deposit/withdraw management screen's state.
#[derive(Debug, Default)]
pub struct TransactionScreen {
    filter: TransactionFilter,
    rows: Vec<TransactionRecord>,
}

impl TransactionScreen {
    /// The last successfully applied filter.
    #[must_use]
    pub const fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    /// Fetched transaction rows.
    #[must_use]
    pub fn rows(&self) -> &[TransactionRecord] {
        &self.rows
    }

    /// Fetch transactions for the filter. The filter and rows commit
    /// only on success; a failed fetch leaves the previous result set
    /// on screen.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure; the caller shows
    /// [`notice::FAILED_GET_TRANSACTIONS`].
    pub async fn search(
        &mut self,
        gateway: &Gateway,
        filter: TransactionFilter,
    ) -> Result<(), GatewayError> {
        let rows = gateway.fetch_transactions(&filter).await.inspect_err(
            |err| tracing::warn!(error = %err, "transaction fetch failed"),
        )?;
        self.filter = filter;
        self.rows = rows;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(uid: &str, next_key: Option<&str>) -> UserRecord {
        UserRecord {
            user_uid: uid.to_string(),
            next_key: next_key.map(str::to_string),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_empty_result_detection() {
        let mut screen = UserScreen::default();
        assert!(!screen.is_empty_result());

        screen.list.begin_search().unwrap();
        screen.list.complete(Vec::new());
        assert!(screen.is_empty_result());

        screen.list.begin_search().unwrap();
        screen.list.complete(vec![row("U1", None)]);
        assert!(!screen.is_empty_result());
    }

    #[test]
    fn test_transaction_screen_starts_unfiltered() {
        let screen = TransactionScreen::default();
        assert_eq!(*screen.filter(), TransactionFilter::default());
        assert!(screen.rows().is_empty());
    }

    #[test]
    fn test_patch_row_updates_cached_entry() {
        let mut screen = UserScreen::default();
        screen.list.begin_search().unwrap();
        screen.list.complete(vec![row("U1", None), row("U2", None)]);

        let mut edited = row("U2", None);
        edited.user_name = Some("Lee".to_string());
        screen.patch_row(edited);

        assert_eq!(screen.list().rows()[1].user_name.as_deref(), Some("Lee"));
        assert_eq!(screen.list().rows()[0].user_name, None);
    }
}
