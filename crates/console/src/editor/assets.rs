//! Assets pane: read-only holdings and offering views.

use ledgerdesk_core::{HoldingRecord, OfferRecord};

/// Which dataset the assets pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetView {
    /// Listed-symbol positions.
    #[default]
    Holdings,
    /// Public-offering subscriptions.
    Offers,
}

impl AssetView {
    /// Parse a view name as typed at the console.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "holdings" => Some(Self::Holdings),
            "offers" => Some(Self::Offers),
            _ => None,
        }
    }
}

/// The assets pane's state. No dirty tracking and no save: both
/// datasets are read-only.
#[derive(Debug, Default)]
pub struct AssetsPane {
    view: AssetView,
    holdings: Vec<HoldingRecord>,
    offers: Vec<OfferRecord>,
}

impl AssetsPane {
    /// The active view.
    #[must_use]
    pub const fn view(&self) -> AssetView {
        self.view
    }

    /// Switch the active view; the caller refetches the dataset.
    pub const fn set_view(&mut self, view: AssetView) {
        self.view = view;
    }

    /// Replace the holdings rows.
    pub fn load_holdings(&mut self, rows: Vec<HoldingRecord>) {
        self.holdings = rows;
    }

    /// Replace the offering rows.
    pub fn load_offers(&mut self, rows: Vec<OfferRecord>) {
        self.offers = rows;
    }

    /// Holdings rows.
    #[must_use]
    pub fn holdings(&self) -> &[HoldingRecord] {
        &self.holdings
    }

    /// Offering rows.
    #[must_use]
    pub fn offers(&self) -> &[OfferRecord] {
        &self.offers
    }

    /// Discard both datasets and reset the view.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
