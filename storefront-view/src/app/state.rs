use storefront_shared::{OrderStatus, Product};

/// Everything the storefront displays. Each slot has exactly one writer:
/// the catalog loader, the order submitter or the status checker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub products: Vec<Product>,
    pub order_id: Option<String>,
    pub order_status: Option<StatusSnapshot>,
    pub banners: Banners,
}

/// A status response together with the order it was fetched for
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub order_id: String,
    pub status: OrderStatus,
}

/// Inline error message per request site; cleared on that site's next success
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Banners {
    pub catalog: Option<String>,
    pub order: Option<String>,
    pub status: Option<StatusBanner>,
}

/// A failed status check, tagged like [`StatusSnapshot`]
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    pub order_id: String,
    pub message: String,
}

/// Ids are used as a URL path segment; `.` and `..` would be
/// collapsed away by the URL builder.
pub fn is_usable_order_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".."
}

impl ViewState {
    /// The order id, if one is set and usable
    pub fn current_order(&self) -> Option<&str> {
        self.order_id.as_deref().filter(|id| is_usable_order_id(id))
    }

    pub fn can_check_status(&self) -> bool {
        self.current_order().is_some()
    }

    /// The status of the current order. A snapshot taken for an
    /// earlier order is not shown.
    pub fn current_status(&self) -> Option<&OrderStatus> {
        let order_id = self.current_order()?;
        self.order_status
            .as_ref()
            .filter(|snapshot| snapshot.order_id == order_id)
            .map(|snapshot| &snapshot.status)
    }

    /// The status-check error for the current order, if its last check failed
    pub fn current_status_banner(&self) -> Option<&str> {
        let order_id = self.current_order()?;
        self.banners
            .status
            .as_ref()
            .filter(|banner| banner.order_id == order_id)
            .map(|banner| banner.message.as_str())
    }
}
