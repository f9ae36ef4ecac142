use serde::{Deserialize, Serialize};

/// A money value as sent over the wire: raw minor units plus the two-decimal
/// text shown to users (e.g. `{"minor": 22500, "formatted": "₹225.00"}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub minor: i64,
    pub formatted: String,
}

pub mod catalog {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CatalogView {
        pub rooms: Vec<RoomView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RoomView {
        pub name: String,
        pub designs: Vec<DesignView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DesignView {
        pub name: String,
        pub price: Amount,
        pub extras: Vec<ExtraView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExtraView {
        pub name: String,
        pub price: Amount,
    }
}

pub mod cart {
    use super::*;

    fn one() -> u32 {
        1
    }

    /// Request body for adding a free-form item.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub name: String,
        pub price_minor: i64,
        /// Defaults to 1.
        #[serde(default = "one")]
        pub quantity: u32,
        pub group: Option<String>,
    }

    /// Request body for adding a whole catalog design.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DesignSelect {
        pub room: String,
        pub design: String,
    }

    /// Request body for adding extras of a catalog design.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExtraSelect {
        pub room: String,
        pub design: String,
        pub extra: String,
        pub quantity: u32,
    }

    /// Identity of a cart item.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemKeyBody {
        pub name: String,
        pub group: Option<String>,
    }

    /// Response body of every addition: `accepted` is `false` when the item
    /// did not fit, `reason` then says why.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AddResponse {
        pub accepted: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,
        pub remaining: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CartItemView {
        pub name: String,
        pub group: Option<String>,
        pub unit_price: Amount,
        pub quantity: u32,
        pub line_total: Amount,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GroupView {
        pub label: String,
        pub total: Amount,
        pub items: Vec<CartItemView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CartView {
        pub budget: Amount,
        pub total_cost: Amount,
        pub remaining: Amount,
        pub over_budget: bool,
        pub groups: Vec<GroupView>,
    }
}

pub mod budget {
    use super::*;

    /// Raw user input such as `"150000"` or `"150000.50"`, parsed by the
    /// server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        pub value: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetResponse {
        pub accepted: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,
        pub budget: Amount,
    }
}

pub mod invoice {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct InvoiceLineView {
        pub description: String,
        pub name: String,
        pub group: Option<String>,
        pub unit_price: Amount,
        pub quantity: u32,
        pub line_total: Amount,
    }

    /// `total` is the ledger total; `subtotal` and `tax` are its 90% and 10%.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct InvoiceView {
        pub currency: String,
        pub lines: Vec<InvoiceLineView>,
        pub subtotal: Amount,
        pub tax: Amount,
        pub total: Amount,
    }
}

pub mod submission {
    use super::*;
    use crate::invoice::InvoiceView;

    /// Contact details entered at checkout.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ContactSubmission {
        pub email: String,
        pub phone: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SubmissionItem {
        pub name: String,
        pub group: Option<String>,
        pub price_minor: i64,
        pub quantity: u32,
    }

    /// Everything handed over once a checkout is submitted.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Submission {
        pub email: String,
        pub phone: String,
        pub items: Vec<SubmissionItem>,
        pub total_cost_minor: i64,
        pub invoice: InvoiceView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SubmitResponse {
        pub message: String,
        pub total: Amount,
    }
}
