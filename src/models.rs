use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether a line item bills parts or hours.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Material,
    Labor,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Material => "Material",
            Self::Labor => "Labor",
        }
    }
}

/// One priced row of a quote or work order.
///
/// `total_cents` is computed upstream and is displayed as-is; it is never
/// recomputed from `quantity * unit_price_cents`.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LineItem {
    #[schema(example = "Air filter 20x25")]
    pub description: String,
    pub kind: ItemKind,
    #[schema(example = 2)]
    pub quantity: i64,
    #[schema(example = 5000)]
    pub unit_price_cents: i64,
    #[schema(example = 10000)]
    pub total_cents: i64,
}

/// Client block data. Every optional field renders as `-` when absent.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct PartyInfo {
    #[schema(example = "Cool Breeze Offices Ltd.")]
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct QuoteDocument {
    #[schema(example = 7)]
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub valid_until: Option<NaiveDate>,
    pub status: QuoteStatus,
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Stored total from the quote record. The rendered total is the sum of
    /// the rendered rows instead.
    #[serde(default)]
    pub total_cents: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Installation,
    Maintenance,
    Repair,
    Inspection,
    Cleaning,
    Other,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Installation => "Installation",
            Self::Maintenance => "Preventive Maintenance",
            Self::Repair => "Corrective Repair",
            Self::Inspection => "Inspection",
            Self::Cleaning => "Cleaning & Sanitization",
            Self::Other => "Other",
        }
    }
}

/// The service request a work order was opened for.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ServiceInfo {
    pub service_type: ServiceType,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Technician {
    #[schema(example = "Ana Souza")]
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
}

impl Technician {
    /// Secondary line under the name: role, then email.
    pub fn detail(&self) -> Option<&str> {
        self.role.as_deref().or(self.email.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct WorkOrderDocument {
    #[schema(example = 12)]
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub scheduled_date: Option<NaiveDate>,
    pub status: WorkOrderStatus,
    pub description: Option<String>,
    /// Work-order level notes shown inside the service box.
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// Everything needed to render a quote.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct QuoteReportData {
    pub quote: QuoteDocument,
    pub client: PartyInfo,
}

/// Everything needed to render a work order.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct WorkOrderReportData {
    pub work_order: WorkOrderDocument,
    pub service: ServiceInfo,
    pub client: PartyInfo,
    #[serde(default)]
    pub technicians: Vec<Technician>,
}
