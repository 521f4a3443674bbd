use super::visitor_type::VisitorType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: String,
    pub name: String,
    pub mobile_number: String,
    #[serde(rename = "type")]
    pub kind: VisitorType,
    pub flat_no: String,
    pub purpose: String,
    pub in_time: DateTime<Utc>,
    /// `None` while the visitor is on the premises.
    pub out_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Editable visitor fields, used both for check-in and for edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorInput {
    pub name: String,
    pub mobile_number: String,
    pub kind: VisitorType,
    pub flat_no: String,
    pub purpose: String,
}

impl Visitor {
    pub fn is_active(&self) -> bool {
        self.out_time.is_none()
    }

    /// Overwrite the editable fields; timestamps are left alone.
    pub(crate) fn apply(&mut self, patch: VisitorInput) {
        self.name = patch.name;
        self.mobile_number = patch.mobile_number;
        self.kind = patch.kind;
        self.flat_no = patch.flat_no;
        self.purpose = patch.purpose;
    }
}

impl From<&Visitor> for VisitorInput {
    fn from(v: &Visitor) -> Self {
        Self {
            name: v.name.clone(),
            mobile_number: v.mobile_number.clone(),
            kind: v.kind,
            flat_no: v.flat_no.clone(),
            purpose: v.purpose.clone(),
        }
    }
}
