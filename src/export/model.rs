// src/export/model.rs

use crate::models::{Resident, Visitor};
use serde::Serialize;

/// Flat resident row for CSV export; members collapse into one column.
#[derive(Serialize, Clone, Debug)]
pub struct ResidentExport {
    pub id: String,
    pub flat_no: String,
    pub owner_name: String,
    pub age: u32,
    pub total_members: u32,
    pub members: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Flat visitor row for CSV export. `out_time` is empty while the visitor is inside.
#[derive(Serialize, Clone, Debug)]
pub struct VisitorExport {
    pub id: String,
    pub name: String,
    pub mobile_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub flat_no: String,
    pub purpose: String,
    pub in_time: String,
    pub out_time: String,
    pub status: String,
}

impl From<&Resident> for ResidentExport {
    fn from(r: &Resident) -> Self {
        Self {
            id: r.id.clone(),
            flat_no: r.flat_no.clone(),
            owner_name: r.owner_name.clone(),
            age: r.age,
            total_members: r.total_members,
            members: r.members_summary(),
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.to_rfc3339(),
        }
    }
}

impl From<&Visitor> for VisitorExport {
    fn from(v: &Visitor) -> Self {
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            mobile_number: v.mobile_number.clone(),
            kind: v.kind.as_str().to_string(),
            flat_no: v.flat_no.clone(),
            purpose: v.purpose.clone(),
            in_time: v.in_time.to_rfc3339(),
            out_time: v.out_time.map(|t| t.to_rfc3339()).unwrap_or_default(),
            status: if v.is_active() { "active" } else { "checked out" }.to_string(),
        }
    }
}
