use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A family member nested inside exactly one resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub relation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: String,
    pub flat_no: String,
    pub owner_name: String,
    pub age: u32,
    /// User-declared, not cross-checked against `members.len()`.
    pub total_members: u32,
    pub members: Vec<FamilyMember>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Family member as supplied by a caller; `id` is assigned when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyMemberInput {
    pub id: Option<String>,
    pub name: String,
    pub age: u32,
    pub relation: String,
}

/// Payload for `RecordStore::upsert_resident`.
///
/// With `id` set to a stored resident the record is replaced in place,
/// otherwise a new resident is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentInput {
    pub id: Option<String>,
    pub flat_no: String,
    pub owner_name: String,
    pub age: u32,
    pub total_members: u32,
    pub members: Vec<FamilyMemberInput>,
}

impl FamilyMemberInput {
    pub fn new(name: &str, age: u32, relation: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            age,
            relation: relation.to_string(),
        }
    }
}

impl From<&FamilyMember> for FamilyMemberInput {
    fn from(m: &FamilyMember) -> Self {
        Self {
            id: Some(m.id.clone()),
            name: m.name.clone(),
            age: m.age,
            relation: m.relation.clone(),
        }
    }
}

impl From<&Resident> for ResidentInput {
    fn from(r: &Resident) -> Self {
        Self {
            id: Some(r.id.clone()),
            flat_no: r.flat_no.clone(),
            owner_name: r.owner_name.clone(),
            age: r.age,
            total_members: r.total_members,
            members: r.members.iter().map(FamilyMemberInput::from).collect(),
        }
    }
}

impl Resident {
    /// "Name (age, relation); ..." used by list output and CSV export.
    pub fn members_summary(&self) -> String {
        self.members
            .iter()
            .map(|m| format!("{} ({}, {})", m.name, m.age, m.relation))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
