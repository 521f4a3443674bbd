pub mod resident;
pub mod stats;
pub mod visitor;
pub mod visitor_type;

pub use resident::{FamilyMember, FamilyMemberInput, Resident, ResidentInput};
pub use stats::LogbookStats;
pub use visitor::{Visitor, VisitorInput};
pub use visitor_type::VisitorType;
