//! Audit orchestration and its result type.

pub mod auditor;
pub mod result;
pub mod upgrade;

pub use auditor::Auditor;
pub use result::AuditResult;
pub use upgrade::Upgrade;
