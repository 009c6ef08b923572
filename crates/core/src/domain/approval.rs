/// Lifecycle state of a company record. Rejection deletes the row, so there is
/// no `Rejected` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
}

impl ApprovalStatus {
    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl From<bool> for ApprovalStatus {
    fn from(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Pending
        }
    }
}

impl From<ApprovalStatus> for bool {
    fn from(value: ApprovalStatus) -> Self {
        value.is_approved()
    }
}
