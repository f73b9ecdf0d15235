use crate::utils::error::DispatchError;
use std::fmt;
use std::str::FromStr;

/// Operations the spreadsheet backend understands. The wire name is the
/// camelCase identifier sent as the `action` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GetClients,
    SaveClient,
    DeleteClient,
    GetProjects,
    SaveProject,
    DeleteProject,
    GetInvoices,
    SaveInvoice,
    SaveInvoiceRow,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::GetClients,
        Action::SaveClient,
        Action::DeleteClient,
        Action::GetProjects,
        Action::SaveProject,
        Action::DeleteProject,
        Action::GetInvoices,
        Action::SaveInvoice,
        Action::SaveInvoiceRow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetClients => "getClients",
            Action::SaveClient => "saveClient",
            Action::DeleteClient => "deleteClient",
            Action::GetProjects => "getProjects",
            Action::SaveProject => "saveProject",
            Action::DeleteProject => "deleteProject",
            Action::GetInvoices => "getInvoices",
            Action::SaveInvoice => "saveInvoice",
            Action::SaveInvoiceRow => "saveInvoiceRow",
        }
    }

    /// Whether the backend answers this action with a `data` array.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Action::GetClients | Action::GetProjects | Action::GetInvoices
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownAction {
                action: s.to_string(),
            })
    }
}
