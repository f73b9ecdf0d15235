use crate::domain::action::Action;
use crate::domain::model::{ApiResponse, Fields};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Named operations of the spreadsheet backend. Implementors only provide
/// `dispatch`; every wrapper is a fixed action plus its fields.
#[async_trait]
pub trait SheetsApi: Send + Sync {
    async fn dispatch(&self, action: Action, fields: Fields) -> Result<ApiResponse>;

    /// Dispatches by wire name. Unrecognised names fail before any request.
    async fn dispatch_raw(&self, action: &str, fields: Fields) -> Result<ApiResponse> {
        let action = match action.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                tracing::error!("API request failed: {}", e);
                return Err(e);
            }
        };
        self.dispatch(action, fields).await
    }

    async fn get_clients(&self) -> Result<ApiResponse> {
        self.dispatch(Action::GetClients, Fields::new()).await
    }

    async fn save_client(&self, client: Fields) -> Result<ApiResponse> {
        self.dispatch(Action::SaveClient, client).await
    }

    async fn delete_client(&self, client_id: &str) -> Result<ApiResponse> {
        self.dispatch(Action::DeleteClient, Fields::new().with("clientId", client_id))
            .await
    }

    async fn get_projects(&self) -> Result<ApiResponse> {
        self.dispatch(Action::GetProjects, Fields::new()).await
    }

    async fn save_project(&self, project: Fields) -> Result<ApiResponse> {
        self.dispatch(Action::SaveProject, project).await
    }

    async fn delete_project(&self, project_id: &str) -> Result<ApiResponse> {
        self.dispatch(Action::DeleteProject, Fields::new().with("projectId", project_id))
            .await
    }

    async fn get_invoices(&self) -> Result<ApiResponse> {
        self.dispatch(Action::GetInvoices, Fields::new()).await
    }

    /// Whole-invoice save kept for older backends; new code saves rows.
    async fn save_invoice(&self, invoice: Fields) -> Result<ApiResponse> {
        self.dispatch(Action::SaveInvoice, invoice).await
    }

    async fn save_invoice_row(&self, row: Fields) -> Result<ApiResponse> {
        self.dispatch(Action::SaveInvoiceRow, row).await
    }
}
