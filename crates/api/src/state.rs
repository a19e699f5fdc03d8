//! Shared handler state.

use std::path::PathBuf;

use gatehouse_store::AccessService;

/// Everything a handler needs, injected as an `Extension<Arc<AppState>>`.
pub struct AppState {
    pub service: AccessService,
    pub admin_token: String,
    pub terms_path: PathBuf,
}

impl AppState {
    pub fn new(service: AccessService, admin_token: String, terms_path: PathBuf) -> Self {
        Self {
            service,
            admin_token,
            terms_path,
        }
    }
}
