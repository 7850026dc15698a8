use std::ops::Deref;
use std::sync::Arc;

use api::exchange::WalletStatus;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    /// The connected wallet, or `None` when no key is configured server-side.
    pub wallet: Option<WalletStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(wallet: Option<WalletStatus>) -> Self {
        Self(Arc::new(AppStateData { wallet }))
    }
}
