use {
    crate::{
        CHAIN_ID, DEMO_ADDRESS, KeyValueStore, STORAGE_KEY, WalletError, WalletExtension,
        WalletIdentity, WalletProvider,
    },
    std::{mem, sync::Arc},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    /// Held only while [`WalletConnector::connect_extension`] waits on the
    /// extension. The call borrows the connector mutably, so callers never
    /// read this state; it is resolved before the call returns and rolled
    /// back if the call is dropped midway.
    Connecting,
    Connected(WalletIdentity),
}

/// Tracks which wallet the user picked and remembers it across sessions.
///
/// Storage problems never surface as errors: unreadable or corrupted data
/// means no wallet was saved, and failed writes are only logged.
pub struct WalletConnector<S> {
    store: S,
    extension: Option<Arc<dyn WalletExtension + Send + Sync>>,
    state: WalletState,
    error: Option<WalletError>,
}

impl<S> WalletConnector<S>
where
    S: KeyValueStore,
{
    /// Create a connector, restoring the identity saved in `store` if any.
    /// Pass `None` as `extension` when no wallet extension is installed.
    pub fn new(store: S, extension: Option<Arc<dyn WalletExtension + Send + Sync>>) -> Self {
        let state = match restore(&store) {
            Some(identity) => WalletState::Connected(identity),
            None => WalletState::Disconnected,
        };

        Self {
            store,
            extension,
            state,
            error: None,
        }
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn identity(&self) -> Option<&WalletIdentity> {
        match &self.state {
            WalletState::Connected(identity) => Some(identity),
            _ => None,
        }
    }

    /// The error of the last action, for display. Cleared by the next action.
    pub fn error(&self) -> Option<&WalletError> {
        self.error.as_ref()
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    /// Connect through the wallet extension, adopting its first account.
    ///
    /// On failure, or when the returned future is dropped before it
    /// completes, the connector goes back to the state it was in before the
    /// call.
    pub async fn connect_extension(&mut self) -> Result<WalletIdentity, WalletError> {
        self.error = None;

        let Some(extension) = self.extension.clone() else {
            return Err(self.fail(WalletError::ExtensionMissing));
        };

        let pending = PendingConnect::start(&mut self.state);
        let result = request_identity(extension.as_ref()).await;
        let previous = pending.finish();

        match result {
            Ok(identity) => {
                self.save(identity.clone());
                Ok(identity)
            },
            Err(err) => {
                self.state = previous;
                Err(self.fail(err))
            },
        }
    }

    /// Adopt the demo identity. Never calls the extension.
    pub fn use_demo_identity(&mut self) -> WalletIdentity {
        self.error = None;

        let identity = WalletIdentity::new(DEMO_ADDRESS, WalletProvider::Demo);
        self.save(identity.clone());

        identity
    }

    pub fn disconnect(&mut self) {
        self.error = None;
        self.state = WalletState::Disconnected;

        if let Err(err) = self.store.remove(STORAGE_KEY) {
            tracing::warn!(%err, "Failed to clear saved wallet");
        }
    }

    fn save(&mut self, identity: WalletIdentity) {
        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(err) = self.store.set(STORAGE_KEY, &raw) {
                    tracing::warn!(%err, "Failed to save wallet");
                }
            },
            Err(err) => tracing::warn!(%err, "Failed to encode wallet"),
        }

        self.state = WalletState::Connected(identity);
    }

    fn fail(&mut self, err: WalletError) -> WalletError {
        self.error = Some(err.clone());
        err
    }
}

/// Puts the connector back in its previous state unless the connection
/// attempt ran to completion.
struct PendingConnect<'a> {
    state: &'a mut WalletState,
    previous: Option<WalletState>,
}

impl<'a> PendingConnect<'a> {
    fn start(state: &'a mut WalletState) -> Self {
        let previous = mem::replace(state, WalletState::Connecting);

        Self {
            state,
            previous: Some(previous),
        }
    }

    /// The state before the attempt. `Connecting` stays in place for the
    /// caller to replace.
    fn finish(mut self) -> WalletState {
        self.previous.take().unwrap_or(WalletState::Disconnected)
    }
}

impl Drop for PendingConnect<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!("Wallet connection abandoned");
            *self.state = previous;
        }
    }
}

async fn request_identity(
    extension: &(dyn WalletExtension + Send + Sync),
) -> Result<WalletIdentity, WalletError> {
    let accounts = match extension.enable(CHAIN_ID).await {
        Ok(()) => extension.accounts(CHAIN_ID).await,
        Err(err) => Err(err),
    };

    match accounts {
        Ok(accounts) => match accounts.into_iter().next() {
            Some(account) => Ok(WalletIdentity::new(account.address, WalletProvider::Keplr)),
            None => Err(WalletError::NoAccounts),
        },
        Err(err) => {
            tracing::warn!(%err, chain_id = CHAIN_ID, "Wallet extension refused to connect");
            Err(WalletError::ConnectionFailed)
        },
    }
}

fn restore<S>(store: &S) -> Option<WalletIdentity>
where
    S: KeyValueStore,
{
    let raw = match store.get(STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            tracing::warn!(%err, "Failed to read saved wallet");
            return None;
        },
    };

    let identity = WalletIdentity::from_stored(&raw);

    if identity.is_none() {
        tracing::debug!("Discarding corrupted saved wallet");

        if let Err(err) = store.remove(STORAGE_KEY) {
            tracing::warn!(%err, "Failed to clear corrupted saved wallet");
        }
    }

    identity
}
