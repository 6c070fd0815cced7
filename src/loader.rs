use tracing::{info, warn};

use crate::error::LoadError;
use crate::models::PortfolioRecord;
use crate::network::Network;
use crate::rpc::{get_object_request, parse_object_reply, RpcTransport};
use crate::state::{PortfolioState, Update};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Fetched record is now displayed.
    Applied,
    /// Fetch failed; the previous record stays and the notice explains why.
    Fallback { notice: String },
    /// A newer load started before this one finished; its result was dropped.
    Superseded,
}

pub fn fallback_notice(err: &LoadError) -> String {
    format!("Note: Using default data (blockchain fetch failed: {})", err)
}

pub struct PortfolioLoader<T> {
    transport: T,
    object_id: String,
    defaults: PortfolioRecord,
}

impl<T: RpcTransport> PortfolioLoader<T> {
    pub fn new(transport: T, object_id: impl Into<String>) -> Self {
        Self {
            transport,
            object_id: object_id.into(),
            defaults: PortfolioRecord::default(),
        }
    }

    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// One `sui_getObject` round trip, mapped onto a full record.
    pub async fn fetch(&self, network: Network) -> Result<PortfolioRecord, LoadError> {
        let config = network.config();
        let request = get_object_request(&self.object_id)?;
        let reply = self.transport.post_json(config.rpc_url, &request).await?;
        let partial = parse_object_reply(&reply)?;
        Ok(partial.merge_with_defaults(&self.defaults))
    }

    /// Fetches and never fails: on error `current` comes back unchanged along
    /// with a notice. The notice is empty on success.
    pub async fn load(&self, network: Network, current: &PortfolioRecord) -> (PortfolioRecord, String) {
        match self.fetch(network).await {
            Ok(record) => (record, String::new()),
            Err(err) => {
                warn!(kind = err.kind(), "Using default data. Blockchain fetch failed: {}", err);
                (current.clone(), fallback_notice(&err))
            }
        }
    }

    /// Loads `network` into `state`. Used both for the initial load and for
    /// every network toggle.
    pub async fn refresh(&self, state: &PortfolioState, network: Network) -> LoadOutcome {
        let ticket = state.begin(network);
        info!(
            "Loading portfolio {} from {} (load #{})",
            self.object_id,
            network,
            ticket.seq()
        );

        let current = state.record();
        let (record, notice) = self.load(network, &current).await;
        let (update, outcome) = if notice.is_empty() {
            (Update::Replace(record), LoadOutcome::Applied)
        } else {
            (
                Update::Keep {
                    notice: notice.clone(),
                },
                LoadOutcome::Fallback { notice },
            )
        };

        if ticket.complete(update) {
            outcome
        } else {
            info!("Discarding stale response for {}", network);
            LoadOutcome::Superseded
        }
    }

    pub async fn toggle(&self, state: &PortfolioState) -> LoadOutcome {
        let next = state.snapshot().network.toggle();
        self.refresh(state, next).await
    }
}
