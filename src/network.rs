use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Network {
    Testnet,
    #[default]
    Mainnet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub id: Network,
    pub display_name: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

static TESTNET: NetworkConfig = NetworkConfig {
    id: Network::Testnet,
    display_name: "Testnet",
    rpc_url: "https://fullnode.testnet.sui.io",
    explorer_url: "https://suiscan.xyz/testnet",
};

static MAINNET: NetworkConfig = NetworkConfig {
    id: Network::Mainnet,
    display_name: "Mainnet",
    rpc_url: "https://fullnode.mainnet.sui.io",
    explorer_url: "https://suiscan.xyz/mainnet",
};

static REGISTRY: [&NetworkConfig; 2] = [&TESTNET, &MAINNET];

impl Network {
    pub fn config(self) -> &'static NetworkConfig {
        match self {
            Network::Testnet => &TESTNET,
            Network::Mainnet => &MAINNET,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Network::Testnet => Network::Mainnet,
            Network::Mainnet => Network::Testnet,
        }
    }

    pub fn all() -> impl Iterator<Item = Network> {
        REGISTRY.iter().map(|entry| entry.id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config().display_name)
    }
}

impl NetworkConfig {
    /// Explorer page for a single object on this network.
    pub fn object_url(&self, object_id: &str) -> String {
        format!("{}/object/{}", self.explorer_url, object_id)
    }
}
