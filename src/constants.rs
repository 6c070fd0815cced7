//! On-chain identifiers for the portfolio object and the Move package that
//! created it.

use crate::network::Network;

/// Object queried by default on every load.
pub const PORTFOLIO_OBJECT_ID: &str =
    "0x6f96421c82277b14cf6f0bd7479f12e1bdcc5f96aa1f28d4d36f43ea7689d37d";

/// A placeholder ID, used where nothing has been deployed yet.
pub const UNDEPLOYED_ID: &str = "0x0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    #[allow(dead_code)] // no local network in the registry
    Local,
    Testnet,
    Mainnet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub package_id: &'static str,
    pub portfolio_id: &'static str,
}

impl Deployment {
    pub fn is_deployed(&self) -> bool {
        self.package_id != UNDEPLOYED_ID
    }
}

impl From<Network> for Environment {
    fn from(network: Network) -> Self {
        match network {
            Network::Testnet => Environment::Testnet,
            Network::Mainnet => Environment::Mainnet,
        }
    }
}

impl Environment {
    pub fn deployment(self) -> Deployment {
        match self {
            Environment::Local => Deployment {
                package_id: UNDEPLOYED_ID,
                portfolio_id: UNDEPLOYED_ID,
            },
            Environment::Testnet => Deployment {
                package_id: "0xb2eeb0e6b02570c6e4c386751800b4d1d8f6a851728e171fcb5bc7ff8d534e94",
                portfolio_id: "0x0f607e3f9f07f7cefb451bfa8129a16b2ebf71438ee84336b198388871d81140",
            },
            // portfolio object not created yet on mainnet
            Environment::Mainnet => Deployment {
                package_id: "0x0d1e09f5967250d089bcdaae11c040d8baa5cdbe8d9d016a9d7db549199e9a01",
                portfolio_id: UNDEPLOYED_ID,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_local_is_undeployed() {
        assert!(!Environment::Local.deployment().is_deployed());
        assert!(Environment::Testnet.deployment().is_deployed());
        assert!(Environment::Mainnet.deployment().is_deployed());
        assert_eq!(Environment::Mainnet.deployment().portfolio_id, UNDEPLOYED_ID);
        assert_eq!(Environment::from(Network::Testnet), Environment::Testnet);
    }
}
