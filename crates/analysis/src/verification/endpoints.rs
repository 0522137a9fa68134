//! Static per-chain registry of explorer verification endpoints.
//!
//! Unsupported chain ids are an explicit failure mode at the call sites, not
//! a silent no-op: the registry never guesses an endpoint.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEndpoint {
    pub chain_id: u64,
    pub api_base_url: String,
    pub explorer_base_url: String,
    pub display_name: String,
}

impl VerificationEndpoint {
    fn new(chain_id: u64, api_base_url: &str, explorer_base_url: &str, display_name: &str) -> Self {
        Self {
            chain_id,
            api_base_url: api_base_url.to_string(),
            explorer_base_url: explorer_base_url.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: HashMap<u64, VerificationEndpoint>,
}

impl EndpointRegistry {
    pub fn from_endpoints(endpoints: Vec<VerificationEndpoint>) -> Self {
        Self {
            endpoints: endpoints.into_iter().map(|e| (e.chain_id, e)).collect(),
        }
    }

    pub fn get(&self, chain_id: u64) -> Option<&VerificationEndpoint> {
        self.endpoints.get(&chain_id)
    }

    pub fn supported_chain_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.endpoints.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The endpoints that ship with the pipeline.
    pub fn builtin() -> Self {
        Self::from_endpoints(vec![
            VerificationEndpoint::new(
                1,
                "https://api.etherscan.io/api",
                "https://etherscan.io",
                "Ethereum Mainnet",
            ),
            VerificationEndpoint::new(
                11155111,
                "https://api-sepolia.etherscan.io/api",
                "https://sepolia.etherscan.io",
                "Sepolia Testnet",
            ),
            VerificationEndpoint::new(
                137,
                "https://api.polygonscan.com/api",
                "https://polygonscan.com",
                "Polygon",
            ),
            VerificationEndpoint::new(
                80001,
                "https://api-testnet.polygonscan.com/api",
                "https://mumbai.polygonscan.com",
                "Polygon Mumbai",
            ),
            VerificationEndpoint::new(
                56,
                "https://api.bscscan.com/api",
                "https://bscscan.com",
                "BNB Smart Chain",
            ),
            VerificationEndpoint::new(
                42161,
                "https://api.arbiscan.io/api",
                "https://arbiscan.io",
                "Arbitrum One",
            ),
            VerificationEndpoint::new(
                10,
                "https://api-optimistic.etherscan.io/api",
                "https://optimistic.etherscan.io",
                "Optimism",
            ),
        ])
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
