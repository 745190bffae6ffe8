use jobboard_client::IdentityClient;
use jobboard_types::ClientConfig;

#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityClient,
    pub client_config: ClientConfig,
}
