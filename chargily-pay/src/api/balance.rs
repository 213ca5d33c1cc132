use crate::client::ChargilyClient;
use crate::endpoint;
use crate::error::ChargilyResult;
use crate::types::Balance;

impl ChargilyClient {
    /// Current balance of every wallet
    pub async fn get_balance(&self) -> ChargilyResult<Balance> {
        self.call(&endpoint::GET_BALANCE, None).await
    }
}
