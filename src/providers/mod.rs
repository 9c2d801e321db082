pub mod awesome_api;
pub mod coingecko;
pub mod util;

pub use awesome_api::AwesomeApiProvider;
pub use coingecko::CoinGeckoProvider;
