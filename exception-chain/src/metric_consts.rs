pub const CHAINS_CONVERTED: &str = "exception_chain_converted";
pub const CHAINS_TRUNCATED: &str = "exception_chain_truncated";
