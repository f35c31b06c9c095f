pub mod keypair;
pub mod payer;
pub mod rpc;
pub mod transaction;
