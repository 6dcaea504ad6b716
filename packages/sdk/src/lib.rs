#[cfg(any(feature = "schema", feature = "testing"))]
pub use cosmwasm_schema::{self, schemars};
pub use cosmwasm_std;
#[cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
pub use cw_multi_test;
#[cfg(feature = "storage")]
pub use cw_storage_plus;

#[cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
pub mod testing;

pub mod cosmwasm_ext;
