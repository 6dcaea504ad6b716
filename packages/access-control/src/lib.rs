use sdk::{
    cosmwasm_ext::as_dyn::storage::{Dyn, DynMut},
    cosmwasm_std::Addr,
    cw_storage_plus::Item,
};

pub use self::contract_owner::ContractOwnerAccess;
use self::error::Result;

mod contract_owner;
pub mod error;

/// A permission granted to a single address, kept under its own storage namespace
pub struct SingleUserAccess<S>
where
    S: Dyn,
{
    storage: S,
    storage_item: Item<Addr>,
}

impl<S> SingleUserAccess<S>
where
    S: Dyn,
{
    pub const fn new(storage: S, storage_namespace: &'static str) -> Self {
        Self {
            storage,
            storage_item: Item::new(storage_namespace),
        }
    }

    pub fn granted_to(&self) -> Result<Addr> {
        self.storage_item
            .load(self.storage.as_dyn())
            .map_err(Into::into)
    }
}

impl<S> SingleUserAccess<S>
where
    S: DynMut,
{
    pub fn grant_to(&mut self, user: &Addr) -> Result {
        self.storage_item
            .save(self.storage.as_dyn_mut(), user)
            .map_err(Into::into)
    }
}
