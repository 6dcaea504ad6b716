use sdk::{
    cosmwasm_ext::as_dyn::storage::{Dyn, DynMut},
    cosmwasm_std::Addr,
};

use crate::{SingleUserAccess, error::Result};

const CONTRACT_OWNER_NAMESPACE: &str = "contract_owner";

/// The account that instantiated the contract
pub struct ContractOwnerAccess<S>
where
    S: Dyn,
{
    access: SingleUserAccess<S>,
}

impl<S> ContractOwnerAccess<S>
where
    S: Dyn,
{
    pub const fn new(storage: S) -> Self {
        Self {
            access: SingleUserAccess::new(storage, CONTRACT_OWNER_NAMESPACE),
        }
    }

    pub fn owner(&self) -> Result<Addr> {
        self.access.granted_to()
    }
}

impl<S> ContractOwnerAccess<S>
where
    S: DynMut,
{
    pub fn grant_to(&mut self, user: &Addr) -> Result {
        self.access.grant_to(user)
    }
}
