#[cfg(any(test, feature = "testing"))]
use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::Storage;

/// A storage handle that may be owned or borrowed, read-only access.
pub trait Dyn {
    fn as_dyn(&self) -> &dyn Storage;
}

/// A storage handle that may be owned or borrowed, read-write access.
pub trait DynMut: Dyn {
    fn as_dyn_mut(&mut self) -> &mut dyn Storage;
}

impl<'r> Dyn for &'r (dyn Storage + 'r) {
    fn as_dyn(&self) -> &dyn Storage {
        *self
    }
}

impl<'r> Dyn for &'r mut (dyn Storage + 'r) {
    fn as_dyn(&self) -> &dyn Storage {
        &**self
    }
}

impl<'r> DynMut for &'r mut (dyn Storage + 'r) {
    fn as_dyn_mut(&mut self) -> &mut dyn Storage {
        &mut **self
    }
}

#[cfg(any(test, feature = "testing"))]
impl Dyn for MockStorage {
    fn as_dyn(&self) -> &dyn Storage {
        self
    }
}

#[cfg(any(test, feature = "testing"))]
impl DynMut for MockStorage {
    fn as_dyn_mut(&mut self) -> &mut dyn Storage {
        self
    }
}
