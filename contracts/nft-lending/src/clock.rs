use sdk::cosmwasm_std::{BlockInfo, Env, Timestamp};

/// The source of the current time
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl Clock for Env {
    fn now(&self) -> Timestamp {
        self.block.now()
    }
}

impl Clock for BlockInfo {
    fn now(&self) -> Timestamp {
        self.time
    }
}

/// A clock stopped at a given instant
impl Clock for Timestamp {
    fn now(&self) -> Timestamp {
        *self
    }
}
