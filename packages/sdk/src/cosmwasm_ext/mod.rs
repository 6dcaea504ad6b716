use cosmwasm_std::Empty;

pub mod as_dyn;

pub type CustomMsg = Empty;

pub type Response = cosmwasm_std::Response<CustomMsg>;

pub type CosmosMsg = cosmwasm_std::CosmosMsg<CustomMsg>;

pub type SubMsg = cosmwasm_std::SubMsg<CustomMsg>;
