use serde::Serialize;

use sdk::{cosmwasm_ext::Response as CwResponse, cosmwasm_std::to_json_binary};

use crate::{
    error::{self, Error},
    message::Response as MessageResponse,
};

pub fn empty_response() -> CwResponse {
    response_only_messages(MessageResponse::default())
}

pub fn response<T, E>(response: T) -> Result<CwResponse, E>
where
    T: Serialize,
    error::Error: Into<E>,
{
    response_with_messages(response, MessageResponse::default())
}

pub fn response_only_messages<M>(messages: M) -> CwResponse
where
    M: Into<MessageResponse>,
{
    let MessageResponse { messages, events } = messages.into();

    let cw_resp: CwResponse = messages
        .into_iter()
        .fold(Default::default(), CwResponse::add_submessage);

    events.into_iter().fold(cw_resp, CwResponse::add_event)
}

pub fn response_with_messages<T, M, E>(response: T, messages: M) -> Result<CwResponse, E>
where
    T: Serialize,
    error::Error: Into<E>,
    M: Into<MessageResponse>,
{
    to_json_binary(&response)
        .map_err(Error::Serialization)
        .map_err(Into::into)
        .map(|resp_bin| response_only_messages(messages).set_data(resp_bin))
}
