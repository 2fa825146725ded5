use crate::error::Result;
use crate::identifier::Identifier;

use super::Declaration;
use super::definition::Message;
use super::types::DefinitionRef;

/// A single remote procedure of a [`Service`].
///
/// Request and response types are taken from existing [`Message`] values;
/// there is no forward-reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rpc {
    pub label: Identifier,
    request: DefinitionRef,
    pub stream_request: bool,
    response: DefinitionRef,
    pub stream_response: bool,
}

impl Rpc {
    pub fn new(label: &str, request: &Message, response: &Message) -> Result<Self> {
        Ok(Rpc {
            label: Identifier::new(label)?,
            request: request.into(),
            stream_request: false,
            response: response.into(),
            stream_response: false,
        })
    }

    #[must_use]
    pub fn with_stream_request(mut self, stream: bool) -> Self {
        self.stream_request = stream;
        self
    }

    #[must_use]
    pub fn with_stream_response(mut self, stream: bool) -> Self {
        self.stream_response = stream;
        self
    }

    #[must_use]
    pub fn request(&self) -> &DefinitionRef {
        &self.request
    }

    #[must_use]
    pub fn response(&self) -> &DefinitionRef {
        &self.response
    }

    pub fn set_request(&mut self, request: &Message) {
        self.request = request.into();
    }

    pub fn set_response(&mut self, response: &Message) {
        self.response = response.into();
    }
}

/// A `service` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub label: Identifier,
    pub rpcs: Vec<Rpc>,
}

impl Service {
    pub fn new(label: &str) -> Result<Self> {
        Ok(Service {
            label: Identifier::new(label)?,
            rpcs: Vec::new(),
        })
    }
}

impl Declaration for Rpc {
    fn label(&self) -> &Identifier {
        &self.label
    }

    fn set_label(&mut self, label: &str) -> Result<()> {
        self.label = Identifier::new(label)?;
        Ok(())
    }
}

impl Declaration for Service {
    fn label(&self) -> &Identifier {
        &self.label
    }

    fn set_label(&mut self, label: &str) -> Result<()> {
        self.label = Identifier::new(label)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::DefinitionKind;

    #[test]
    fn rpc_references_existing_messages() {
        let request = Message::new("GetFooRequest").unwrap();
        let response = Message::new("Foo").unwrap();
        let rpc = Rpc::new("GetFoo", &request, &response).unwrap();
        assert_eq!(rpc.request().label(), &"GetFooRequest");
        assert_eq!(rpc.response().kind(), DefinitionKind::Message);
        assert!(!rpc.stream_request && !rpc.stream_response);
    }

    #[test]
    fn rpcs_keep_insertion_order() {
        let m = Message::new("M").unwrap();
        let mut service = Service::new("Things").unwrap();
        for label in ["Zeta", "Alpha", "Mid"] {
            service.rpcs.push(Rpc::new(label, &m, &m).unwrap());
        }
        let labels: Vec<&str> = service.rpcs.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn invalid_service_label_is_rejected() {
        assert!(Service::new("my-service").is_err());
        let m = Message::new("M").unwrap();
        assert!(Rpc::new("Get Foo", &m, &m).is_err());
    }
}
