//! The configuration flow itself.

use crate::{
    probe::StatusProbe, resolve_endpoint, resolver::SrvResolver, AddressError, ServerAddress,
};
use serde::{Deserialize, Serialize};

/// Default display name offered for new entries.
pub const DEFAULT_NAME: &str = "Minecraft Server";

/// User-visible validation failures.
///
/// These are the only two errors a submission can surface. DNS resolution
/// failures are absorbed by [`resolve_endpoint`] and never reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The port was malformed or outside the accepted range.
    #[error("port must be an integer in [1024, 65535]")]
    InvalidPort,
    /// The status probe could not reach the server.
    #[error("could not connect to the server")]
    CannotConnect,
}

impl ValidationError {
    /// Stable error code attached to the re-rendered form.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidPort => "invalid_port",
            ValidationError::CannotConnect => "cannot_connect",
        }
    }
}

impl From<AddressError> for ValidationError {
    fn from(error: AddressError) -> Self {
        match error {
            AddressError::InvalidPort => ValidationError::InvalidPort,
        }
    }
}

/// Form input submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    /// Display name for the new entry.
    pub name: String,
    /// Server address as typed: `host` or `host:port`.
    pub host: String,
}

/// Finalized configuration produced by a successful flow, handed to the
/// host application's persistence layer as a flat key-value record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Entry title: the host string exactly as the user entered it.
    pub title: String,
    /// User-chosen display name.
    pub name: String,
    /// Host to monitor: the parsed literal for direct IPv4/IPv6 input,
    /// the bare hostname otherwise. Never carries a port.
    pub host: String,
}

/// Steps of the flow. There is a single input step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    /// The name/host input form.
    User,
}

/// Lifecycle states of a flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for the user to submit the form.
    AwaitingInput,
    /// A record was emitted; the flow is finished.
    Done,
}

/// Surface of the host application's form machinery driven by the flow.
pub trait FlowEngine {
    /// Value handed back to whatever drives the flow.
    type Outcome;

    /// (Re-)displays the input form, optionally with a validation error.
    fn render_form(&mut self, step: FlowStep, error: Option<ValidationError>) -> Self::Outcome;

    /// Persists a finalized record and ends the flow.
    fn finish(&mut self, record: ConfigRecord) -> Self::Outcome;
}

/// Orchestrates validation of one configuration session.
///
/// Each submission runs the address parser, endpoint discovery, and the
/// status probe in sequence, then either finishes the flow or re-renders
/// the form with an error code. Nothing is kept between submissions: a
/// rejected submission leaves the flow back in
/// [`FlowState::AwaitingInput`].
#[derive(Debug)]
pub struct ConfigFlow<Resolver, Probe> {
    resolver: Resolver,
    probe: Probe,
    state: FlowState,
}

impl<Resolver: SrvResolver, Probe: StatusProbe> ConfigFlow<Resolver, Probe> {
    /// Creates a flow around the given DNS and status-query capabilities.
    pub fn new(resolver: Resolver, probe: Probe) -> Self {
        Self {
            resolver,
            probe,
            state: FlowState::AwaitingInput,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Handles the user step: renders the form when `input` is absent,
    /// otherwise validates the submission.
    pub async fn step_user<E: FlowEngine>(
        &mut self,
        engine: &mut E,
        input: Option<UserInput>,
    ) -> E::Outcome {
        let input = match input {
            Some(input) => input,
            None => return engine.render_form(FlowStep::User, None),
        };
        match self.validate(&input).await {
            Ok(record) => {
                self.state = FlowState::Done;
                engine.finish(record)
            }
            Err(error) => {
                self.state = FlowState::AwaitingInput;
                engine.render_form(FlowStep::User, Some(error))
            }
        }
    }

    async fn validate(&self, input: &UserInput) -> Result<ConfigRecord, ValidationError> {
        let address: ServerAddress = input.host.parse()?;
        let endpoint = resolve_endpoint(&self.resolver, &address).await;
        match self.probe.status(&endpoint).await {
            Ok(_status) => {
                #[cfg(feature = "log")]
                tracing::info!(endpoint = %endpoint, "status probe succeeded");
                Ok(ConfigRecord {
                    title: input.host.clone(),
                    name: input.name.clone(),
                    host: address.host().to_string(),
                })
            }
            Err(_error) => {
                #[cfg(feature = "log")]
                tracing::info!(endpoint = %endpoint, error = %_error, "status probe failed");
                Err(ValidationError::CannotConnect)
            }
        }
    }
}
