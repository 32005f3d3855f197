#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

/*!
Validation flow for adding a Minecraft server to a status-monitoring
integration.

# Introduction

Users describe a server as a single string: a hostname, an IPv4 or IPv6
literal, optionally followed by a port (`mc.example.com`, `1.1.1.1:25565`,
`[2001:db8::1]:25565`). Before the host application persists anything, that
string has to be parsed, the effective endpoint discovered, and the server
probed once to confirm it is actually reachable.

`mc-config-flow` implements that pipeline:

1. **Parse** the address. Ports must lie in `1024..=65535`; anything else
   re-prompts the user with the `invalid_port` error code.
2. **Discover** the endpoint. When no port was given, a DNS SRV lookup for
   `_minecraft._tcp.<host>` may redirect to a canonical target; lookup
   failures silently fall back to the default port `25565`.
3. **Probe** the endpoint with a single status query. Any network-level
   failure re-prompts with `cannot_connect`.
4. On success, emit a [`ConfigRecord`] for the host application to persist.

The DNS lookup and the status query are injected capabilities, the
[`SrvResolver`] and [`StatusProbe`] traits, so integrations pick their own
backends and tests substitute fakes. The host application's form machinery
is likewise abstracted behind [`FlowEngine`].

```no_run
use mc_config_flow::{
    probe::StatusProbe, resolver::SrvResolver, ConfigFlow, ConfigRecord, FlowEngine, FlowStep,
    UserInput, ValidationError,
};

enum Step {
    Form(Option<ValidationError>),
    Entry(ConfigRecord),
}

struct Engine;

impl FlowEngine for Engine {
    type Outcome = Step;

    fn render_form(&mut self, _step: FlowStep, error: Option<ValidationError>) -> Step {
        Step::Form(error)
    }

    fn finish(&mut self, record: ConfigRecord) -> Step {
        Step::Entry(record)
    }
}

async fn add_server<R: SrvResolver, P: StatusProbe>(resolver: R, probe: P) {
    let mut flow = ConfigFlow::new(resolver, probe);
    let input = UserInput {
        name: "Minecraft Server".to_string(),
        host: "mc.example.com".to_string(),
    };
    match flow.step_user(&mut Engine, Some(input)).await {
        Step::Entry(record) => println!("configured {}", record.title),
        Step::Form(error) => eprintln!("rejected: {:?}", error),
    }
}
```

# Backends

Enabling the `hickory` feature implements [`SrvResolver`] for
`hickory_resolver`'s `Resolver`, and the `tcp` feature provides
[`TcpProbe`], a plain TCP reachability probe. Integrations that speak the
full status protocol implement [`StatusProbe`] on their own client instead.

[`SrvResolver`]: resolver::SrvResolver
[`StatusProbe`]: probe::StatusProbe
[`TcpProbe`]: probe::TcpProbe
*/

mod address;
pub use address::{AddressError, ServerAddress, PORT_RANGE};

mod discovery;
pub use discovery::{resolve_endpoint, Endpoint, DEFAULT_PORT, SRV_SERVICE};

mod flow;
pub use flow::{
    ConfigFlow, ConfigRecord, FlowEngine, FlowState, FlowStep, UserInput, ValidationError,
    DEFAULT_NAME,
};

mod record;
pub use record::SrvRecord;

pub mod probe;
pub mod resolver;
