use std::collections::HashMap;

use crate::error::StageError;
use crate::packet::Packet;

/// The type of data flowing through a port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortType {
    /// A grayscale or color image.
    Image,
    /// A single-channel image used to select pixels.
    Mask,
}

/// A named, typed port of a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Port {
    /// The name of the port.
    pub name: &'static str,
    /// The type of the port.
    pub ty: PortType,
}

/// The declared ports of a stage.
///
/// The contract is static per stage type; the host can inspect it before
/// wiring the stage into a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    /// The input ports of the stage.
    pub inputs: Vec<Port>,
    /// The output ports of the stage.
    pub outputs: Vec<Port>,
}

/// The packets delivered to a stage for one invocation, keyed by port name.
#[derive(Debug, Default)]
pub struct StageInputs(HashMap<&'static str, Packet>);

impl StageInputs {
    /// Create an empty set of inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a packet to the given port.
    pub fn insert(&mut self, port: &'static str, packet: Packet) {
        self.0.insert(port, packet);
    }

    /// Take the packet delivered to the given port.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::MissingInput`] if no packet was delivered.
    pub fn take(&mut self, port: &'static str) -> Result<Packet, StageError> {
        self.0.remove(port).ok_or(StageError::MissingInput(port))
    }
}

/// The packets emitted by a stage for one invocation, keyed by port name.
#[derive(Debug, Default)]
pub struct StageOutputs(HashMap<&'static str, Packet>);

impl StageOutputs {
    /// Create an empty set of outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a packet on the given port.
    pub fn insert(&mut self, port: &'static str, packet: Packet) {
        self.0.insert(port, packet);
    }

    /// Take the packet emitted on the given port.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::MissingOutput`] if nothing was emitted.
    pub fn take(&mut self, port: &'static str) -> Result<Packet, StageError> {
        self.0.remove(port).ok_or(StageError::MissingOutput(port))
    }
}

/// A single named processing node in a dataflow graph.
///
/// A stage is a stateless per-invocation function of its inputs: it holds no
/// state between invocations and is safe to invoke concurrently on
/// independent input sets.
pub trait Stage: Send + Sync {
    /// The name the stage is registered under.
    fn name(&self) -> &'static str;

    /// The declared input and output ports of the stage.
    fn contract(&self) -> Contract;

    /// Process one set of inputs into one set of outputs.
    fn process(&self, inputs: StageInputs) -> Result<StageOutputs, StageError>;
}
