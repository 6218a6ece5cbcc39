//! Core domain model shared across the Argo-Flow workspace.
//!
//! The pipeline this crate anchors is:
//!
//! ```text
//! MessageStore --build_graph--> FlowGraph --layout--> positioned FlowGraph
//! ```
//!
//! Everything here is a pure data transformation over canned sample data;
//! there is no I/O and no fallible operation.

mod builder;
pub mod data;
mod graph;
mod message;

pub use builder::{build_graph, demo_graph};
pub use graph::{ChartKind, ConnectorSide, FlowEdge, FlowGraph, FlowNode, NodeKind};
pub use message::{Message, MessageStore};
