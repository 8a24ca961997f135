pub mod envelope;
pub mod mock;
pub mod redaction;
pub mod transport;

pub use envelope::{RpcErrorObject, RpcRequest, RpcResponse, JSON_RPC_VERSION, REQUEST_ID};
pub use mock::{MockReply, MockTransport};
pub use transport::{HttpTransport, Transport};
